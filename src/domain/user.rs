use serde::{Deserialize, Serialize};

/// User record as returned by the remote users API.
///
/// Extra fields sent by the API (address, company) are ignored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl User {
    /// Case-insensitive substring match against `name` and `email`.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leanne() -> User {
        User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: "1-770-736-8031 x56442".to_string(),
            website: "hildegard.org".to_string(),
        }
    }

    #[test]
    fn matches_name_and_email_ignoring_case() {
        let user = leanne();
        assert!(user.matches("leanne"));
        assert!(user.matches("april.biz"));
        assert!(user.matches("sincere"));
        assert!(user.matches(""));
    }

    #[test]
    fn does_not_match_other_fields() {
        let user = leanne();
        assert!(!user.matches("bret"));
        assert!(!user.matches("hildegard"));
        assert!(!user.matches("770"));
    }

    #[test]
    fn deserializes_api_payload_with_extra_fields() {
        let payload = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"street": "Kulas Light", "city": "Gwenborough"},
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {"name": "Romaguera-Crona"}
        }"#;

        let user: User = serde_json::from_str(payload).expect("valid user payload");
        assert_eq!(user, leanne());
    }
}
