//! Translation lookup with fallback to the default locale.
//!
//! Keys are dotted paths such as `users.title`. A key missing from the
//! requested locale is looked up again in [`Locale::DEFAULT`]; a key missing
//! from both resolves to itself, so rendering never fails on a bad key.

use std::fmt::Display;

use serde_json::{Map, Value};

use crate::domain::locale::Locale;

pub mod table;

use table::Node;

/// Looks up `key` in a single locale's table.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    table::root(locale).resolve(key)
}

/// Two-tier lookup: the requested locale, then the default locale.
pub fn lookup_with_fallback(locale: Locale, key: &str) -> Option<&'static str> {
    lookup(locale, key).or_else(|| {
        if locale == Locale::DEFAULT {
            None
        } else {
            lookup(Locale::DEFAULT, key)
        }
    })
}

/// Returns the translated string, or `key` verbatim when it is unknown.
pub fn get_translation(locale: Locale, key: &str) -> String {
    lookup_with_fallback(locale, key)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Translates `key` and substitutes `{name}` placeholders.
///
/// Each parameter replaces the first occurrence of its placeholder only.
pub fn format_translation<I, K, V>(locale: Locale, key: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut translation = get_translation(locale, key);
    for (name, value) in params {
        let placeholder = format!("{{{}}}", name.as_ref());
        translation = translation.replacen(&placeholder, &value.to_string(), 1);
    }
    translation
}

/// Locale-bound translation helper handed to the view layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        get_translation(self.locale, key)
    }

    pub fn t_with<I, K, V>(&self, key: &str, params: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        format_translation(self.locale, key, params)
    }

    /// Resolves every key of the default table into a nested JSON object so
    /// templates can read `t.users.title` directly.
    pub fn catalog(&self) -> Value {
        self.resolve_node(table::root(Locale::DEFAULT), "")
    }

    fn resolve_node(&self, node: &'static Node, prefix: &str) -> Value {
        match node {
            Node::Leaf(_) => Value::String(self.t(prefix)),
            Node::Branch(children) => Value::Object(
                children
                    .iter()
                    .map(|(name, child)| {
                        let path = if prefix.is_empty() {
                            (*name).to_string()
                        } else {
                            format!("{prefix}.{name}")
                        };
                        ((*name).to_string(), self.resolve_node(child, &path))
                    })
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_english_key_resolves_in_all_locales() {
        for key in table::leaf_keys(table::root(Locale::En)) {
            for locale in Locale::ALL {
                let value = get_translation(locale, &key);
                assert!(!value.is_empty(), "{locale}: {key} is empty");
                if lookup(locale, &key).is_none() {
                    assert_eq!(value, get_translation(Locale::En, &key));
                }
            }
        }
    }

    #[test]
    fn translates_known_keys() {
        assert_eq!(get_translation(Locale::En, "users.title"), "Users");
        assert_eq!(get_translation(Locale::Fr, "users.title"), "Utilisateurs");
        assert_eq!(
            get_translation(Locale::Fr, "users.error"),
            "Erreur lors du chargement des utilisateurs"
        );
    }

    #[test]
    fn missing_french_entry_falls_back_to_english() {
        assert_eq!(lookup(Locale::Fr, "users.search"), None);
        assert_eq!(get_translation(Locale::Fr, "users.search"), "Search");
        assert_eq!(get_translation(Locale::Fr, "page.backHome"), "Back to users");
    }

    #[test]
    fn unknown_keys_resolve_to_themselves() {
        for locale in Locale::ALL {
            assert_eq!(get_translation(locale, "users.nope"), "users.nope");
            assert_eq!(get_translation(locale, "nope"), "nope");
            assert_eq!(get_translation(locale, ""), "");
        }
    }

    #[test]
    fn branch_keys_are_not_translations() {
        assert_eq!(lookup(Locale::En, "users"), None);
        assert_eq!(get_translation(Locale::En, "users"), "users");
        assert_eq!(get_translation(Locale::En, "users.title.extra"), "users.title.extra");
    }

    #[test]
    fn formats_placeholders() {
        let text = format_translation(
            Locale::En,
            "users.showing",
            [("start", "1"), ("end", "5"), ("total", "12"), ("count", "users")],
        );
        assert_eq!(text, "Showing 1-5 of 12 users");

        let text = format_translation(
            Locale::Fr,
            "users.showing",
            [("start", 11), ("end", 12), ("total", 12)],
        );
        assert_eq!(text, "Affichage de 11 à 12 sur 12 {count}");
    }

    #[test]
    fn substitution_replaces_first_occurrence_only() {
        let text = format_translation(Locale::En, "{a} and {a}", [("a", "x")]);
        assert_eq!(text, "x and {a}");
    }

    #[test]
    fn substitutions_apply_in_parameter_order() {
        let text = format_translation(
            Locale::En,
            "users.showing",
            [("start", "{end}"), ("end", "5")],
        );
        assert_eq!(text, "Showing 5-{end} of {total} {count}");
    }

    #[test]
    fn catalog_contains_fallbacks() {
        let catalog = Translator::new(Locale::Fr).catalog();
        assert_eq!(catalog["users"]["title"], "Utilisateurs");
        assert_eq!(catalog["users"]["search"], "Search");
        assert_eq!(catalog["locale"]["fr"], "Français");
    }
}
