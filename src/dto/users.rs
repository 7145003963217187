//! DTOs shaped for the users page and the users API.

use serde::Serialize;

use crate::domain::user::User;
use crate::pagination::Paginated;

/// Query parameters accepted by the users page and API.
#[derive(Debug, Default, Clone)]
pub struct UsersQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// Data required to render the users template.
#[derive(Debug, Serialize)]
pub struct UsersPageData {
    /// One of `loading`, `success` or `error`.
    pub status: &'static str,
    /// Human-readable failure, set in the `error` state.
    pub error: Option<String>,
    /// Current page of the filtered users, set in the `success` state.
    pub users: Option<Paginated<User>>,
    /// Size of the unfiltered collection.
    pub total_users: usize,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}

/// Payload of `GET /api/v1/users`.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    /// Number of users matching the filter.
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub users: Vec<User>,
}

impl From<Paginated<User>> for UsersResponse {
    fn from(page: Paginated<User>) -> Self {
        Self {
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
            users: page.items,
        }
    }
}
