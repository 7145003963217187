//! The user list: loading state machine, search and pagination.

use crate::domain::user::User;
use crate::dto::users::{UsersPageData, UsersQuery, UsersResponse};
use crate::fetcher::JsonFetcher;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated, clamp_page, total_pages};
use crate::services::ServiceResult;
use crate::services::data::load_cached;
use crate::store::SharedStore;

/// Store key under which the users payload is cached.
pub const USERS_CACHE_KEY: &str = "users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Success(Vec<User>),
    Error(String),
}

/// Identifies one load attempt; only the latest may complete the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Keeps the users whose name or email contains `query`, ignoring case.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| user.matches(&needle))
        .cloned()
        .collect()
}

#[derive(Debug)]
pub struct UsersView {
    state: ViewState,
    search_query: String,
    current_page: usize,
    generation: u64,
}

impl Default for UsersView {
    fn default() -> Self {
        Self::new()
    }
}

impl UsersView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            search_query: String::new(),
            current_page: 1,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Enters `Loading` and invalidates any load still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        LoadTicket(self.generation)
    }

    pub fn retry(&mut self) -> LoadTicket {
        self.begin_load()
    }

    /// Applies a load result. Returns `false` when `ticket` is stale.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: ServiceResult<Vec<User>>) -> bool {
        if ticket.0 != self.generation {
            log::debug!("Ignoring stale users load {}", ticket.0);
            return false;
        }

        self.state = match result {
            Ok(users) => ViewState::Success(users),
            Err(err) => {
                log::error!("Failed to load users: {err}");
                ViewState::Error(format!("Failed to fetch users: {err}"))
            }
        };
        self.current_page = clamp_page(self.current_page, self.total_pages());
        true
    }

    /// Replaces the search query and returns to the first page.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// Users matching the current query; empty unless loaded.
    pub fn filtered(&self) -> Vec<User> {
        match &self.state {
            ViewState::Success(users) => filter_users(users, &self.search_query),
            _ => Vec::new(),
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), DEFAULT_ITEMS_PER_PAGE)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// The current page of filtered users.
    pub fn page(&self) -> Paginated<User> {
        Paginated::from_slice(&self.filtered(), self.current_page, DEFAULT_ITEMS_PER_PAGE)
    }

    pub fn to_page_data(&self) -> UsersPageData {
        let search_query = Some(self.search_query.clone()).filter(|q| !q.is_empty());
        match &self.state {
            ViewState::Loading => UsersPageData {
                status: "loading",
                error: None,
                users: None,
                total_users: 0,
                search_query,
            },
            ViewState::Success(users) => UsersPageData {
                status: "success",
                error: None,
                users: Some(self.page()),
                total_users: users.len(),
                search_query,
            },
            ViewState::Error(message) => UsersPageData {
                status: "error",
                error: Some(message.clone()),
                users: None,
                total_users: 0,
                search_query,
            },
        }
    }
}

/// Loads the users page: fetches (or reuses) the users, then applies the
/// search query and page number.
pub async fn load_users_page<F>(
    store: &SharedStore,
    fetcher: &F,
    url: &str,
    query: UsersQuery,
) -> UsersPageData
where
    F: JsonFetcher + ?Sized,
{
    let mut view = UsersView::new();
    let ticket = view.begin_load();
    let result = load_cached(store, fetcher, url, USERS_CACHE_KEY).await;
    view.finish_load(ticket, result);

    view.set_search(query.search.unwrap_or_default());
    view.go_to_page(query.page.unwrap_or(1));

    view.to_page_data()
}

/// Returns one page of users matching the query for the JSON API.
pub async fn list_users<F>(
    store: &SharedStore,
    fetcher: &F,
    url: &str,
    query: UsersQuery,
) -> ServiceResult<UsersResponse>
where
    F: JsonFetcher + ?Sized,
{
    let users: Vec<User> = load_cached(store, fetcher, url, USERS_CACHE_KEY).await?;
    let filtered = filter_users(&users, query.search.as_deref().unwrap_or_default());
    let page = Paginated::from_slice(&filtered, query.page.unwrap_or(1), DEFAULT_ITEMS_PER_PAGE);

    Ok(page.into())
}
