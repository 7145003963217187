#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use tera::Tera;

use intl_users::fetcher::{FetchError, FetchResult, JsonFetcher};
use intl_users::middleware::DEFAULT_EXCLUDED_PATHS;
use intl_users::models::config::ServerConfig;

/// Fetcher answering with a fixed script of responses, in order.
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<FetchResult<Value>>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new(responses: impl IntoIterator<Item = FetchResult<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JsonFetcher for ScriptedFetcher {
    async fn fetch_json(&self, _url: &str) -> FetchResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Request("no scripted response".to_string())))
    }
}

pub fn users_json(count: usize) -> Value {
    Value::Array(
        (1..=count)
            .map(|id| {
                json!({
                    "id": id,
                    "name": format!("User {id}"),
                    "username": format!("user{id}"),
                    "email": format!("user{id}@example.com"),
                    "phone": format!("555-01{id:02}"),
                    "website": format!("user{id}.example.com"),
                    "company": {"name": "Example"}
                })
            })
            .collect(),
    )
}

pub fn server_error() -> FetchError {
    FetchError::Status {
        status: 500,
        reason: "Internal Server Error".to_string(),
    }
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*".to_string(),
        users_api_url: "http://users.test/users".to_string(),
        excluded_paths: DEFAULT_EXCLUDED_PATHS.map(String::from).to_vec(),
        request_timeout_secs: None,
    }
}

pub fn tera() -> Tera {
    Tera::new(&test_config().templates_dir).expect("templates parse")
}

/// Builds the application service the way `run` wires it.
macro_rules! users_app {
    ($fetcher:expr, $store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(intl_users::middleware::LocaleRedirect::default())
                .configure(intl_users::routes::configure)
                .app_data(actix_web::web::Data::new(common::tera()))
                .app_data($store.clone())
                .app_data(actix_web::web::Data::from(
                    $fetcher.clone() as std::sync::Arc<dyn intl_users::fetcher::JsonFetcher>
                ))
                .app_data(actix_web::web::Data::new(common::test_config())),
        )
        .await
    };
}
