use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;
use serde_json::json;

use crate::dto::users::UsersQuery;
use crate::fetcher::JsonFetcher;
use crate::models::config::ServerConfig;
use crate::services::users as users_service;
use crate::store::SharedStore;

#[derive(Deserialize)]
struct ApiV1UsersQueryParams {
    q: Option<String>,
    page: Option<usize>,
}

#[get("/v1/users")]
pub async fn api_v1_users(
    params: web::Query<ApiV1UsersQueryParams>,
    store: web::Data<SharedStore>,
    fetcher: web::Data<dyn JsonFetcher>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let params = params.into_inner();
    let query = UsersQuery {
        search: params.q,
        page: params.page,
    };

    match users_service::list_users(
        store.get_ref(),
        fetcher.get_ref(),
        &server_config.users_api_url,
        query,
    )
    .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list users: {err}");
            HttpResponse::BadGateway().json(json!({ "error": err.to_string() }))
        }
    }
}
