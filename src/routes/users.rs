use actix_web::http::StatusCode;
use actix_web::{HttpRequest, Responder, get, web};
use serde::Deserialize;
use tera::Tera;

use crate::domain::locale::Locale;
use crate::dto::users::{UsersPageData, UsersQuery};
use crate::fetcher::JsonFetcher;
use crate::i18n::Translator;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::users as users_service;
use crate::store::SharedStore;

#[derive(Deserialize)]
pub struct UsersQueryParams {
    q: Option<String>,
    page: Option<usize>,
}

impl From<UsersQueryParams> for UsersQuery {
    fn from(params: UsersQueryParams) -> Self {
        Self {
            search: params.q,
            page: params.page,
        }
    }
}

/// Prefers the locale resolved by the middleware over the raw path segment.
fn request_locale(resolved: Option<web::ReqData<Locale>>, segment: &str) -> Locale {
    resolved
        .map(|locale| locale.into_inner())
        .unwrap_or_else(|| Locale::from_param(segment))
}

/// "Showing 1-5 of 12 users", or `None` when nothing is listed.
fn showing_text(translator: &Translator, data: &UsersPageData) -> Option<String> {
    let page = data.users.as_ref().filter(|page| page.total > 0)?;
    let count = if page.total == 1 {
        translator.t("users.user")
    } else {
        translator.t("users.users")
    };
    Some(translator.t_with(
        "users.showing",
        [
            ("start", page.start.to_string()),
            ("end", page.end.to_string()),
            ("total", page.total.to_string()),
            ("count", count),
        ],
    ))
}

#[get("/{locale}")]
pub async fn show_users(
    resolved: Option<web::ReqData<Locale>>,
    params: web::Query<UsersQueryParams>,
    req: HttpRequest,
    store: web::Data<SharedStore>,
    fetcher: web::Data<dyn JsonFetcher>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let locale = request_locale(resolved, req.match_info().get("locale").unwrap_or_default());
    store.write().set_locale(locale);
    let translator = Translator::new(locale);

    let data = users_service::load_users_page(
        store.get_ref(),
        fetcher.get_ref(),
        &server_config.users_api_url,
        params.into_inner().into(),
    )
    .await;

    let mut context = base_context(&translator, req.path(), req.query_string());
    context.insert("showing", &showing_text(&translator, &data));
    context.insert("data", &data);
    context.insert("search_query", data.search_query.as_deref().unwrap_or_default());

    let mut response = render_template(&tera, "users/index.html", &context);
    if data.status == "error" && response.status().is_success() {
        *response.status_mut() = StatusCode::BAD_GATEWAY;
    }
    response
}

#[get("/{locale}/{tail:.*}")]
pub async fn not_found(
    path: web::Path<(String, String)>,
    resolved: Option<web::ReqData<Locale>>,
    req: HttpRequest,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (segment, tail) = path.into_inner();
    let locale = request_locale(resolved, &segment);
    if tail.is_empty() {
        return redirect(&format!("/{locale}"));
    }

    let translator = Translator::new(locale);
    let context = base_context(&translator, req.path(), req.query_string());

    let mut response = render_template(&tera, "main/not_found.html", &context);
    if response.status().is_success() {
        *response.status_mut() = StatusCode::NOT_FOUND;
    }
    response
}
