//! HTTP handlers and the helpers they share.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::locale::Locale;
use crate::i18n::Translator;
use crate::middleware::localized_path;

pub mod api;
pub mod users;

/// Entry of the locale switcher.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LocaleLink {
    pub code: &'static str,
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// Links to the current page in every supported locale.
pub fn locale_links(translator: &Translator, path: &str, query: &str) -> Vec<LocaleLink> {
    Locale::ALL
        .into_iter()
        .map(|locale| {
            let mut href = localized_path(path, locale);
            if !query.is_empty() {
                href.push('?');
                href.push_str(query);
            }
            LocaleLink {
                code: locale.code(),
                name: translator.t(&format!("locale.{}", locale.code())),
                href,
                active: locale == translator.locale(),
            }
        })
        .collect()
}

/// Context every page template expects.
pub fn base_context(translator: &Translator, path: &str, query: &str) -> Context {
    let mut context = Context::new();
    context.insert("t", &translator.catalog());
    context.insert("locale", translator.locale().code());
    context.insert("locales", &locale_links(translator, path, query));
    context.insert("current_path", path);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Registers every route of the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(actix_cors::Cors::permissive())
            .service(api::api_v1_users),
    )
    .service(users::show_users)
    .service(users::not_found);
}
