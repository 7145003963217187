//! Locale resolution at the request boundary.
//!
//! Every page lives under `/{locale}`. Requests without a locale prefix are
//! redirected to the same path under the default locale; static assets and
//! API paths are left alone.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::locale::Locale;

/// Path prefixes never redirected.
pub const DEFAULT_EXCLUDED_PATHS: [&str; 3] = ["/api", "/assets", "/favicon.ico"];

/// Outcome of inspecting a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleRoute {
    /// Static or internal path, not subject to localization.
    Excluded,
    /// The path already carries this locale.
    PassThrough(Locale),
    /// The path lacks a locale and must be redirected to this target.
    Redirect(String),
}

fn is_excluded<S: AsRef<str>>(path: &str, excluded: &[S]) -> bool {
    // Anything that looks like a file name (`/logo.svg`) is a static asset.
    path.contains('.') || excluded.iter().any(|prefix| path.starts_with(prefix.as_ref()))
}

fn locale_prefix(path: &str) -> Option<Locale> {
    Locale::ALL.into_iter().find(|locale| {
        path.strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(locale.code()))
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Decides what to do with `path`.
///
/// `/` becomes `/en`, `/foo` becomes `/en/foo`; `/en`, `/fr` and anything
/// below them pass through.
pub fn resolve_locale_route<S: AsRef<str>>(path: &str, excluded: &[S]) -> LocaleRoute {
    if is_excluded(path, excluded) {
        return LocaleRoute::Excluded;
    }

    if let Some(locale) = locale_prefix(path) {
        return LocaleRoute::PassThrough(locale);
    }

    let default = Locale::DEFAULT.code();
    match path {
        "" | "/" => LocaleRoute::Redirect(format!("/{default}")),
        _ => LocaleRoute::Redirect(format!("/{default}{path}")),
    }
}

/// Rewrites `path` so it points at the same page in `locale`.
pub fn localized_path(path: &str, locale: Locale) -> String {
    let rest = match locale_prefix(path) {
        Some(current) => &path[current.code().len() + 1..],
        None if path == "/" => "",
        None => path,
    };
    format!("/{}{rest}", locale.code())
}

/// Middleware redirecting unlocalized page requests.
///
/// Resolved locales are stored in the request extensions, so handlers can
/// read them with `web::ReqData<Locale>`.
#[derive(Clone, Debug)]
pub struct LocaleRedirect {
    excluded: Rc<Vec<String>>,
}

impl LocaleRedirect {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: Rc::new(excluded.into_iter().map(Into::into).collect()),
        }
    }
}

impl Default for LocaleRedirect {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_PATHS)
    }
}

impl<S, B> Transform<S, ServiceRequest> for LocaleRedirect
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = LocaleRedirectMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LocaleRedirectMiddleware {
            service,
            excluded: Rc::clone(&self.excluded),
        }))
    }
}

pub struct LocaleRedirectMiddleware<S> {
    service: S,
    excluded: Rc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for LocaleRedirectMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match resolve_locale_route(req.path(), self.excluded.as_slice()) {
            LocaleRoute::Redirect(target) => {
                let location = match req.query_string() {
                    "" => target,
                    query => format!("{target}?{query}"),
                };
                log::debug!("Redirecting {} to {location}", req.path());

                let response = HttpResponse::TemporaryRedirect()
                    .insert_header((header::LOCATION, location))
                    .finish()
                    .map_into_right_body();
                Box::pin(async move { Ok(req.into_response(response)) })
            }
            route => {
                if let LocaleRoute::PassThrough(locale) = route {
                    req.extensions_mut().insert(locale);
                }
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &str) -> LocaleRoute {
        resolve_locale_route(path, &DEFAULT_EXCLUDED_PATHS)
    }

    #[test]
    fn root_redirects_to_default_locale() {
        assert_eq!(route("/"), LocaleRoute::Redirect("/en".to_string()));
    }

    #[test]
    fn unprefixed_paths_are_prefixed() {
        assert_eq!(
            route("/settings"),
            LocaleRoute::Redirect("/en/settings".to_string())
        );
        assert_eq!(
            route("/english"),
            LocaleRoute::Redirect("/en/english".to_string())
        );
        assert_eq!(route("/de/x"), LocaleRoute::Redirect("/en/de/x".to_string()));
    }

    #[test]
    fn localized_paths_pass_through() {
        assert_eq!(route("/en/about"), LocaleRoute::PassThrough(Locale::En));
        assert_eq!(route("/fr"), LocaleRoute::PassThrough(Locale::Fr));
        assert_eq!(route("/en"), LocaleRoute::PassThrough(Locale::En));
        assert_eq!(route("/fr/"), LocaleRoute::PassThrough(Locale::Fr));
    }

    #[test]
    fn static_and_api_paths_are_excluded() {
        assert_eq!(route("/api/v1/users"), LocaleRoute::Excluded);
        assert_eq!(route("/assets/app.css"), LocaleRoute::Excluded);
        assert_eq!(route("/favicon.ico"), LocaleRoute::Excluded);
        assert_eq!(route("/robots.txt"), LocaleRoute::Excluded);
    }

    #[test]
    fn custom_exclusions_replace_defaults() {
        let excluded = ["/health"];
        assert_eq!(
            resolve_locale_route("/health", &excluded),
            LocaleRoute::Excluded
        );
        assert_eq!(
            resolve_locale_route("/api", &excluded),
            LocaleRoute::Redirect("/en/api".to_string())
        );
    }

    #[test]
    fn localized_path_swaps_the_locale_segment() {
        assert_eq!(localized_path("/en", Locale::Fr), "/fr");
        assert_eq!(localized_path("/en/about", Locale::Fr), "/fr/about");
        assert_eq!(localized_path("/fr/about", Locale::Fr), "/fr/about");
        assert_eq!(localized_path("/about", Locale::Fr), "/fr/about");
        assert_eq!(localized_path("/", Locale::En), "/en");
    }
}
