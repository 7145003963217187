pub mod domain;
pub mod i18n;
pub mod pagination;
pub mod store;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod fetcher;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: models::config::ServerConfig) -> std::io::Result<()> {
    use std::sync::Arc;
    use std::time::Duration;

    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware as actix_middleware, web};
    use tera::Tera;

    use crate::domain::locale::Locale;
    use crate::fetcher::{HttpFetcher, JsonFetcher};
    use crate::middleware::LocaleRedirect;
    use crate::store::{AppStore, SharedStore};

    let fetcher = HttpFetcher::new(server_config.request_timeout_secs.map(Duration::from_secs))
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;
    let fetcher: Arc<dyn JsonFetcher> = Arc::new(fetcher);

    // One store for the whole process, shared by every worker.
    let store = web::Data::new(SharedStore::new(AppStore::new(Locale::DEFAULT)));

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Listening on {}:{}, users API at {}",
        bind_address.0,
        bind_address.1,
        server_config.users_api_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(LocaleRedirect::new(server_config.excluded_paths.clone()))
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(routes::configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(store.clone())
            .app_data(web::Data::from(fetcher.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
