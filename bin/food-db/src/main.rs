//! # food-db Binary
//!
//! The entry point that assembles the application based on compile-time features.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use fd_api::{configure_routes, middleware, AppState};
use fd_configs::{LogSettings, Settings};
use fd_core::FoodRepo;
use fd_services::FoodServiceImpl;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[cfg(not(any(feature = "db-sqlite", feature = "db-memory")))]
compile_error!("enable a storage plugin: `db-sqlite` or `db-memory`");

/// `RUST_LOG` wins over `log.filter` when set.
fn init_tracing(log: &LogSettings) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&log.filter)
            .with_context(|| format!("invalid log filter {:?}", log.filter))?,
    };

    let builder = fmt().with_env_filter(filter);
    let installed = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

#[cfg(feature = "db-sqlite")]
async fn build_repo(settings: &Settings) -> anyhow::Result<Arc<dyn FoodRepo>> {
    use secrecy::ExposeSecret;

    let repo = fd_db_sqlite::SqliteFoodRepo::connect(
        settings.database.url.expose_secret(),
        settings.database.max_connections,
    )
    .await
    .context("failed to init SQLite")?;
    Ok(Arc::new(repo))
}

#[cfg(all(feature = "db-memory", not(feature = "db-sqlite")))]
async fn build_repo(_settings: &Settings) -> anyhow::Result<Arc<dyn FoodRepo>> {
    tracing::warn!("using in-memory storage; data is lost on restart");
    Ok(Arc::new(fd_db_memory::MemoryFoodRepo::new()))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_tracing(&settings.log)?;
    if let Some(path) = &settings.env_file {
        info!(path = %path.display(), "loaded .env");
    }

    let repo = build_repo(&settings).await?;
    let service = FoodServiceImpl::new(repo, settings.repository.timeout());
    let state = web::Data::new(AppState::new(Arc::new(service)));

    let (host, port) = settings.bind_address();
    info!(%host, port, "food-db starting");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::cors_policy())
            .wrap(middleware::standard_middleware())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind {host}:{port}"))?
    .run()
    .await?;

    Ok(())
}
