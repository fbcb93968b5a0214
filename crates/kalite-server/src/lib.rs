//! kalite-server
//!
//! HTTP service hosting independent wizard sessions in memory, plus
//! read-only taxonomy lookups for dropdowns.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod sink;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use kalite_taxonomy::TaxonomySet;
use kalite_wizard::submit::SubmitHandler;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use config::ServerConfig;
use sink::{LogSink, RemoteStoreSink};
use state::AppState;

/// Build state from config: taxonomy overrides and the submit sink.
pub fn build_state(config: &ServerConfig) -> eyre::Result<AppState> {
    let mut taxonomies = TaxonomySet::builtin();
    if let Some(dir) = &config.taxonomy_dir {
        let replaced = kalite_taxonomy::loader::load_overrides(dir, &mut taxonomies)?;
        tracing::info!(dir = %dir.display(), replaced, "taxonomy overrides loaded");
    }

    let submitter: Arc<dyn SubmitHandler> = match &config.store {
        Some(store) => {
            tracing::info!(url = %store.url, "records go to remote data store");
            Arc::new(RemoteStoreSink::new(store))
        }
        None => {
            tracing::warn!("no data store configured, records will only be logged");
            Arc::new(LogSink)
        }
    };

    Ok(AppState::new(taxonomies, submitter))
}

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Taxonomies (read-only)
        .route("/taxonomies", get(routes::taxonomies::list_taxonomies))
        .route("/taxonomies/{id}", get(routes::taxonomies::get_taxonomy))
        .route(
            "/taxonomies/{id}/children/{code}",
            get(routes::taxonomies::children_of),
        )
        .route(
            "/taxonomies/{id}/children/{category}/{sub}",
            get(routes::taxonomies::children_at),
        )
        .route(
            "/taxonomies/{id}/validate",
            post(routes::taxonomies::validate_path),
        )
        // Wizard sessions
        .route("/wizards", post(routes::wizards::open))
        .route(
            "/wizards/{id}",
            get(routes::wizards::get).delete(routes::wizards::close),
        )
        .route("/wizards/{id}/fields", put(routes::wizards::update_fields))
        .route("/wizards/{id}/next", post(routes::wizards::next))
        .route("/wizards/{id}/previous", post(routes::wizards::previous))
        .route("/wizards/{id}/submit", post(routes::wizards::submit))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::access_log::access_log))
                .layer(cors),
        )
        .with_state(state)
}
