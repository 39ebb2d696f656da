use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{Request, Response},
    middleware, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Span;
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    routes::{
        activity_routes::ActivityRoutes, auth_routes::AuthRoutes,
        edit_suggestion_routes::EditSuggestionRoutes, favorite_routes::FavoriteRoutes,
        song_routes::SongRoutes,
    },
    storage::Storage,
};

pub use self::error::{Error, Result};

pub mod auth;
pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod helpers;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;
pub mod validators;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub auth_config: AuthConfig,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, auth_config: AuthConfig) -> Self {
        Self {
            storage,
            auth_config,
        }
    }
}

/// Builds the full `/api` router. Routes in the protected group share paths
/// with public ones but only their own methods go through `mw_auth`.
pub fn build_router(app_state: AppState) -> Router {
    let public_routes = Router::new()
        .merge(SongRoutes::public())
        .merge(ActivityRoutes::routes());

    let protected_routes = Router::new()
        .merge(SongRoutes::protected())
        .merge(FavoriteRoutes::routes())
        .merge(EditSuggestionRoutes::routes())
        .merge(AuthRoutes::routes())
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            middlewares::mw_auth::mw_auth,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .with_state(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4();
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    tracing::info!("{} {}", request.method(), request.uri().path());
                })
                .on_response(
                    |response: &Response<Body>, latency: Duration, _span: &Span| {
                        let status = response.status();
                        let latency_ms = latency.as_millis();

                        match status.as_u16() {
                            200..=299 => tracing::info!("{} ({}ms)", status, latency_ms),
                            400..=499 => tracing::warn!("{} ({}ms)", status, latency_ms),
                            500..=599 => tracing::error!("{} ({}ms)", status, latency_ms),
                            _ => tracing::info!("{} ({}ms)", status, latency_ms),
                        }
                    },
                ),
        )
        .layer(CorsLayer::very_permissive())
}
