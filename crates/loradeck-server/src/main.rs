mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use loradeck_core::paths;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let state = Arc::new(AppState::from_env());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let model_lookup = format!("{}/{{internal_name}}", paths::MODEL_LOOKUP_PREFIX);
    let api_routes = Router::new()
        .route(paths::MODEL_LIST, get(handlers::models::list))
        .route(&model_lookup, get(handlers::models::get_model))
        .route("/status", get(handlers::models::status))
        .layer(trace_layer)
        .with_state(state.clone());

    // Unknown thumbnails fall through to the default image, so a card with a
    // missing asset degrades without an error surface.
    let default_thumbnail = state.static_dir.join("default_thumbnail.jpg");
    let thumbnails =
        ServeDir::new(&state.thumbnail_dir).not_found_service(ServeFile::new(&default_thumbnail));

    let app = Router::new()
        .merge(api_routes)
        .route("/health", get(handlers::health))
        .nest_service("/thumbnails", thumbnails)
        .route_service(paths::DEFAULT_THUMBNAIL, ServeFile::new(&default_thumbnail))
        .fallback_service(ServeDir::new(&state.static_dir))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    info!("Server listening on {}", addr);
    info!("Serving models from {}", state.registry.model_dir().display());
    info!("Serving static files from {}", state.static_dir.display());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
