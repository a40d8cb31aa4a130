mod api_doc;
mod config;
mod handlers;
mod routes;

use anyhow::Context;
use axum::{routing::get, Router};
use config::Config;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("hello-pages starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app()).await.context("Server error")?;

    Ok(())
}

/// Build the application router.
///
/// Kept as a plain function so tests can drive the router directly without
/// running an HTTP server.
fn app() -> Router {
    Router::new()
        .route(routes::HELLO, get(handlers::hello_handler))
        .route(routes::HELLO_DETAILS, get(handlers::details_handler))
        .merge(
            SwaggerUi::new(routes::SWAGGER_UI)
                .url(routes::OPENAPI_JSON, api_doc::ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
}
