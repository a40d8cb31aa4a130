use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-pages API",
        version = "1.0.0",
        description = "A minimal web server exposing two static text pages"
    ),
    paths(
        handlers::hello::hello_handler,
        handlers::details::details_handler
    ),
    tags(
        (name = "pages", description = "Static page operations")
    )
)]
pub struct ApiDoc;
