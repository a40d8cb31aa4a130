use crate::routes;

/// GET /hello handler - Static hello page
///
/// Returns a fixed text body. Takes no input, reads no state, never fails.
#[utoipa::path(
    get,
    path = routes::HELLO,
    responses(
        (status = 200, description = "Hello page body", body = String, content_type = "text/plain")
    ),
    tag = "pages"
)]
pub async fn hello_handler() -> &'static str {
    "I'm a hello page"
}
