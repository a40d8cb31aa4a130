use crate::routes;

/// GET /hello/details handler - Static details page
#[utoipa::path(
    get,
    path = routes::HELLO_DETAILS,
    responses(
        (status = 200, description = "Details page body", body = String, content_type = "text/plain")
    ),
    tag = "pages"
)]
pub async fn details_handler() -> &'static str {
    "I'm a details page"
}
