//! After-response logging for book traffic.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// Logs path and status once the response is ready, but only for routes
/// with `books` in the path. Wraps the whole router, so it sees v1, v2,
/// the controller lookup and the router-function route alike.
pub async fn books_log(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;
    if path.contains("books") {
        info!(%path, status = %response.status().as_u16(), "Handled book request");
    }
    response
}
