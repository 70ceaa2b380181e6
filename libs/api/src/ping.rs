use tracing::debug;

/// Health check
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn get_ping() -> &'static str {
    debug!(task = "ping");
    "pong"
}
