/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
#[utoipa::path(
    get,
    path = "/ping",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = String)
    ),
)]
pub async fn ping() -> &'static str {
    "pong"
}
