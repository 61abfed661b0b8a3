use crate::router::ROUTES;
use crate::schemas::{EndpointInfo, SitemapResponse};
use axum::response::Json;
use tracing::{debug, instrument};

/// List every endpoint of the API
#[utoipa::path(
    get,
    path = "/",
    tag = "sitemap",
    responses(
        (status = 200, description = "Endpoints listed", body = SitemapResponse)
    )
)]
#[instrument]
pub async fn sitemap() -> Json<SitemapResponse> {
    let endpoints: Vec<EndpointInfo> = ROUTES
        .iter()
        .map(|(method, path)| EndpointInfo {
            method: method.to_string(),
            path: path.to_string(),
        })
        .collect();
    debug!("Sitemap lists {} endpoints", endpoints.len());
    Json(SitemapResponse { endpoints })
}
