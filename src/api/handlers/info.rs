use axum::Json;
use serde::Serialize;

pub const INFO_TITLE: &str = "FIFA World Cup Table";
pub const INFO_DESCRIPTION: &str =
    "The responsibility of this project is to store the teams, games and results of the FIFA World Cup";

/// Static service description
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub title: String,
    pub description: String,
}

/// Describe the service
///
/// GET /
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        title: INFO_TITLE.to_string(),
        description: INFO_DESCRIPTION.to_string(),
    })
}
