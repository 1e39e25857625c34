use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::application::{TeamInput, TeamOutput};
use crate::domain::errors::{Error, ErrorKind};

/// Request body for creating a team
///
/// Missing fields decode as empty strings so that domain validation
/// reports them by name. Capitalized keys are accepted as well.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TeamRequest {
    #[serde(alias = "ID", alias = "Id")]
    pub id: String,
    #[serde(alias = "Name", alias = "NAME")]
    pub name: String,
    #[serde(alias = "Group", alias = "GROUP")]
    pub group: String,
}

/// Team representation on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub group: String,
}

impl From<TeamOutput> for TeamResponse {
    fn from(output: TeamOutput) -> Self {
        Self {
            id: output.id,
            name: output.name,
            group: output.group,
        }
    }
}

/// Response for the team listing
#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    pub teams: Vec<TeamResponse>,
}

/// Create a new team
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let req: TeamRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting team body");
        Error::new(ErrorKind::InvalidBody).context("error to decode body")
    })?;

    let output = state
        .team_service
        .create(TeamInput::new(req.id, req.name, req.group))
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(output))))
}

/// Extracts the team id, reporting undecodable segments as problem details
fn team_id(path: Result<Path<String>, PathRejection>) -> Result<String, Error> {
    path.map(|Path(id)| id).map_err(|e| {
        tracing::debug!(error = %e, "rejecting team id");
        Error::invalid_argument("error to decode team id")
    })
}

/// Get a team by ID
///
/// GET /teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<TeamResponse>, ApiError> {
    let id = team_id(path)?;
    let output = state.team_service.get(&id).await?;

    Ok(Json(TeamResponse::from(output)))
}

/// Delete a team
///
/// DELETE /teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = team_id(path)?;
    state.team_service.remove(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List all teams
///
/// GET /teams
pub async fn get_teams(State(state): State<AppState>) -> Result<Json<TeamsResponse>, ApiError> {
    let outputs = state.team_service.get_all().await?;

    Ok(Json(TeamsResponse {
        teams: outputs.into_iter().map(TeamResponse::from).collect(),
    }))
}
