use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        team::{JoinHackathonDto, TeamDto, TeamRole},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team::JoinHackathonParams,
        service::team::TeamService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Register the logged-in participant for a hackathon.
///
/// A `leader` founds a new team and receives its join code. A `member` joins an existing
/// team of the same hackathon with that code. Either way one hackathon slot is taken.
///
/// # Access Control
/// - `Participant` - Any logged-in participant
///
/// # Returns
/// - `201 Created` - New team founded
/// - `200 OK` - Joined an existing team
/// - `400 Bad Request` - Registration closed, hackathon or team full, already registered,
///   or a member without a team code
/// - `404 Not Found` - Hackathon not found, or no team with that code
#[utoipa::path(
    post,
    path = "/api/hackathons/{id}/join",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Hackathon ID")),
    request_body = JoinHackathonDto,
    responses(
        (status = 201, description = "Team founded", body = TeamDto),
        (status = 200, description = "Joined team", body = TeamDto),
        (status = 400, description = "Registration not possible", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Hackathon or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_hackathon(
    State(state): State<AppState>,
    session: Session,
    Path(hackathon_id): Path<i32>,
    ApiJson(payload): ApiJson<JoinHackathonDto>,
) -> Result<impl IntoResponse, AppError> {
    let participant = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Participant])
        .await?;

    let params = JoinHackathonParams::from_dto(hackathon_id, participant.id, payload);
    let status = match params.role {
        TeamRole::Leader => StatusCode::CREATED,
        TeamRole::Member => StatusCode::OK,
    };

    let team = TeamService::new(&state.db).join(params).await?;

    Ok((status, Json(team.into_dto())))
}

/// Get the logged-in participant's team in a hackathon.
#[utoipa::path(
    get,
    path = "/api/hackathons/{id}/team",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "The participant's team", body = TeamDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Not registered for this hackathon", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_team(
    State(state): State<AppState>,
    session: Session,
    Path(hackathon_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let participant = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Participant])
        .await?;

    match TeamService::new(&state.db)
        .my_team(hackathon_id, participant.id)
        .await?
    {
        Some(team) => Ok((StatusCode::OK, Json(team.into_dto()))),
        None => Err(AppError::NotFound(
            "Not registered for this hackathon".to_string(),
        )),
    }
}
