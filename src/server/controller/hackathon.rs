use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        hackathon::{
            CreateHackathonDto, HackathonDto, HackathonStatus, PaginatedHackathonsDto,
            UpdateHackathonDto, UpdateStatusDto,
        },
        team::TeamDto,
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            hackathon::{CreateHackathonParams, UpdateHackathonParams},
            team::TeamWithMembers,
        },
        service::hackathon::HackathonService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping hackathon endpoints in OpenAPI documentation
pub static HACKATHON_TAG: &str = "hackathon";

const HACKATHON_NOT_FOUND: &str = "Hackathon not found";

#[derive(Deserialize)]
pub struct HackathonListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub status: Option<HackathonStatus>,
}

/// Create a hackathon owned by the logged-in organizer.
///
/// New hackathons start as `upcoming`. Prizes must add up to the prize pool and judging
/// criteria weightages to 100.
///
/// # Access Control
/// - `Organizer` - Any logged-in organizer
///
/// # Returns
/// - `201 Created` - Hackathon created
/// - `400 Bad Request` - Missing fields or inconsistent dates, team sizes, prizes or criteria
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an organizer
#[utoipa::path(
    post,
    path = "/api/hackathons",
    tag = HACKATHON_TAG,
    request_body = CreateHackathonDto,
    responses(
        (status = 201, description = "Hackathon created", body = HackathonDto),
        (status = 400, description = "Invalid hackathon data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an organizer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hackathon(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<CreateHackathonDto>,
) -> Result<impl IntoResponse, AppError> {
    let organizer = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Organizer])
        .await?;

    let service = HackathonService::new(&state.db);

    let hackathon = service
        .create(CreateHackathonParams::from_dto(organizer.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(hackathon.into_dto())))
}

/// List hackathons, optionally filtered by status, soonest start first.
#[utoipa::path(
    get,
    path = "/api/hackathons",
    tag = HACKATHON_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("status" = Option<HackathonStatus>, Query, description = "Only hackathons in this state")
    ),
    responses(
        (status = 200, description = "Page of hackathons", body = PaginatedHackathonsDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hackathons(
    State(state): State<AppState>,
    Query(params): Query<HackathonListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = HackathonService::new(&state.db);

    let hackathons = service
        .get_paginated(params.status, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(hackathons.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/hackathons/{id}",
    tag = HACKATHON_TAG,
    params(("id" = i32, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Hackathon", body = HackathonDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hackathon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = HackathonService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(hackathon) => Ok((StatusCode::OK, Json(hackathon.into_dto()))),
        None => Err(AppError::NotFound(HACKATHON_NOT_FOUND.to_string())),
    }
}

/// Update a hackathon's details. Omitted fields keep their stored value.
///
/// # Access Control
/// - `HackathonOwner` - Only the organizer who created it
///
/// # Returns
/// - `200 OK` - Updated hackathon
/// - `400 Bad Request` - Merged details invalid, or capacity below current registrations
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not the owner
/// - `404 Not Found` - Hackathon not found
#[utoipa::path(
    put,
    path = "/api/hackathons/{id}",
    tag = HACKATHON_TAG,
    params(("id" = i32, Path, description = "Hackathon ID")),
    request_body = UpdateHackathonDto,
    responses(
        (status = 200, description = "Hackathon updated", body = HackathonDto),
        (status = 400, description = "Invalid hackathon data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hackathon owner", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hackathon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateHackathonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::HackathonOwner(id)])
        .await?;

    let service = HackathonService::new(&state.db);

    match service
        .update(UpdateHackathonParams::from_dto(id, payload))
        .await?
    {
        Some(hackathon) => Ok((StatusCode::OK, Json(hackathon.into_dto()))),
        None => Err(AppError::NotFound(HACKATHON_NOT_FOUND.to_string())),
    }
}

/// Set a hackathon's status by hand, e.g. to cancel it.
#[utoipa::path(
    patch,
    path = "/api/hackathons/{id}/status",
    tag = HACKATHON_TAG,
    params(("id" = i32, Path, description = "Hackathon ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = HackathonDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hackathon owner", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hackathon_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::HackathonOwner(id)])
        .await?;

    let service = HackathonService::new(&state.db);

    match service.update_status(id, payload.status).await? {
        Some(hackathon) => Ok((StatusCode::OK, Json(hackathon.into_dto()))),
        None => Err(AppError::NotFound(HACKATHON_NOT_FOUND.to_string())),
    }
}

/// Delete a hackathon along with its timeline, teams and registrations.
#[utoipa::path(
    delete,
    path = "/api/hackathons/{id}",
    tag = HACKATHON_TAG,
    params(("id" = i32, Path, description = "Hackathon ID")),
    responses(
        (status = 204, description = "Hackathon deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hackathon owner", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hackathon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::HackathonOwner(id)])
        .await?;

    let service = HackathonService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(HACKATHON_NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List every team registered for a hackathon with its members.
#[utoipa::path(
    get,
    path = "/api/hackathons/{id}/teams",
    tag = HACKATHON_TAG,
    params(("id" = i32, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Teams, oldest first", body = Vec<TeamDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hackathon owner", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hackathon_teams(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::HackathonOwner(id)])
        .await?;

    let service = HackathonService::new(&state.db);

    match service.teams(id).await? {
        Some(teams) => {
            let teams: Vec<TeamDto> = teams.into_iter().map(TeamWithMembers::into_dto).collect();
            Ok((StatusCode::OK, Json(teams)))
        }
        None => Err(AppError::NotFound(HACKATHON_NOT_FOUND.to_string())),
    }
}
