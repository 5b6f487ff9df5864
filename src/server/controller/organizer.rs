use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::AccountType,
        hackathon::HackathonDto,
        organizer::{
            OrganizerDto, PaginatedOrganizersDto, RegisterOrganizerDto, UpdateOrganizerDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::{
            hackathon::Hackathon,
            organizer::{RegisterOrganizerParams, UpdateOrganizerParams},
        },
        service::organizer::OrganizerService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping organizer endpoints in OpenAPI documentation
pub static ORGANIZER_TAG: &str = "organizer";

const ORGANIZER_NOT_FOUND: &str = "Organizer not found";

/// Register a new organizer account.
///
/// # Returns
/// - `201 Created` - Organizer registered
/// - `400 Bad Request` - Missing or invalid fields, or the email is already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/organizers/register",
    tag = ORGANIZER_TAG,
    request_body = RegisterOrganizerDto,
    responses(
        (status = 201, description = "Organizer registered", body = OrganizerDto),
        (status = 400, description = "Invalid organizer data or duplicate email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_organizer(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterOrganizerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrganizerService::new(&state.db, state.password_hasher);

    let organizer = service
        .register(RegisterOrganizerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(organizer.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/organizers",
    tag = ORGANIZER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of organizers", body = PaginatedOrganizersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organizers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrganizerService::new(&state.db, state.password_hasher);

    let organizers = service.get_paginated(params.page, params.entries).await?;

    Ok((StatusCode::OK, Json(organizers.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/organizers/{id}",
    tag = ORGANIZER_TAG,
    params(("id" = i32, Path, description = "Organizer ID")),
    responses(
        (status = 200, description = "Organizer", body = OrganizerDto),
        (status = 404, description = "Organizer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organizer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrganizerService::new(&state.db, state.password_hasher);

    match service.get_by_id(id).await? {
        Some(organizer) => Ok((StatusCode::OK, Json(organizer.into_dto()))),
        None => Err(AppError::NotFound(ORGANIZER_NOT_FOUND.to_string())),
    }
}

/// Update the logged-in organizer's profile.
///
/// Fields left out of the body keep their stored values; the merged profile is validated
/// as a whole. A new password is hashed before it is stored.
///
/// # Access Control
/// - `Account(Organizer, id)` - Organizers may only edit themselves
///
/// # Returns
/// - `200 OK` - Updated organizer
/// - `400 Bad Request` - Merged profile invalid or email taken
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Another account
/// - `404 Not Found` - Organizer not found
#[utoipa::path(
    put,
    path = "/api/organizers/{id}",
    tag = ORGANIZER_TAG,
    params(("id" = i32, Path, description = "Organizer ID")),
    request_body = UpdateOrganizerDto,
    responses(
        (status = 200, description = "Organizer updated", body = OrganizerDto),
        (status = 400, description = "Invalid organizer data or duplicate email", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this organizer", body = ErrorDto),
        (status = 404, description = "Organizer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_organizer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateOrganizerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Account(AccountType::Organizer, id)])
        .await?;

    let service = OrganizerService::new(&state.db, state.password_hasher);

    match service
        .update(UpdateOrganizerParams::from_dto(id, payload))
        .await?
    {
        Some(organizer) => Ok((StatusCode::OK, Json(organizer.into_dto()))),
        None => Err(AppError::NotFound(ORGANIZER_NOT_FOUND.to_string())),
    }
}

/// Delete the logged-in organizer together with their hackathons, then log out.
#[utoipa::path(
    delete,
    path = "/api/organizers/{id}",
    tag = ORGANIZER_TAG,
    params(("id" = i32, Path, description = "Organizer ID")),
    responses(
        (status = 204, description = "Organizer deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this organizer", body = ErrorDto),
        (status = 404, description = "Organizer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_organizer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Account(AccountType::Organizer, id)])
        .await?;

    let service = OrganizerService::new(&state.db, state.password_hasher);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(ORGANIZER_NOT_FOUND.to_string()));
    }

    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/organizers/{id}/hackathons",
    tag = ORGANIZER_TAG,
    params(("id" = i32, Path, description = "Organizer ID")),
    responses(
        (status = 200, description = "Hackathons created by the organizer, newest first", body = Vec<HackathonDto>),
        (status = 404, description = "Organizer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organizer_hackathons(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrganizerService::new(&state.db, state.password_hasher);

    match service.hackathons(id).await? {
        Some(hackathons) => {
            let hackathons: Vec<HackathonDto> =
                hackathons.into_iter().map(Hackathon::into_dto).collect();
            Ok((StatusCode::OK, Json(hackathons)))
        }
        None => Err(AppError::NotFound(ORGANIZER_NOT_FOUND.to_string())),
    }
}
