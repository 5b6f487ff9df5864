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
        participant::{
            PaginatedParticipantsDto, ParticipantDto, ParticipantHackathonDto,
            RegisterParticipantDto, UpdateParticipantDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::participant::{
            ParticipantHackathon, RegisterParticipantParams, UpdateParticipantParams,
        },
        service::participant::ParticipantService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping participant endpoints in OpenAPI documentation
pub static PARTICIPANT_TAG: &str = "participant";

const PARTICIPANT_NOT_FOUND: &str = "Participant not found";

/// Register a new participant account.
///
/// Both the email and the username must be unused.
///
/// # Returns
/// - `201 Created` - Participant registered
/// - `400 Bad Request` - Missing or invalid fields, duplicate email or username
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/participants/register",
    tag = PARTICIPANT_TAG,
    request_body = RegisterParticipantDto,
    responses(
        (status = 201, description = "Participant registered", body = ParticipantDto),
        (status = 400, description = "Invalid participant data, duplicate email or username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_participant(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterParticipantDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParticipantService::new(&state.db, state.password_hasher);

    let participant = service
        .register(RegisterParticipantParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(participant.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/participants",
    tag = PARTICIPANT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of participants", body = PaginatedParticipantsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participants(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParticipantService::new(&state.db, state.password_hasher);

    let participants = service.get_paginated(params.page, params.entries).await?;

    Ok((StatusCode::OK, Json(participants.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}",
    tag = PARTICIPANT_TAG,
    params(("id" = i32, Path, description = "Participant ID")),
    responses(
        (status = 200, description = "Participant", body = ParticipantDto),
        (status = 404, description = "Participant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParticipantService::new(&state.db, state.password_hasher);

    match service.get_by_id(id).await? {
        Some(participant) => Ok((StatusCode::OK, Json(participant.into_dto()))),
        None => Err(AppError::NotFound(PARTICIPANT_NOT_FOUND.to_string())),
    }
}

/// Update the logged-in participant's profile.
///
/// # Access Control
/// - `Account(Participant, id)` - Participants may only edit themselves
#[utoipa::path(
    put,
    path = "/api/participants/{id}",
    tag = PARTICIPANT_TAG,
    params(("id" = i32, Path, description = "Participant ID")),
    request_body = UpdateParticipantDto,
    responses(
        (status = 200, description = "Participant updated", body = ParticipantDto),
        (status = 400, description = "Invalid participant data, duplicate email or username", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this participant", body = ErrorDto),
        (status = 404, description = "Participant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_participant(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateParticipantDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Account(AccountType::Participant, id)])
        .await?;

    let service = ParticipantService::new(&state.db, state.password_hasher);

    match service
        .update(UpdateParticipantParams::from_dto(id, payload))
        .await?
    {
        Some(participant) => Ok((StatusCode::OK, Json(participant.into_dto()))),
        None => Err(AppError::NotFound(PARTICIPANT_NOT_FOUND.to_string())),
    }
}

/// Delete the logged-in participant, then log out.
///
/// Teams they lead are deleted with them, along with those teams' memberships.
#[utoipa::path(
    delete,
    path = "/api/participants/{id}",
    tag = PARTICIPANT_TAG,
    params(("id" = i32, Path, description = "Participant ID")),
    responses(
        (status = 204, description = "Participant deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this participant", body = ErrorDto),
        (status = 404, description = "Participant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_participant(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Account(AccountType::Participant, id)])
        .await?;

    let service = ParticipantService::new(&state.db, state.password_hasher);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(PARTICIPANT_NOT_FOUND.to_string()));
    }

    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the hackathons a participant joined, with the team and role for each.
#[utoipa::path(
    get,
    path = "/api/participants/{id}/hackathons",
    tag = PARTICIPANT_TAG,
    params(("id" = i32, Path, description = "Participant ID")),
    responses(
        (status = 200, description = "Registrations, most recent first", body = Vec<ParticipantHackathonDto>),
        (status = 404, description = "Participant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participant_hackathons(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParticipantService::new(&state.db, state.password_hasher);

    match service.hackathons(id).await? {
        Some(hackathons) => {
            let hackathons: Vec<ParticipantHackathonDto> = hackathons
                .into_iter()
                .map(ParticipantHackathon::into_dto)
                .collect();
            Ok((StatusCode::OK, Json(hackathons)))
        }
        None => Err(AppError::NotFound(PARTICIPANT_NOT_FOUND.to_string())),
    }
}
