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
        auth::AccountType,
        mentor_judge::{
            MentorJudgeDto, MentorJudgeRole, PaginatedMentorJudgesDto, RegisterMentorJudgeDto,
            UpdateMentorJudgeDto,
        },
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::mentor_judge::{RegisterMentorJudgeParams, UpdateMentorJudgeParams},
        service::mentor_judge::MentorJudgeService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping mentor/judge endpoints in OpenAPI documentation
pub static MENTOR_JUDGE_TAG: &str = "mentor_judge";

const MENTOR_JUDGE_NOT_FOUND: &str = "Mentor/Judge not found";

#[derive(Deserialize)]
pub struct MentorJudgeListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub role: Option<MentorJudgeRole>,
}

/// Register a mentor/judge profile with its previous events.
///
/// # Returns
/// - `201 Created` - Profile registered
/// - `400 Bad Request` - Missing fields, invalid phone, no role selected, or duplicate email
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/mentor-judges/register",
    tag = MENTOR_JUDGE_TAG,
    request_body = RegisterMentorJudgeDto,
    responses(
        (status = 201, description = "Mentor/judge registered", body = MentorJudgeDto),
        (status = 400, description = "Invalid profile data or duplicate email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_mentor_judge(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterMentorJudgeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MentorJudgeService::new(&state.db, state.password_hasher);

    let mentor_judge = service
        .register(RegisterMentorJudgeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(mentor_judge.into_dto())))
}

/// List mentor/judge profiles, optionally only those offering one role.
#[utoipa::path(
    get,
    path = "/api/mentor-judges",
    tag = MENTOR_JUDGE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("role" = Option<MentorJudgeRole>, Query, description = "Only mentors or only judges")
    ),
    responses(
        (status = 200, description = "Page of mentor/judge profiles", body = PaginatedMentorJudgesDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentor_judges(
    State(state): State<AppState>,
    Query(params): Query<MentorJudgeListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = MentorJudgeService::new(&state.db, state.password_hasher);

    let mentor_judges = service
        .get_paginated(params.role, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(mentor_judges.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/mentor-judges/{id}",
    tag = MENTOR_JUDGE_TAG,
    params(("id" = i32, Path, description = "Mentor/judge ID")),
    responses(
        (status = 200, description = "Mentor/judge profile", body = MentorJudgeDto),
        (status = 404, description = "Mentor/judge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentor_judge(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MentorJudgeService::new(&state.db, state.password_hasher);

    match service.get_by_id(id).await? {
        Some(mentor_judge) => Ok((StatusCode::OK, Json(mentor_judge.into_dto()))),
        None => Err(AppError::NotFound(MENTOR_JUDGE_NOT_FOUND.to_string())),
    }
}

/// Update the logged-in mentor/judge. A provided `previous_events` list replaces the old one.
#[utoipa::path(
    put,
    path = "/api/mentor-judges/{id}",
    tag = MENTOR_JUDGE_TAG,
    params(("id" = i32, Path, description = "Mentor/judge ID")),
    request_body = UpdateMentorJudgeDto,
    responses(
        (status = 200, description = "Mentor/judge updated", body = MentorJudgeDto),
        (status = 400, description = "Invalid profile data or duplicate email", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this mentor/judge", body = ErrorDto),
        (status = 404, description = "Mentor/judge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mentor_judge(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateMentorJudgeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Account(AccountType::MentorJudge, id)])
        .await?;

    let service = MentorJudgeService::new(&state.db, state.password_hasher);

    match service
        .update(UpdateMentorJudgeParams::from_dto(id, payload))
        .await?
    {
        Some(mentor_judge) => Ok((StatusCode::OK, Json(mentor_judge.into_dto()))),
        None => Err(AppError::NotFound(MENTOR_JUDGE_NOT_FOUND.to_string())),
    }
}

#[utoipa::path(
    delete,
    path = "/api/mentor-judges/{id}",
    tag = MENTOR_JUDGE_TAG,
    params(("id" = i32, Path, description = "Mentor/judge ID")),
    responses(
        (status = 204, description = "Mentor/judge deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not this mentor/judge", body = ErrorDto),
        (status = 404, description = "Mentor/judge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mentor_judge(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Account(AccountType::MentorJudge, id)])
        .await?;

    let service = MentorJudgeService::new(&state.db, state.password_hasher);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(MENTOR_JUDGE_NOT_FOUND.to_string()));
    }

    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}
