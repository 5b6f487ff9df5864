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
        hackathon::UpdateStatusDto,
        timeline::{CreateTimelineDto, TimelineDto, TimelineEventInputDto, UpdateTimelineEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::timeline::{CreateTimelineParams, TimelineEventDetails, UpdateTimelineEventParams},
        service::timeline::TimelineService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping timeline endpoints in OpenAPI documentation
pub static TIMELINE_TAG: &str = "timeline";

const TIMELINE_NOT_FOUND: &str = "Timeline not found";

/// Create the timeline of a hackathon.
///
/// Events must lie in the future, end after they start and not overlap each other.
/// A hackathon has at most one timeline.
///
/// # Access Control
/// - `HackathonOwner` - Only the organizer who created the hackathon
///
/// # Returns
/// - `201 Created` - Timeline with its events sorted by start time
/// - `400 Bad Request` - Invalid or overlapping events, or a timeline already exists
/// - `404 Not Found` - Hackathon not found
#[utoipa::path(
    post,
    path = "/api/hackathons/{id}/timeline",
    tag = TIMELINE_TAG,
    params(("id" = i32, Path, description = "Hackathon ID")),
    request_body = CreateTimelineDto,
    responses(
        (status = 201, description = "Timeline created", body = TimelineDto),
        (status = 400, description = "Invalid events or timeline already exists", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hackathon owner", body = ErrorDto),
        (status = 404, description = "Hackathon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_timeline(
    State(state): State<AppState>,
    session: Session,
    Path(hackathon_id): Path<i32>,
    ApiJson(payload): ApiJson<CreateTimelineDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::HackathonOwner(hackathon_id)])
        .await?;

    let service = TimelineService::new(&state.db);

    let timeline = service
        .create(CreateTimelineParams::from_dto(hackathon_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(timeline.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/hackathons/{id}/timeline",
    tag = TIMELINE_TAG,
    params(("id" = i32, Path, description = "Hackathon ID")),
    responses(
        (status = 200, description = "Timeline with events sorted by start time", body = TimelineDto),
        (status = 404, description = "Timeline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timeline(
    State(state): State<AppState>,
    Path(hackathon_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TimelineService::new(&state.db);

    match service.get(hackathon_id).await? {
        Some(timeline) => Ok((StatusCode::OK, Json(timeline.into_dto()))),
        None => Err(AppError::NotFound(TIMELINE_NOT_FOUND.to_string())),
    }
}

/// Add one event to a hackathon's timeline.
#[utoipa::path(
    post,
    path = "/api/hackathons/{id}/timeline/events",
    tag = TIMELINE_TAG,
    params(("id" = i32, Path, description = "Hackathon ID")),
    request_body = TimelineEventInputDto,
    responses(
        (status = 201, description = "Event added, full timeline returned", body = TimelineDto),
        (status = 400, description = "Invalid or overlapping event", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hackathon owner", body = ErrorDto),
        (status = 404, description = "Hackathon or timeline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_timeline_event(
    State(state): State<AppState>,
    session: Session,
    Path(hackathon_id): Path<i32>,
    ApiJson(payload): ApiJson<TimelineEventInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::HackathonOwner(hackathon_id)])
        .await?;

    let service = TimelineService::new(&state.db);

    let timeline = service
        .add_event(hackathon_id, TimelineEventDetails::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(timeline.into_dto())))
}

/// Update an event. The merged event is checked against the rest of the schedule again.
#[utoipa::path(
    put,
    path = "/api/hackathons/{id}/timeline/events/{event_id}",
    tag = TIMELINE_TAG,
    params(
        ("id" = i32, Path, description = "Hackathon ID"),
        ("event_id" = i32, Path, description = "Timeline event ID")
    ),
    request_body = UpdateTimelineEventDto,
    responses(
        (status = 200, description = "Event updated, full timeline returned", body = TimelineDto),
        (status = 400, description = "Invalid or overlapping event", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hackathon owner", body = ErrorDto),
        (status = 404, description = "Hackathon, timeline or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_timeline_event(
    State(state): State<AppState>,
    session: Session,
    Path((hackathon_id, event_id)): Path<(i32, i32)>,
    ApiJson(payload): ApiJson<UpdateTimelineEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::HackathonOwner(hackathon_id)])
        .await?;

    let service = TimelineService::new(&state.db);

    let timeline = service
        .update_event(
            hackathon_id,
            UpdateTimelineEventParams::from_dto(event_id, payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(timeline.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/hackathons/{id}/timeline/events/{event_id}/status",
    tag = TIMELINE_TAG,
    params(
        ("id" = i32, Path, description = "Hackathon ID"),
        ("event_id" = i32, Path, description = "Timeline event ID")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Event status updated, full timeline returned", body = TimelineDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hackathon owner", body = ErrorDto),
        (status = 404, description = "Hackathon, timeline or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_timeline_event_status(
    State(state): State<AppState>,
    session: Session,
    Path((hackathon_id, event_id)): Path<(i32, i32)>,
    ApiJson(payload): ApiJson<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::HackathonOwner(hackathon_id)])
        .await?;

    let service = TimelineService::new(&state.db);

    let timeline = service
        .update_event_status(hackathon_id, event_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(timeline.into_dto())))
}

/// Remove an event and return the remaining timeline.
#[utoipa::path(
    delete,
    path = "/api/hackathons/{id}/timeline/events/{event_id}",
    tag = TIMELINE_TAG,
    params(
        ("id" = i32, Path, description = "Hackathon ID"),
        ("event_id" = i32, Path, description = "Timeline event ID")
    ),
    responses(
        (status = 200, description = "Event deleted, remaining timeline returned", body = TimelineDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the hackathon owner", body = ErrorDto),
        (status = 404, description = "Hackathon, timeline or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_timeline_event(
    State(state): State<AppState>,
    session: Session,
    Path((hackathon_id, event_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::HackathonOwner(hackathon_id)])
        .await?;

    let service = TimelineService::new(&state.db);

    let timeline = service.delete_event(hackathon_id, event_id).await?;

    Ok((StatusCode::OK, Json(timeline.into_dto())))
}
