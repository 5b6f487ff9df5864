use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::*, hackathon::*, health::*, mentor_judge::*, organizer::*, participant::*,
        team::*, timeline::*,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "HackathonHub API",
    description = "Organizers publish hackathons, participants form teams and join them."
))]
struct ApiDoc;

/// Builds every API route and serves the generated OpenAPI document with Swagger UI at
/// `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(me))
        .merge(organizer_routes())
        .merge(participant_routes())
        .merge(mentor_judge_routes())
        .merge(hackathon_routes())
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn organizer_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register_organizer))
        .routes(routes!(get_organizers))
        .routes(routes!(get_organizer, update_organizer, delete_organizer))
        .routes(routes!(get_organizer_hackathons))
}

fn participant_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register_participant))
        .routes(routes!(get_participants))
        .routes(routes!(get_participant, update_participant, delete_participant))
        .routes(routes!(get_participant_hackathons))
}

fn mentor_judge_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register_mentor_judge))
        .routes(routes!(get_mentor_judges))
        .routes(routes!(get_mentor_judge, update_mentor_judge, delete_mentor_judge))
}

/// Hackathons plus the timeline and team routes nested under them.
fn hackathon_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_hackathon, get_hackathons))
        .routes(routes!(get_hackathon, update_hackathon, delete_hackathon))
        .routes(routes!(update_hackathon_status))
        .routes(routes!(get_hackathon_teams))
        .routes(routes!(create_timeline, get_timeline))
        .routes(routes!(add_timeline_event))
        .routes(routes!(update_timeline_event, delete_timeline_event))
        .routes(routes!(update_timeline_event_status))
        .routes(routes!(join_hackathon))
        .routes(routes!(get_my_team))
}
