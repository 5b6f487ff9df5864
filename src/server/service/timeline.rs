use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::hackathon::HackathonStatus,
    server::{
        data::{hackathon::HackathonRepository, timeline::TimelineRepository},
        error::AppError,
        model::timeline::{
            CreateTimelineParams, Timeline, TimelineEventDetails, UpdateTimelineEventParams,
        },
        validation::{timeline::check_schedule, Validate, Violations},
    },
};

const HACKATHON_NOT_FOUND: &str = "Hackathon not found";
const TIMELINE_NOT_FOUND: &str = "Timeline not found";
const EVENT_NOT_FOUND: &str = "Event not found";
const TIMELINE_EXISTS: &str = "Timeline already exists for this hackathon";

/// Timeline management. Every event mutation returns the whole timeline so clients can
/// redraw the schedule without a second request.
pub struct TimelineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimelineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a hackathon's timeline with its initial events.
    ///
    /// # Returns
    /// - `Ok(Timeline)` - Stored timeline
    /// - `Err(AppError::NotFound)` - No hackathon with that ID
    /// - `Err(AppError::BadRequest)` - The hackathon already has a timeline
    /// - `Err(AppError::ValidationErr)` - Invalid or overlapping events
    pub async fn create(&self, params: CreateTimelineParams) -> Result<Timeline, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;
        if HackathonRepository::new(&txn)
            .find_by_id(params.hackathon_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(HACKATHON_NOT_FOUND.to_string()));
        }

        let repo = TimelineRepository::new(&txn);
        if repo.exists_for_hackathon(params.hackathon_id).await? {
            return Err(AppError::BadRequest(TIMELINE_EXISTS.to_string()));
        }

        let timeline = repo
            .create(params.hackathon_id, params.timezone, params.events)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Created timeline {} for hackathon {} with {} events",
            timeline.id,
            timeline.hackathon_id,
            timeline.events.len()
        );

        Ok(timeline)
    }

    pub async fn get(&self, hackathon_id: i32) -> Result<Option<Timeline>, AppError> {
        Ok(TimelineRepository::new(self.db)
            .find_by_hackathon(hackathon_id)
            .await?)
    }

    /// Adds one event, checked for overlap against the existing schedule.
    pub async fn add_event(
        &self,
        hackathon_id: i32,
        details: TimelineEventDetails,
    ) -> Result<Timeline, AppError> {
        let txn = self.db.begin().await?;
        let timeline = find_timeline(&txn, hackathon_id).await?;

        let mut schedule = timeline.schedule();
        schedule.push(details.clone());
        check_event(&details, &schedule)?;

        TimelineRepository::new(&txn)
            .add_event(timeline.id, details)
            .await?;

        let timeline = find_timeline(&txn, hackathon_id).await?;
        txn.commit().await?;

        Ok(timeline)
    }

    /// Merges the changes over a stored event and re-checks the whole schedule.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No timeline, or the event belongs to another timeline
    pub async fn update_event(
        &self,
        hackathon_id: i32,
        params: UpdateTimelineEventParams,
    ) -> Result<Timeline, AppError> {
        let txn = self.db.begin().await?;
        let timeline = find_timeline(&txn, hackathon_id).await?;

        let Some(existing) = timeline.events.iter().find(|e| e.id == params.event_id) else {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        };

        let details = params.apply_to(existing.details.clone());
        let schedule: Vec<TimelineEventDetails> = timeline
            .events
            .iter()
            .map(|e| {
                if e.id == params.event_id {
                    details.clone()
                } else {
                    e.details.clone()
                }
            })
            .collect();
        check_event(&details, &schedule)?;

        TimelineRepository::new(&txn)
            .update_event(timeline.id, params.event_id, details)
            .await?;

        let timeline = find_timeline(&txn, hackathon_id).await?;
        txn.commit().await?;

        Ok(timeline)
    }

    pub async fn update_event_status(
        &self,
        hackathon_id: i32,
        event_id: i32,
        status: HackathonStatus,
    ) -> Result<Timeline, AppError> {
        let txn = self.db.begin().await?;
        let timeline = find_timeline(&txn, hackathon_id).await?;

        if !TimelineRepository::new(&txn)
            .update_event_status(timeline.id, event_id, status)
            .await?
        {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        }

        let timeline = find_timeline(&txn, hackathon_id).await?;
        txn.commit().await?;

        Ok(timeline)
    }

    /// Deletes an event and returns what remains of the timeline.
    pub async fn delete_event(&self, hackathon_id: i32, event_id: i32) -> Result<Timeline, AppError> {
        let txn = self.db.begin().await?;
        let timeline = find_timeline(&txn, hackathon_id).await?;

        if !TimelineRepository::new(&txn)
            .delete_event(timeline.id, event_id)
            .await?
        {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        }

        let timeline = find_timeline(&txn, hackathon_id).await?;
        txn.commit().await?;

        tracing::info!("Deleted event {} from timeline {}", event_id, timeline.id);

        Ok(timeline)
    }
}

async fn find_timeline(txn: &DatabaseTransaction, hackathon_id: i32) -> Result<Timeline, AppError> {
    TimelineRepository::new(txn)
        .find_by_hackathon(hackathon_id)
        .await?
        .ok_or_else(|| AppError::NotFound(TIMELINE_NOT_FOUND.to_string()))
}

/// Validates one event and the schedule it will be part of.
fn check_event(details: &TimelineEventDetails, schedule: &[TimelineEventDetails]) -> Result<(), AppError> {
    let mut violations = Violations::default();
    details.check(&mut violations);
    check_schedule(schedule, &mut violations);

    Ok(violations.into_result()?)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::{
        model::timeline::{EventLocationType, TimelineEventType},
        server::{error::validation::ValidationError, model::timeline::DEFAULT_TIMEZONE},
    };

    fn event(title: &str, start: DateTime<Utc>, hours: i64) -> TimelineEventDetails {
        TimelineEventDetails {
            title: title.to_string(),
            description: format!("{} for all teams", title),
            start_time: start,
            end_time: start + Duration::hours(hours),
            event_type: TimelineEventType::Opening,
            location_type: EventLocationType::Offline,
            venue: Some("Main hall".to_string()),
            online_platform: None,
            speakers: Vec::new(),
            resources: Vec::new(),
            is_mandatory: true,
        }
    }

    /// Creates a hackathon with a two-event timeline: 0h-1h and 2h-4h from `start`.
    async fn setup(db: &DatabaseConnection, start: DateTime<Utc>) -> Timeline {
        let (_, hackathon) = factory::helpers::create_hackathon_with_organizer(db)
            .await
            .unwrap();

        TimelineService::new(db)
            .create(CreateTimelineParams {
                hackathon_id: hackathon.id,
                timezone: DEFAULT_TIMEZONE.to_string(),
                events: vec![event("Opening", start, 1), event("Hacking", start + Duration::hours(2), 2)],
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_timeline() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let start = Utc::now() + Duration::days(7);

        let timeline = setup(db, start).await;

        assert_eq!(timeline.events.len(), 2);
        assert_eq!(timeline.events[0].details.title, "Opening");
    }

    #[tokio::test]
    async fn test_create_twice_is_rejected() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let timeline = setup(db, Utc::now() + Duration::days(7)).await;

        let result = TimelineService::new(db)
            .create(CreateTimelineParams {
                hackathon_id: timeline.hackathon_id,
                timezone: DEFAULT_TIMEZONE.to_string(),
                events: Vec::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == TIMELINE_EXISTS));
    }

    #[tokio::test]
    async fn test_create_for_missing_hackathon() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = TimelineService::new(db)
            .create(CreateTimelineParams {
                hackathon_id: 99,
                timezone: DEFAULT_TIMEZONE.to_string(),
                events: Vec::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == HACKATHON_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_add_event_sorts_into_schedule() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let start = Utc::now() + Duration::days(7);
        let timeline = setup(db, start).await;

        let timeline = TimelineService::new(db)
            .add_event(
                timeline.hackathon_id,
                event("Check-in", start - Duration::hours(2), 1),
            )
            .await
            .unwrap();

        let titles: Vec<&str> = timeline
            .events
            .iter()
            .map(|e| e.details.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Check-in", "Opening", "Hacking"]);
    }

    #[tokio::test]
    async fn test_add_event_rejects_overlap() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let start = Utc::now() + Duration::days(7);
        let timeline = setup(db, start).await;

        let result = TimelineService::new(db)
            .add_event(
                timeline.hackathon_id,
                event("Lunch", start + Duration::minutes(30), 1),
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::Invalid(msg)))
                if msg == "Events \"Opening\" and \"Lunch\" overlap"
        ));
    }

    #[tokio::test]
    async fn test_add_event_without_timeline() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = TimelineService::new(db)
            .add_event(1, event("Opening", Utc::now(), 1))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == TIMELINE_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_event_rechecks_schedule() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let start = Utc::now() + Duration::days(7);
        let timeline = setup(db, start).await;
        let opening = timeline.events[0].id;
        let service = TimelineService::new(db);

        let stretched = service
            .update_event(
                timeline.hackathon_id,
                UpdateTimelineEventParams {
                    event_id: opening,
                    end_time: Some(start + Duration::hours(3)),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(stretched, Err(AppError::ValidationErr(_))));

        let renamed = service
            .update_event(
                timeline.hackathon_id,
                UpdateTimelineEventParams {
                    event_id: opening,
                    title: Some("Kickoff".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.events[0].details.title, "Kickoff");
        assert_eq!(renamed.events[0].details.end_time, start + Duration::hours(1));
    }

    #[tokio::test]
    async fn test_update_event_status() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let timeline = setup(db, Utc::now() + Duration::days(7)).await;
        let service = TimelineService::new(db);

        let updated = service
            .update_event_status(
                timeline.hackathon_id,
                timeline.events[1].id,
                HackathonStatus::Cancelled,
            )
            .await
            .unwrap();
        assert_eq!(updated.events[1].status, HackathonStatus::Cancelled);

        let missing = service
            .update_event_status(timeline.hackathon_id, 999, HackathonStatus::Ongoing)
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(msg)) if msg == EVENT_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_delete_event_returns_remaining() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let timeline = setup(db, Utc::now() + Duration::days(7)).await;
        let service = TimelineService::new(db);

        let remaining = service
            .delete_event(timeline.hackathon_id, timeline.events[0].id)
            .await
            .unwrap();
        assert_eq!(remaining.events.len(), 1);
        assert_eq!(remaining.events[0].details.title, "Hacking");

        let again = service
            .delete_event(timeline.hackathon_id, timeline.events[0].id)
            .await;
        assert!(matches!(again, Err(AppError::NotFound(msg)) if msg == EVENT_NOT_FOUND));
    }
}
