use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{hackathon::HackathonRepository, timeline::TimelineRepository},
    error::AppError,
};

/// Starts the status scheduler.
///
/// Runs every minute and moves hackathons and timeline events along their schedule:
/// - `upcoming` becomes `ongoing` once the start time has passed
/// - `upcoming` or `ongoing` becomes `completed` once the end time has passed
///
/// Cancelled hackathons and events are never touched.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = advance_statuses(&db, Utc::now()).await {
                tracing::error!("Error advancing hackathon statuses: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Hackathon status scheduler started");

    Ok(scheduler)
}

/// Applies one scheduler tick at `now`.
async fn advance_statuses(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<(), AppError> {
    let (started, completed) = HackathonRepository::new(db).advance_statuses(now).await?;
    if started + completed > 0 {
        tracing::info!(
            "Hackathons advanced: {} started, {} completed",
            started,
            completed
        );
    }

    let (started, completed) = TimelineRepository::new(db)
        .advance_event_statuses(now)
        .await?;
    if started + completed > 0 {
        tracing::debug!(
            "Timeline events advanced: {} started, {} completed",
            started,
            completed
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::model::hackathon::HackathonStatus;

    /// Tests one tick over a running hackathon.
    ///
    /// Expected: Ok with the hackathon moved to ongoing
    #[tokio::test]
    async fn test_advance_statuses_starts_running_hackathon() -> Result<(), AppError> {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let organizer = factory::create_organizer(db).await?;
        let now = Utc::now();

        let hackathon = factory::hackathon::HackathonFactory::new(db, organizer.id)
            .dates(now - Duration::minutes(5), now + Duration::days(1))
            .build()
            .await?;

        advance_statuses(db, now).await?;

        let stored = HackathonRepository::new(db)
            .find_by_id(hackathon.id)
            .await?
            .unwrap();
        assert_eq!(stored.status, HackathonStatus::Ongoing);

        Ok(())
    }

    /// Tests that a tick with nothing due changes nothing.
    ///
    /// Expected: Ok with the hackathon still upcoming
    #[tokio::test]
    async fn test_advance_statuses_leaves_future_hackathon() -> Result<(), AppError> {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let organizer = factory::create_organizer(db).await?;
        let hackathon = factory::create_hackathon(db, organizer.id).await?;

        advance_statuses(db, Utc::now()).await?;

        let stored = HackathonRepository::new(db)
            .find_by_id(hackathon.id)
            .await?
            .unwrap();
        assert_eq!(stored.status, HackathonStatus::Upcoming);

        Ok(())
    }
}
