use super::*;

/// Tests moving events along by their own times.
///
/// Expected: past event completed, running event ongoing, future event upcoming
#[tokio::test]
async fn advances_by_event_times() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;
    let now = Utc::now();

    let repo = TimelineRepository::new(db);
    repo.create(
        hackathon.id,
        "UTC".to_string(),
        vec![
            event("Past", now - Duration::hours(5), 1),
            event("Running", now - Duration::minutes(30), 2),
            event("Future", now + Duration::hours(5), 1),
        ],
    )
    .await?;

    let (started, completed) = repo.advance_event_statuses(now).await?;
    assert_eq!((started, completed), (1, 1));

    let timeline = repo.find_by_hackathon(hackathon.id).await?.unwrap();
    let statuses: Vec<HackathonStatus> = timeline.events.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![
            HackathonStatus::Completed,
            HackathonStatus::Ongoing,
            HackathonStatus::Upcoming
        ]
    );

    Ok(())
}
