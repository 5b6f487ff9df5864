use super::*;

/// Tests that events come back sorted by start time regardless of insertion order.
///
/// Expected: Ok with events ordered and every event upcoming
#[tokio::test]
async fn returns_events_in_schedule_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;
    let start = Utc::now() + Duration::days(7);

    let repo = TimelineRepository::new(db);
    repo.create(
        hackathon.id,
        "Asia/Kolkata".to_string(),
        vec![
            event("Closing", start + Duration::hours(10), 1),
            event("Opening", start, 1),
        ],
    )
    .await?;

    let timeline = repo.find_by_hackathon(hackathon.id).await?.unwrap();
    let titles: Vec<&str> = timeline
        .events
        .iter()
        .map(|e| e.details.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Opening", "Closing"]);
    assert_eq!(timeline.timezone, "Asia/Kolkata");
    assert!(timeline
        .events
        .iter()
        .all(|e| e.status == HackathonStatus::Upcoming));
    assert!(repo.exists_for_hackathon(hackathon.id).await?);

    Ok(())
}

/// Tests a hackathon without a timeline.
///
/// Expected: None and not existing
#[tokio::test]
async fn missing_timeline_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;

    let repo = TimelineRepository::new(db);
    assert!(repo.find_by_hackathon(hackathon.id).await?.is_none());
    assert!(!repo.exists_for_hackathon(hackathon.id).await?);

    Ok(())
}
