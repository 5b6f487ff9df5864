use super::*;

/// Tests that an event can only be deleted through its own timeline.
///
/// Expected: false for a foreign timeline, true for the owner
#[tokio::test]
async fn scoped_to_timeline() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, first) = factory::helpers::create_hackathon_with_organizer(db).await?;
    let (_, second) = factory::helpers::create_hackathon_with_organizer(db).await?;
    let start = Utc::now() + Duration::days(7);

    let repo = TimelineRepository::new(db);
    let own = repo
        .create(first.id, "UTC".to_string(), vec![event("Opening", start, 1)])
        .await?;
    let other = repo
        .create(second.id, "UTC".to_string(), Vec::new())
        .await?;
    let event_id = own.events[0].id;

    assert!(!repo.delete_event(other.id, event_id).await?);
    assert!(repo.delete_event(own.id, event_id).await?);

    let reloaded = repo.find_by_hackathon(first.id).await?.unwrap();
    assert!(reloaded.events.is_empty());

    Ok(())
}
