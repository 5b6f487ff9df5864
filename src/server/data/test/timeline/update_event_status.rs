use super::*;

/// Tests setting one event's status.
///
/// Expected: the event is cancelled and the other stays upcoming
#[tokio::test]
async fn updates_single_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;
    let start = Utc::now() + Duration::days(7);

    let repo = TimelineRepository::new(db);
    let timeline = repo
        .create(
            hackathon.id,
            "UTC".to_string(),
            vec![
                event("Opening", start, 1),
                event("Workshop", start + Duration::hours(2), 1),
            ],
        )
        .await?;
    let opening = timeline.events[0].id;

    assert!(
        repo.update_event_status(timeline.id, opening, HackathonStatus::Cancelled)
            .await?
    );
    assert!(
        !repo
            .update_event_status(timeline.id, 999, HackathonStatus::Cancelled)
            .await?
    );

    let reloaded = repo.find_by_hackathon(hackathon.id).await?.unwrap();
    assert_eq!(reloaded.events[0].status, HackathonStatus::Cancelled);
    assert_eq!(reloaded.events[1].status, HackathonStatus::Upcoming);

    Ok(())
}
