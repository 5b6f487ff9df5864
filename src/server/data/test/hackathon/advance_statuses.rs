use super::*;

/// Tests moving hackathons along their schedule.
///
/// Expected: started one becomes ongoing, ended one completed, cancelled untouched
#[tokio::test]
async fn advances_by_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;
    let now = Utc::now();

    let running = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .dates(now - Duration::hours(1), now + Duration::days(1))
        .build()
        .await?;
    let finished = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .dates(now - Duration::days(3), now - Duration::days(1))
        .status("ongoing")
        .build()
        .await?;
    let cancelled = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .dates(now - Duration::days(3), now - Duration::days(1))
        .status("cancelled")
        .build()
        .await?;
    let future = factory::create_hackathon(db, organizer.id).await?;

    let repo = HackathonRepository::new(db);
    let (started, completed) = repo.advance_statuses(now).await?;

    assert_eq!((started, completed), (1, 1));
    let status = |id: i32| repo.find_by_id(id);
    assert_eq!(
        status(running.id).await?.unwrap().status,
        HackathonStatus::Ongoing
    );
    assert_eq!(
        status(finished.id).await?.unwrap().status,
        HackathonStatus::Completed
    );
    assert_eq!(
        status(cancelled.id).await?.unwrap().status,
        HackathonStatus::Cancelled
    );
    assert_eq!(
        status(future.id).await?.unwrap().status,
        HackathonStatus::Upcoming
    );

    Ok(())
}
