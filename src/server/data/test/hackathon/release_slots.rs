use super::*;

/// Tests giving back slots after registrations go away.
///
/// Expected: the counter drops by the released count
#[tokio::test]
async fn decrements_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;
    let hackathon = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .current_participants(5)
        .build()
        .await?;

    let repo = HackathonRepository::new(db);
    repo.release_slots(hackathon.id, 3).await?;

    let found = repo.find_by_id(hackathon.id).await?.unwrap();
    assert_eq!(found.current_participants, 2);

    Ok(())
}

/// Tests releasing more slots than are taken.
///
/// Expected: the counter stops at zero
#[tokio::test]
async fn never_below_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;
    let hackathon = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .current_participants(1)
        .build()
        .await?;

    let repo = HackathonRepository::new(db);
    repo.release_slots(hackathon.id, 4).await?;

    let found = repo.find_by_id(hackathon.id).await?.unwrap();
    assert_eq!(found.current_participants, 0);

    Ok(())
}
