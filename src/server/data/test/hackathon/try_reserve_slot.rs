use super::*;

/// Tests reserving slots up to the participant cap.
///
/// Expected: true until the cap is reached, then false with the counter at the cap
#[tokio::test]
async fn stops_at_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;
    let hackathon = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .max_participants(Some(2))
        .build()
        .await?;

    let repo = HackathonRepository::new(db);
    assert!(repo.try_reserve_slot(hackathon.id).await?);
    assert!(repo.try_reserve_slot(hackathon.id).await?);
    assert!(!repo.try_reserve_slot(hackathon.id).await?);

    let found = repo.find_by_id(hackathon.id).await?.unwrap();
    assert_eq!(found.current_participants, 2);

    Ok(())
}

/// Tests that an uncapped hackathon always has room.
///
/// Expected: true and the counter increments
#[tokio::test]
async fn uncapped_always_reserves() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;
    let hackathon = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .max_participants(None)
        .current_participants(500)
        .build()
        .await?;

    let repo = HackathonRepository::new(db);
    assert!(repo.try_reserve_slot(hackathon.id).await?);

    let found = repo.find_by_id(hackathon.id).await?.unwrap();
    assert_eq!(found.current_participants, 501);

    Ok(())
}

/// Tests reserving on an unknown hackathon.
///
/// Expected: false
#[tokio::test]
async fn missing_hackathon_reserves_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HackathonRepository::new(db);
    assert!(!repo.try_reserve_slot(42).await?);

    Ok(())
}
