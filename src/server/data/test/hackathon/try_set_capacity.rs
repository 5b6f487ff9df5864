use super::*;

/// Tests lowering the cap to exactly the registered count.
///
/// Expected: true and the new cap is stored
#[tokio::test]
async fn lowers_to_registered_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;
    let hackathon = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .max_participants(Some(10))
        .current_participants(3)
        .build()
        .await?;

    let repo = HackathonRepository::new(db);
    assert!(repo.try_set_capacity(hackathon.id, Some(3)).await?);

    let found = repo.find_by_id(hackathon.id).await?.unwrap();
    assert_eq!(found.details.max_participants, Some(3));

    Ok(())
}

/// Tests lowering the cap below the registered count.
///
/// Expected: false and the old cap is kept
#[tokio::test]
async fn refuses_below_registered_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;
    let hackathon = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .max_participants(Some(10))
        .current_participants(3)
        .build()
        .await?;

    let repo = HackathonRepository::new(db);
    assert!(!repo.try_set_capacity(hackathon.id, Some(2)).await?);

    let found = repo.find_by_id(hackathon.id).await?.unwrap();
    assert_eq!(found.details.max_participants, Some(10));

    Ok(())
}

/// Tests removing the cap altogether.
///
/// Expected: true whatever the registered count
#[tokio::test]
async fn uncaps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;
    let hackathon = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .max_participants(Some(10))
        .current_participants(10)
        .build()
        .await?;

    let repo = HackathonRepository::new(db);
    assert!(repo.try_set_capacity(hackathon.id, None).await?);

    let found = repo.find_by_id(hackathon.id).await?.unwrap();
    assert_eq!(found.details.max_participants, None);

    Ok(())
}
