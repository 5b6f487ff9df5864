use super::*;

/// Tests ordering by start date and filtering by status.
///
/// Expected: earliest start first; status filter narrows the total
#[tokio::test]
async fn orders_by_start_and_filters_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;
    let now = Utc::now();

    let later = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .dates(now + Duration::days(20), now + Duration::days(21))
        .build()
        .await?;
    let sooner = factory::hackathon::HackathonFactory::new(db, organizer.id)
        .dates(now + Duration::days(5), now + Duration::days(6))
        .build()
        .await?;
    factory::hackathon::HackathonFactory::new(db, organizer.id)
        .status("cancelled")
        .build()
        .await?;

    let repo = HackathonRepository::new(db);
    let (upcoming, total) = repo
        .get_paginated(Some(HackathonStatus::Upcoming), 0, 10)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(upcoming[0].id, sooner.id);
    assert_eq!(upcoming[1].id, later.id);

    let (_, all) = repo.get_paginated(None, 0, 10).await?;
    assert_eq!(all, 3);

    Ok(())
}
