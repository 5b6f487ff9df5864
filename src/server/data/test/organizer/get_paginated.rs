use super::*;

/// Tests paging through organizers in ID order.
///
/// Expected: second page holds the remaining organizer and total counts all rows
#[tokio::test]
async fn pages_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_organizer(db).await?;
    factory::create_organizer(db).await?;
    let third = factory::create_organizer(db).await?;

    let repo = OrganizerRepository::new(db);
    let (page0, total) = repo.get_paginated(0, 2).await?;
    let (page1, _) = repo.get_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(page0.len(), 2);
    assert_eq!(page0[0].id, first.id);
    assert_eq!(page1.len(), 1);
    assert_eq!(page1[0].id, third.id);

    Ok(())
}

/// Tests an empty table.
///
/// Expected: Ok with no organizers and a zero total
#[tokio::test]
async fn returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizerRepository::new(db);
    let (organizers, total) = repo.get_paginated(0, 10).await?;

    assert!(organizers.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
