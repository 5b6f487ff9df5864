use super::*;

/// Tests a page past the end.
///
/// Expected: empty page with the real total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_participant(db).await?;
    factory::create_participant(db).await?;

    let repo = ParticipantRepository::new(db);
    let (participants, total) = repo.get_paginated(3, 10).await?;

    assert!(participants.is_empty());
    assert_eq!(total, 2);

    Ok(())
}
