use super::*;

/// Tests username checks with and without an excluded owner.
///
/// Expected: taken for others, free for the owner
#[tokio::test]
async fn respects_excluded_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let participant = factory::participant::ParticipantFactory::new(db)
        .username("asha")
        .build()
        .await?;

    let repo = ParticipantRepository::new(db);
    assert!(repo.username_taken("asha", None).await?);
    assert!(!repo.username_taken("asha", Some(participant.id)).await?);
    assert!(!repo.username_taken("ravi", None).await?);

    Ok(())
}
