use super::*;

/// Tests email lookups with and without an excluded owner.
///
/// Expected: taken for others, free for the owner, free for unknown emails
#[tokio::test]
async fn respects_excluded_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::organizer::OrganizerFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = OrganizerRepository::new(db);
    assert!(repo.email_taken("taken@example.com", None).await?);
    assert!(
        !repo
            .email_taken("taken@example.com", Some(organizer.id))
            .await?
    );
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}
