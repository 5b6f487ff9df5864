use super::*;

/// Tests that credentials come back with the stored hash.
///
/// Expected: Some((account, hash)) for a known email, None otherwise
#[tokio::test]
async fn returns_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let participant = factory::participant::ParticipantFactory::new(db)
        .email("asha@example.com")
        .password_hash("$2b$04$stored")
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let (account, hash) = repo
        .find_credentials("asha@example.com", AccountType::Participant)
        .await?
        .unwrap();

    assert_eq!(account.id, participant.id);
    assert_eq!(hash, "$2b$04$stored");
    assert!(repo
        .find_credentials("nobody@example.com", AccountType::Participant)
        .await?
        .is_none());

    Ok(())
}
