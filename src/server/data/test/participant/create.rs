use super::*;

/// Tests creating a participant with list columns.
///
/// Expected: Ok with skills and interests stored in order
#[tokio::test]
async fn creates_participant_with_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParticipantRepository::new(db);
    let participant = repo
        .create(profile("asha", "asha@example.com"), "hash".to_string())
        .await?;

    let found = repo.find_by_id(participant.id).await?.unwrap();
    assert_eq!(found.profile.username, "asha");
    assert_eq!(found.profile.skills, vec!["rust", "sql"]);
    assert_eq!(found.profile.fields_of_interest, vec!["Web Development"]);
    assert_eq!(found.profile.phone.as_deref(), Some("+91 98765 43210"));

    Ok(())
}

/// Tests lookup by email.
///
/// Expected: Some for a stored email, None otherwise
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let stored = factory::create_participant(db).await?;

    let repo = ParticipantRepository::new(db);
    let found = repo.find_by_email(&stored.email).await?;

    assert_eq!(found.map(|p| p.id), Some(stored.id));
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
