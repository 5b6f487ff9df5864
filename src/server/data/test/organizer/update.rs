use super::*;

/// Tests updating a profile without touching the password.
///
/// Expected: profile replaced, hash unchanged
#[tokio::test]
async fn keeps_hash_when_none_given() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::organizer::OrganizerFactory::new(db)
        .password_hash("original")
        .build()
        .await?;

    let repo = OrganizerRepository::new(db);
    let updated = repo
        .update(organizer.id, profile("renamed@example.com"), None)
        .await?;

    assert_eq!(updated.profile.email, "renamed@example.com");
    assert_eq!(updated.profile.name, "Hack Club");
    assert_eq!(updated.password_hash, "original");

    Ok(())
}

/// Tests updating with a new password hash.
///
/// Expected: hash replaced
#[tokio::test]
async fn replaces_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;

    let repo = OrganizerRepository::new(db);
    let updated = repo
        .update(
            organizer.id,
            profile(&organizer.email),
            Some("rehashed".to_string()),
        )
        .await?;

    assert_eq!(updated.password_hash, "rehashed");

    Ok(())
}
