use super::*;

/// Tests creating an organizer.
///
/// Expected: Ok with the profile stored and the given hash kept verbatim
#[tokio::test]
async fn creates_organizer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizerRepository::new(db);
    let organizer = repo
        .create(profile("club@example.com"), "hash".to_string())
        .await?;

    assert!(organizer.id > 0);
    assert_eq!(organizer.profile.email, "club@example.com");
    assert_eq!(
        organizer.profile.organization_type,
        OrganizationType::Committee
    );
    assert_eq!(organizer.password_hash, "hash");

    Ok(())
}

/// Tests that the unique email column rejects a second organizer.
///
/// Expected: Err recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizerRepository::new(db);
    repo.create(profile("club@example.com"), "hash".to_string())
        .await?;
    let result = repo
        .create(profile("club@example.com"), "hash".to_string())
        .await;

    let err = result.unwrap_err();
    assert!(crate::server::data::is_unique_violation(&err));

    Ok(())
}
