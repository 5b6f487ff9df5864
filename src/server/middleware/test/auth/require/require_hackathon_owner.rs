use super::*;

/// Tests that the creating organizer owns the hackathon.
///
/// Expected: Ok(Account)
#[tokio::test]
async fn grants_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (organizer, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;

    AuthSession::new(session)
        .set_account(organizer.id, AccountType::Organizer)
        .await?;

    let account = AuthGuard::new(db, session)
        .require(&[Permission::HackathonOwner(hackathon.id)])
        .await?;

    assert_eq!(account.id, organizer.id);

    Ok(())
}

/// Tests that another organizer is turned away.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_organizer() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;
    let other = factory::create_organizer(db).await?;

    AuthSession::new(session)
        .set_account(other.id, AccountType::Organizer)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::HackathonOwner(hackathon.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, other.id);
            assert!(message.contains(&hackathon.id.to_string()));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests that a missing hackathon is a 404 rather than a permission failure.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_hackathon_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let organizer = factory::create_organizer(db).await?;

    AuthSession::new(session)
        .set_account(organizer.id, AccountType::Organizer)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::HackathonOwner(12345)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
