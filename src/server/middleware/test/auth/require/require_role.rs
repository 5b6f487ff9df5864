use super::*;

/// Tests that an organizer passes the organizer check.
///
/// Expected: Ok(Account)
#[tokio::test]
async fn grants_organizer() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let organizer = factory::create_organizer(db).await?;

    AuthSession::new(session)
        .set_account(organizer.id, AccountType::Organizer)
        .await?;

    let account = AuthGuard::new(db, session)
        .require(&[Permission::Organizer])
        .await?;

    assert_eq!(account.email, organizer.email);

    Ok(())
}

/// Tests that an organizer cannot act as a participant, even when the IDs line up.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_organizer_participant_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let organizer = factory::create_organizer(db).await?;
    factory::create_participant(db).await?;

    AuthSession::new(session)
        .set_account(organizer.id, AccountType::Organizer)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Participant])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, organizer.id);
            assert!(message.contains("participant access required"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}
