use super::*;

mod require_account;
mod require_hackathon_owner;
mod require_role;

/// Tests that an empty permission list only requires a live session.
///
/// Expected: Ok(Account) for any account type
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let mentor = factory::create_mentor_judge(db).await?;

    AuthSession::new(session)
        .set_account(mentor.id, AccountType::MentorJudge)
        .await?;

    let account = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(account.id, mentor.id);
    assert_eq!(account.account_type, AccountType::MentorJudge);

    Ok(())
}

/// Tests that an empty session is rejected before any permission is checked.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn denies_access_when_not_logged_in() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted account is rejected.
///
/// Expected: Err(AuthError::AccountNotFound)
#[tokio::test]
async fn denies_access_when_account_deleted() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .set_account(999, AccountType::Participant)
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotFound(999)))
    ));

    Ok(())
}
