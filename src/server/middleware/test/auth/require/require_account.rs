use super::*;

/// Tests that an account may act on itself.
///
/// Expected: Ok(Account)
#[tokio::test]
async fn grants_own_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let participant = factory::create_participant(db).await?;

    AuthSession::new(session)
        .set_account(participant.id, AccountType::Participant)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Account(AccountType::Participant, participant.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that one participant cannot act on another.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let participant = factory::create_participant(db).await?;
    let other = factory::create_participant(db).await?;

    AuthSession::new(session)
        .set_account(participant.id, AccountType::Participant)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Account(AccountType::Participant, other.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a matching ID in a different table does not count as the same account.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_same_id_of_other_type() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let mentor = factory::create_mentor_judge(db).await?;

    AuthSession::new(session)
        .set_account(mentor.id, AccountType::MentorJudge)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Account(AccountType::Organizer, mentor.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
