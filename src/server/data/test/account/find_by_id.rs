use super::*;

/// Tests that the account type selects the table.
///
/// Expected: found as a mentor/judge, absent as an organizer with the same ID
#[tokio::test]
async fn looks_up_requested_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mentor = factory::create_mentor_judge(db).await?;

    let repo = AccountRepository::new(db);
    let found = repo.find_by_id(mentor.id, AccountType::MentorJudge).await?;
    let wrong_table = repo.find_by_id(mentor.id, AccountType::Organizer).await?;

    let account = found.unwrap();
    assert_eq!(account.email, mentor.email);
    assert_eq!(account.account_type, AccountType::MentorJudge);
    assert!(wrong_table.is_none());

    Ok(())
}
