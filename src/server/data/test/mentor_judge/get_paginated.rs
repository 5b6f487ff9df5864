use super::*;

/// Tests filtering the directory by role.
///
/// Expected: only judges when filtering by judge, everyone without a filter
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::mentor_judge::MentorJudgeFactory::new(db)
        .roles(true, false)
        .build()
        .await?;
    let judge = factory::mentor_judge::MentorJudgeFactory::new(db)
        .roles(false, true)
        .build()
        .await?;

    let repo = MentorJudgeRepository::new(db);
    let (judges, judge_total) = repo
        .get_paginated(Some(MentorJudgeRole::Judge), 0, 10)
        .await?;
    let (_, total) = repo.get_paginated(None, 0, 10).await?;

    assert_eq!(judge_total, 1);
    assert_eq!(judges[0].id, judge.id);
    assert_eq!(total, 2);

    Ok(())
}
