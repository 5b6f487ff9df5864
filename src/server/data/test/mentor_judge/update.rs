use super::*;

/// Tests that updating replaces the previous-event rows.
///
/// Expected: only the new event remains
#[tokio::test]
async fn replaces_previous_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MentorJudgeRepository::new(db);
    let created = repo
        .create(
            profile("meera@example.com", vec![event("HackPune", 2022)]),
            "hash".to_string(),
        )
        .await?;

    let updated = repo
        .update(
            created.id,
            profile("meera@example.com", vec![event("DevFest", 2024)]),
            None,
        )
        .await?;

    assert_eq!(updated.profile.previous_events.len(), 1);
    assert_eq!(updated.profile.previous_events[0].event_name, "DevFest");
    assert_eq!(updated.password_hash, "hash");

    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(reloaded.profile.previous_events.len(), 1);

    Ok(())
}
