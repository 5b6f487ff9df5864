use super::*;

/// Tests creating a mentor/judge with previous events.
///
/// Expected: events come back in insertion order
#[tokio::test]
async fn creates_with_previous_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MentorJudgeRepository::new(db);
    let created = repo
        .create(
            profile(
                "meera@example.com",
                vec![event("HackPune", 2022), event("Smart India", 2023)],
            ),
            "hash".to_string(),
        )
        .await?;

    let found = repo.find_by_id(created.id).await?.unwrap();
    let names: Vec<&str> = found
        .profile
        .previous_events
        .iter()
        .map(|e| e.event_name.as_str())
        .collect();
    assert_eq!(names, vec!["HackPune", "Smart India"]);
    assert!(found.profile.is_mentor && found.profile.is_judge);

    Ok(())
}
