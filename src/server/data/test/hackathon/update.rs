use super::*;

/// Tests that updating replaces prizes and keeps counters.
///
/// Expected: new single prize, participant counter and status untouched
#[tokio::test]
async fn replaces_children_and_keeps_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let organizer = factory::create_organizer(db).await?;

    let repo = HackathonRepository::new(db);
    let created = repo
        .create(CreateHackathonParams {
            organizer_id: organizer.id,
            details: details("Green Hack"),
        })
        .await?;
    repo.try_reserve_slot(created.id).await?;

    let mut changed = details("Green Hack 2");
    changed.prizes = vec![Prize {
        position: "Winner".to_string(),
        amount: 1000.0,
    }];
    let updated = repo.update(created.id, changed).await?;

    assert_eq!(updated.details.name, "Green Hack 2");
    assert_eq!(updated.details.prizes.len(), 1);
    assert_eq!(updated.current_participants, 1);
    assert_eq!(updated.status, HackathonStatus::Upcoming);

    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(reloaded.details.prizes.len(), 1);
    assert_eq!(reloaded.details.judging_criteria.len(), 2);

    Ok(())
}
