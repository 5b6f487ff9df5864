use super::*;

/// Tests creating a hackathon with prizes and judging criteria.
///
/// Expected: upcoming, no participants, children returned in submitted order
#[tokio::test]
async fn creates_with_children() -> Result<(), DbErr> {
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

    assert_eq!(created.status, HackathonStatus::Upcoming);
    assert_eq!(created.current_participants, 0);

    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found.organizer_id, organizer.id);
    assert_eq!(found.details.prizes[0].position, "First");
    assert_eq!(found.details.prizes[1].position, "Second");
    assert_eq!(found.details.judging_criteria[0].criterion, "Impact");
    assert_eq!(found.details.venue.as_deref(), Some("COEP Auditorium"));

    Ok(())
}

/// Tests that the organizer's listing only contains their hackathons.
///
/// Expected: one hackathon per organizer
#[tokio::test]
async fn lists_by_organizer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (organizer, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;
    factory::helpers::create_hackathon_with_organizer(db).await?;

    let repo = HackathonRepository::new(db);
    let own = repo.get_by_organizer(organizer.id).await?;

    assert_eq!(own.len(), 1);
    assert_eq!(own[0].id, hackathon.id);

    Ok(())
}
