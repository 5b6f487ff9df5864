use super::*;

/// Tests listing a participant's hackathons with their role.
///
/// Expected: one entry per hackathon with team code and role
#[tokio::test]
async fn lists_joined_hackathons() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (hackathon, leader, team) = factory::helpers::create_team_with_leader(db).await?;
    let (_, other_hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;
    let other_leader = factory::create_participant(db).await?;
    let other_team = factory::create_team(db, other_hackathon.id, other_leader.id).await?;
    factory::team::add_member(db, other_team.clone(), leader.id).await?;

    let repo = RegistrationRepository::new(db);
    let joined = repo.get_for_participant(leader.id).await?;

    assert_eq!(joined.len(), 2);
    let led = joined.iter().find(|j| j.hackathon_id == hackathon.id).unwrap();
    assert_eq!(led.role, TeamRole::Leader);
    assert_eq!(led.team_code, team.team_code);
    let member_of = joined
        .iter()
        .find(|j| j.hackathon_id == other_hackathon.id)
        .unwrap();
    assert_eq!(member_of.role, TeamRole::Member);
    assert_eq!(member_of.team_id, other_team.id);

    Ok(())
}

/// Tests a participant who joined nothing.
///
/// Expected: empty list
#[tokio::test]
async fn empty_for_new_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let participant = factory::create_participant(db).await?;

    let repo = RegistrationRepository::new(db);
    assert!(repo.get_for_participant(participant.id).await?.is_empty());

    Ok(())
}
