use super::*;

/// Tests finding the team a participant registered through.
///
/// Expected: team ID for the leader, None for a stranger
#[tokio::test]
async fn finds_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (hackathon, leader, team) = factory::helpers::create_team_with_leader(db).await?;
    let stranger = factory::create_participant(db).await?;

    let repo = RegistrationRepository::new(db);
    assert_eq!(
        repo.find_team_id(hackathon.id, leader.id).await?,
        Some(team.id)
    );
    assert_eq!(repo.find_team_id(hackathon.id, stranger.id).await?, None);

    Ok(())
}

/// Tests writing a member registration.
///
/// Expected: lookup returns the team afterwards
#[tokio::test]
async fn creates_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (hackathon, _, team) = factory::helpers::create_team_with_leader(db).await?;
    let member = factory::create_participant(db).await?;

    let repo = RegistrationRepository::new(db);
    repo.create(hackathon.id, member.id, team.id, TeamRole::Member)
        .await?;

    assert_eq!(
        repo.find_team_id(hackathon.id, member.id).await?,
        Some(team.id)
    );

    Ok(())
}
