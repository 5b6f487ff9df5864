use super::*;

/// Tests roster order and roles.
///
/// Expected: leader first, members after in join order
#[tokio::test]
async fn lists_leader_then_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, leader, team) = factory::helpers::create_team_with_leader(db).await?;
    let team_id = team.id;
    let first = factory::create_participant(db).await?;
    let second = factory::create_participant(db).await?;
    let team = factory::team::add_member(db, team, first.id).await?;
    factory::team::add_member(db, team, second.id).await?;

    let repo = TeamRepository::new(db);
    let roster = repo.get_with_members(team_id).await?.unwrap();

    let ids: Vec<i32> = roster.members.iter().map(|m| m.participant_id).collect();
    assert_eq!(ids, vec![leader.id, first.id, second.id]);
    assert_eq!(roster.members[0].role, TeamRole::Leader);
    assert!(roster.members[1..]
        .iter()
        .all(|m| m.role == TeamRole::Member));
    assert_eq!(roster.team.member_count, 3);

    Ok(())
}

/// Tests listing every team of a hackathon.
///
/// Expected: one entry per team, each with its roster
#[tokio::test]
async fn lists_teams_by_hackathon() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (hackathon, _, _) = factory::helpers::create_team_with_leader(db).await?;
    let second_leader = factory::create_participant(db).await?;
    factory::create_team(db, hackathon.id, second_leader.id).await?;

    let repo = TeamRepository::new(db);
    let teams = repo.get_by_hackathon(hackathon.id).await?;

    assert_eq!(teams.len(), 2);
    assert!(teams.iter().all(|t| t.members.len() == 1));
    assert_eq!(teams[1].team.leader_id, second_leader.id);

    Ok(())
}

/// Tests an unknown team.
///
/// Expected: None
#[tokio::test]
async fn missing_team_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    assert!(repo.get_with_members(77).await?.is_none());

    Ok(())
}
