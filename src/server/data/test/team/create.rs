use super::*;

/// Tests founding a team.
///
/// Expected: member count one and the leader on the roster
#[tokio::test]
async fn creates_team_with_leader() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;
    let leader = factory::create_participant(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(NewTeam {
            hackathon_id: hackathon.id,
            leader_id: leader.id,
            team_code: "ABC123".to_string(),
            max_members: 4,
            min_members: 2,
        })
        .await?;

    assert_eq!(team.member_count, 1);
    assert!(repo.code_exists("ABC123").await?);
    assert!(!repo.code_exists("ZZZ999").await?);

    let roster = repo.get_with_members(team.id).await?.unwrap();
    assert_eq!(roster.members.len(), 1);
    assert_eq!(roster.members[0].participant_id, leader.id);
    assert_eq!(roster.members[0].role, TeamRole::Leader);

    Ok(())
}
