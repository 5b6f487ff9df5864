use super::*;

/// Tests that codes are scoped to their hackathon.
///
/// Expected: found in its own hackathon, None in another
#[tokio::test]
async fn scoped_to_hackathon() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (hackathon, _, team) = factory::helpers::create_team_with_leader(db).await?;
    let (_, other) = factory::helpers::create_hackathon_with_organizer(db).await?;

    let repo = TeamRepository::new(db);
    let found = repo.find_by_code(hackathon.id, &team.team_code).await?;

    assert_eq!(found.map(|t| t.id), Some(team.id));
    assert!(repo.find_by_code(other.id, &team.team_code).await?.is_none());

    Ok(())
}
