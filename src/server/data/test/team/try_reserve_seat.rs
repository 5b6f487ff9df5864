use super::*;

/// Tests filling a team to its maximum size.
///
/// Expected: seats granted until max_members, then refused
#[tokio::test]
async fn stops_at_max_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;
    let leader = factory::create_participant(db).await?;
    let team = factory::team::TeamFactory::new(db, hackathon.id, leader.id)
        .max_members(2)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    assert!(repo.try_reserve_seat(team.id).await?);
    assert!(!repo.try_reserve_seat(team.id).await?);

    let found = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(found.member_count, 2);

    Ok(())
}
