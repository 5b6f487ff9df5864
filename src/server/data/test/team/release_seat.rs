use super::*;

/// Tests freeing a member's seat.
///
/// Expected: member_count drops by one and the seat can be taken again
#[tokio::test]
async fn frees_one_seat() -> Result<(), DbErr> {
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
    repo.release_seat(team.id).await?;

    let found = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(found.member_count, 1);
    assert!(repo.try_reserve_seat(team.id).await?);

    Ok(())
}
