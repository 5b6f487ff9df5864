use super::*;

/// Tests setting the status directly.
///
/// Expected: true for an existing hackathon, false for an unknown ID
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;

    let repo = HackathonRepository::new(db);
    assert!(
        repo.update_status(hackathon.id, HackathonStatus::Cancelled)
            .await?
    );
    assert!(!repo.update_status(999, HackathonStatus::Cancelled).await?);

    let found = repo.find_by_id(hackathon.id).await?.unwrap();
    assert!(found.is_closed());

    Ok(())
}
