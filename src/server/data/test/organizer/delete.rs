use super::*;

/// Tests deleting an organizer cascades to their hackathons.
///
/// Expected: Ok(true), then the organizer and hackathon are gone
#[tokio::test]
async fn deletes_organizer_and_hackathons() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (organizer, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;

    let repo = OrganizerRepository::new(db);
    assert!(repo.delete(organizer.id).await?);
    assert!(repo.find_by_id(organizer.id).await?.is_none());

    let hackathons = crate::server::data::hackathon::HackathonRepository::new(db);
    assert!(hackathons.find_by_id(hackathon.id).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown organizer.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_organizer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizerRepository::new(db);
    assert!(!repo.delete(999).await?);

    Ok(())
}
