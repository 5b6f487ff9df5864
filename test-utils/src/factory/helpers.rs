//! Shared helpers for the factories.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next value of a process-wide counter, used to keep unique columns unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an organizer and an upcoming hackathon they own.
///
/// # Returns
/// - `Ok((organizer, hackathon))` - Both inserted entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hackathon_with_organizer(
    db: &DatabaseConnection,
) -> Result<(entity::organizer::Model, entity::hackathon::Model), DbErr> {
    let organizer = crate::factory::organizer::create_organizer(db).await?;
    let hackathon = crate::factory::hackathon::create_hackathon(db, organizer.id).await?;

    Ok((organizer, hackathon))
}

/// Creates a hackathon, a participant and a team that participant leads.
///
/// The hackathon's `current_participants` is bumped to account for the leader.
///
/// # Returns
/// - `Ok((hackathon, leader, team))` - All inserted entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_leader(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::hackathon::Model,
        entity::participant::Model,
        entity::team::Model,
    ),
    DbErr,
> {
    let (_, hackathon) = create_hackathon_with_organizer(db).await?;
    let leader = crate::factory::participant::create_participant(db).await?;
    let team = crate::factory::team::create_team(db, hackathon.id, leader.id).await?;
    let hackathon = crate::factory::hackathon::set_current_participants(db, hackathon, 1).await?;

    Ok((hackathon, leader, team))
}
