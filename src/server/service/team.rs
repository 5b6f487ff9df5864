use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::team::TeamRole,
    server::{
        data::{
            hackathon::HackathonRepository,
            registration::RegistrationRepository,
            team::{NewTeam, TeamRepository},
        },
        error::{internal::InternalError, AppError},
        model::{
            hackathon::Hackathon,
            team::{JoinHackathonParams, Team, TeamWithMembers},
        },
        service::duplicate_as_bad_request,
        util::team_code::generate_team_code,
        validation::Validate,
    },
};

/// Attempts at drawing an unused team code before giving up.
const TEAM_CODE_ATTEMPTS: usize = 10;

const HACKATHON_NOT_FOUND: &str = "Hackathon not found";
const HACKATHON_CLOSED: &str = "Hackathon is no longer accepting registrations";
const HACKATHON_FULL: &str = "Hackathon is full";
const ALREADY_REGISTERED: &str = "Participant is already registered for this hackathon";
const INVALID_TEAM_CODE: &str = "Invalid team code";
const TEAM_FULL: &str = "Team has reached its maximum size";

/// Team formation: founding teams, joining them by code and the capacity counters behind it.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a participant for a hackathon as a team leader or as a member of an
    /// existing team.
    ///
    /// All counter updates, the team and membership rows and the registration are written in
    /// one transaction; any failure leaves the database untouched. Both counters move with
    /// conditional updates, so concurrent joins cannot push a hackathon or a team past its
    /// capacity.
    ///
    /// # Returns
    /// - `Ok(TeamWithMembers)` - The founded or joined team with its roster
    /// - `Err(AppError::NotFound)` - Unknown hackathon, or no team with that code in it
    /// - `Err(AppError::BadRequest)` - Hackathon closed or full, team full, or the
    ///   participant is already registered
    /// - `Err(AppError::ValidationErr)` - Member join without a team code
    pub async fn join(&self, params: JoinHackathonParams) -> Result<TeamWithMembers, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let Some(hackathon) = HackathonRepository::new(&txn)
            .find_by_id(params.hackathon_id)
            .await?
        else {
            return Err(AppError::NotFound(HACKATHON_NOT_FOUND.to_string()));
        };
        if hackathon.is_closed() {
            return Err(AppError::BadRequest(HACKATHON_CLOSED.to_string()));
        }

        let registrations = RegistrationRepository::new(&txn);
        if registrations
            .find_team_id(hackathon.id, params.participant_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(ALREADY_REGISTERED.to_string()));
        }

        let team = match params.role {
            TeamRole::Leader => found_team(&txn, &hackathon, params.participant_id).await?,
            TeamRole::Member => {
                let code = params.team_code.as_deref().unwrap_or_default();
                join_team(&txn, hackathon.id, code, params.participant_id).await?
            }
        };

        registrations
            .create(hackathon.id, params.participant_id, team.id, params.role)
            .await
            .map_err(|e| duplicate_as_bad_request(e, ALREADY_REGISTERED))?;

        let team = TeamRepository::new(&txn)
            .get_with_members(team.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Team {} vanished mid-join", team.id)))?;

        txn.commit().await?;

        tracing::info!(
            "Participant {} joined hackathon {} as {} of team {} ({}/{})",
            params.participant_id,
            hackathon.id,
            params.role,
            team.team.team_code,
            team.team.member_count,
            team.team.max_members
        );

        Ok(team)
    }

    /// Gets the team a participant belongs to in a hackathon.
    ///
    /// # Returns
    /// - `Ok(None)` - The participant is not registered for the hackathon
    pub async fn my_team(
        &self,
        hackathon_id: i32,
        participant_id: i32,
    ) -> Result<Option<TeamWithMembers>, AppError> {
        let Some(team_id) = RegistrationRepository::new(self.db)
            .find_team_id(hackathon_id, participant_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(TeamRepository::new(self.db).get_with_members(team_id).await?)
    }
}

/// Takes a hackathon slot for the leader and creates their team under a fresh code.
async fn found_team(
    txn: &DatabaseTransaction,
    hackathon: &Hackathon,
    leader_id: i32,
) -> Result<Team, AppError> {
    if !HackathonRepository::new(txn)
        .try_reserve_slot(hackathon.id)
        .await?
    {
        return Err(AppError::BadRequest(HACKATHON_FULL.to_string()));
    }

    let teams = TeamRepository::new(txn);
    let team_code = unused_team_code(&teams).await?;

    Ok(teams
        .create(NewTeam {
            hackathon_id: hackathon.id,
            leader_id,
            team_code,
            max_members: hackathon.details.max_team_size,
            min_members: hackathon.details.min_team_size,
        })
        .await?)
}

/// Takes a team seat, then a hackathon slot, then adds the membership.
async fn join_team(
    txn: &DatabaseTransaction,
    hackathon_id: i32,
    team_code: &str,
    participant_id: i32,
) -> Result<Team, AppError> {
    let teams = TeamRepository::new(txn);
    let Some(team) = teams.find_by_code(hackathon_id, team_code).await? else {
        return Err(AppError::NotFound(INVALID_TEAM_CODE.to_string()));
    };

    if !teams.try_reserve_seat(team.id).await? {
        return Err(AppError::BadRequest(TEAM_FULL.to_string()));
    }
    if !HackathonRepository::new(txn)
        .try_reserve_slot(hackathon_id)
        .await?
    {
        return Err(AppError::BadRequest(HACKATHON_FULL.to_string()));
    }

    teams.add_member(team.id, participant_id).await?;

    Ok(team)
}

async fn unused_team_code(teams: &TeamRepository<'_, DatabaseTransaction>) -> Result<String, AppError> {
    for _ in 0..TEAM_CODE_ATTEMPTS {
        let code = generate_team_code();
        if !teams.code_exists(&code).await? {
            return Ok(code);
        }
        tracing::debug!("Team code {} already taken, drawing another", code);
    }

    Err(InternalError::TeamCodeExhausted {
        attempts: TEAM_CODE_ATTEMPTS,
    }
    .into())
}
