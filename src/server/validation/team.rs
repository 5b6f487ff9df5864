use crate::{
    model::team::TeamRole,
    server::{
        model::team::JoinHackathonParams,
        validation::{Validate, Violations},
    },
};

impl Validate for JoinHackathonParams {
    fn check(&self, v: &mut Violations) {
        if self.role == TeamRole::Member {
            v.require("team_code", self.team_code.as_deref().unwrap_or_default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::validation::ValidationError;

    fn params(role: TeamRole, team_code: Option<&str>) -> JoinHackathonParams {
        JoinHackathonParams {
            hackathon_id: 1,
            participant_id: 1,
            role,
            team_code: team_code.map(str::to_string),
        }
    }

    #[test]
    fn leader_needs_no_code() {
        assert_eq!(params(TeamRole::Leader, None).validate(), Ok(()));
    }

    #[test]
    fn member_needs_code() {
        assert_eq!(
            params(TeamRole::Member, None).validate(),
            Err(ValidationError::MissingFields(vec!["team_code".to_string()]))
        );
        assert_eq!(params(TeamRole::Member, Some("AB12CD")).validate(), Ok(()));
    }
}
