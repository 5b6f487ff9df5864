use crate::{
    model::hackathon::LocationType,
    server::{
        model::hackathon::HackathonDetails,
        validation::{Validate, Violations},
    },
};

pub const REQUIRED_CRITERIA_WEIGHTAGE: i32 = 100;

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

impl Validate for HackathonDetails {
    fn check(&self, v: &mut Violations) {
        v.require("name", &self.name);
        v.require("description", &self.description);
        v.require("theme", &self.theme);
        v.require("duration", &self.duration);
        v.require("start_time", &self.start_time);
        v.require("end_time", &self.end_time);
        v.require_list("domains", &self.domains);
        v.require_list("rules", &self.rules);
        v.require_list("judging_criteria", &self.judging_criteria);

        v.check(
            self.registration_start_date < self.registration_end_date,
            "Registration end date must be after registration start date",
        );
        v.check(
            self.registration_end_date < self.start_date,
            "Hackathon start date must be after registration end date",
        );
        v.check(
            self.start_date < self.end_date,
            "Hackathon end date must be after start date",
        );

        match self.location_type {
            LocationType::Offline => v.check(
                !is_blank(self.venue.as_deref()),
                "Venue is required for offline hackathons",
            ),
            LocationType::Online => v.check(
                !is_blank(self.online_platform.as_deref()),
                "Online platform is required for online hackathons",
            ),
        }

        v.check(
            self.min_team_size >= 1,
            "Minimum team size must be at least 1",
        );
        v.check(
            self.min_team_size <= self.max_team_size,
            "Minimum team size cannot be greater than maximum team size",
        );
        if let Some(max_participants) = self.max_participants {
            v.check(
                max_participants >= 1,
                "Maximum participants must be at least 1",
            );
        }

        v.check(
            self.registration_fee >= 0.0,
            "Registration fee cannot be negative",
        );
        v.check(self.prize_pool >= 0.0, "Prize pool cannot be negative");
        v.check(
            self.prizes
                .iter()
                .all(|p| !p.position.is_empty() && p.amount >= 0.0),
            "Each prize needs a position and a non-negative amount",
        );
        let total_prizes: f64 = self.prizes.iter().map(|p| p.amount).sum();
        v.check(
            total_prizes <= self.prize_pool,
            "Total prize distribution cannot exceed prize pool",
        );

        if !self.judging_criteria.is_empty() {
            v.check(
                self.judging_criteria.iter().all(|c| {
                    !c.criterion.is_empty()
                        && (0..=REQUIRED_CRITERIA_WEIGHTAGE).contains(&c.weightage)
                }),
                "Each judging criterion needs a name and a weightage between 0 and 100",
            );
            let total_weightage: i32 = self.judging_criteria.iter().map(|c| c.weightage).sum();
            v.check(
                total_weightage == REQUIRED_CRITERIA_WEIGHTAGE,
                "Total weightage of judging criteria must equal 100",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::server::{
        error::validation::ValidationError,
        model::hackathon::{JudgingCriterion, Prize},
    };

    fn details() -> HackathonDetails {
        let reg_start = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        HackathonDetails {
            name: "HackX".to_string(),
            description: "48h build".to_string(),
            theme: "Climate".to_string(),
            registration_start_date: reg_start,
            registration_end_date: reg_start + Duration::days(10),
            start_date: reg_start + Duration::days(11),
            end_date: reg_start + Duration::days(13),
            duration: "48 hours".to_string(),
            start_time: "09:00".to_string(),
            end_time: "18:00".to_string(),
            location_type: LocationType::Online,
            venue: None,
            online_platform: Some("Discord".to_string()),
            registration_fee: 0.0,
            prize_pool: 1000.0,
            prizes: vec![Prize {
                position: "1st".to_string(),
                amount: 600.0,
            }],
            domains: vec!["AI".to_string()],
            rules: vec!["Be kind".to_string()],
            min_team_size: 1,
            max_team_size: 4,
            max_participants: Some(100),
            judging_criteria: vec![
                JudgingCriterion {
                    criterion: "Impact".to_string(),
                    weightage: 60,
                },
                JudgingCriterion {
                    criterion: "Design".to_string(),
                    weightage: 40,
                },
            ],
            banner_image: None,
        }
    }

    fn invalid(message: &str) -> Result<(), ValidationError> {
        Err(ValidationError::Invalid(message.to_string()))
    }

    #[test]
    fn valid_details_pass() {
        assert_eq!(details().validate(), Ok(()));
    }

    #[test]
    fn start_must_follow_registration_end() {
        let mut d = details();
        d.start_date = d.registration_end_date;
        assert_eq!(
            d.validate(),
            invalid("Hackathon start date must be after registration end date")
        );
    }

    #[test]
    fn offline_requires_venue() {
        let mut d = details();
        d.location_type = LocationType::Offline;
        assert_eq!(d.validate(), invalid("Venue is required for offline hackathons"));
    }

    #[test]
    fn team_size_bounds() {
        let mut d = details();
        d.min_team_size = 5;
        assert_eq!(
            d.validate(),
            invalid("Minimum team size cannot be greater than maximum team size")
        );
    }

    #[test]
    fn prizes_cannot_exceed_pool() {
        let mut d = details();
        d.prizes.push(Prize {
            position: "2nd".to_string(),
            amount: 500.0,
        });
        assert_eq!(
            d.validate(),
            invalid("Total prize distribution cannot exceed prize pool")
        );
    }

    #[test]
    fn criteria_must_sum_to_one_hundred() {
        let mut d = details();
        d.judging_criteria[1].weightage = 30;
        assert_eq!(
            d.validate(),
            invalid("Total weightage of judging criteria must equal 100")
        );
    }

    #[test]
    fn missing_lists_are_reported_together() {
        let mut d = details();
        d.domains.clear();
        d.rules.clear();
        assert_eq!(
            d.validate(),
            Err(ValidationError::MissingFields(vec![
                "domains".to_string(),
                "rules".to_string()
            ]))
        );
    }
}
