use crate::server::{
    model::{
        account::LoginParams,
        mentor_judge::{MentorJudgeProfile, RegisterMentorJudgeParams},
        organizer::{OrganizerProfile, RegisterOrganizerParams},
        participant::{ParticipantProfile, RegisterParticipantParams},
    },
    validation::{is_valid_email, is_valid_phone, is_valid_url, Validate, Violations},
};

pub const FIELDS_OF_INTEREST: &[&str] = &[
    "Web Development",
    "Mobile Development",
    "Data Science",
    "Machine Learning",
    "AI",
    "Cyber Security",
    "Cloud Computing",
    "DevOps",
    "Blockchain",
    "Game Development",
];

pub const MIN_PARTICIPANT_AGE: i32 = 13;
pub const MAX_PARTICIPANT_AGE: i32 = 100;

fn check_email(v: &mut Violations, email: &str) {
    if v.require("email", email) {
        v.check(is_valid_email(email), "Invalid email format");
    }
}

fn check_profile_picture(v: &mut Violations, picture: Option<&str>) {
    if let Some(picture) = picture.filter(|p| !p.trim().is_empty()) {
        v.check(is_valid_url(picture), "Invalid profile picture URL");
    }
}

/// New passwords on update: absent is fine, blank is not.
pub fn check_new_password(v: &mut Violations, password: Option<&str>) {
    if let Some(password) = password {
        v.check(!password.trim().is_empty(), "Password cannot be empty");
    }
}

impl Validate for OrganizerProfile {
    fn check(&self, v: &mut Violations) {
        v.require("name", &self.name);
        check_email(v, &self.email);
        v.require("organization_name", &self.organization_name);
        v.require("description", &self.description);
        check_profile_picture(v, self.profile_picture.as_deref());
    }
}

impl Validate for RegisterOrganizerParams {
    fn check(&self, v: &mut Violations) {
        self.profile.check(v);
        v.require("password", &self.password);
    }
}

impl Validate for ParticipantProfile {
    fn check(&self, v: &mut Violations) {
        v.require("name", &self.name);
        v.require("username", &self.username);
        check_email(v, &self.email);
        v.require("experience", &self.experience);
        let has_github = v.require("github_link", &self.github_link);
        let has_linked_in = v.require("linked_in", &self.linked_in);
        v.require("organization", &self.organization);
        let has_interests = v.require_list("fields_of_interest", &self.fields_of_interest);
        v.require("bio", &self.bio);
        v.require("city", &self.city);
        v.require("country", &self.country);

        v.check(
            (MIN_PARTICIPANT_AGE..=MAX_PARTICIPANT_AGE).contains(&self.age),
            format!(
                "Age must be between {} and {}",
                MIN_PARTICIPANT_AGE, MAX_PARTICIPANT_AGE
            ),
        );
        if has_github {
            v.check(is_valid_url(&self.github_link), "Invalid GitHub URL");
        }
        if has_linked_in {
            v.check(is_valid_url(&self.linked_in), "Invalid LinkedIn URL");
        }
        if has_interests {
            for interest in &self.fields_of_interest {
                v.check(
                    FIELDS_OF_INTEREST.contains(&interest.as_str()),
                    format!("Invalid field of interest '{}'", interest),
                );
            }
        }
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.is_empty()) {
            v.check(is_valid_phone(phone), "Invalid phone number format");
        }
        v.check(
            self.skills.iter().all(|s| !s.trim().is_empty()),
            "Skills cannot contain empty entries",
        );
        check_profile_picture(v, self.profile_picture.as_deref());
    }
}

impl Validate for RegisterParticipantParams {
    fn check(&self, v: &mut Violations) {
        self.profile.check(v);
        v.require("password", &self.password);
    }
}

impl Validate for MentorJudgeProfile {
    fn check(&self, v: &mut Violations) {
        v.require("name", &self.name);
        check_email(v, &self.email);
        if v.require("phone", &self.phone) {
            v.check(is_valid_phone(&self.phone), "Invalid phone number format");
        }
        v.require("experience", &self.experience);
        v.require("current_organization", &self.current_organization);
        v.require_list("expertise", &self.expertise);

        v.check(
            self.previous_events
                .iter()
                .all(|e| !e.event_name.trim().is_empty() && !e.role.trim().is_empty() && e.year > 0),
            "Each previous event must have event_name, role, and year",
        );
        v.check(
            self.is_mentor || self.is_judge,
            "At least one role (mentor or judge) must be selected",
        );
        check_profile_picture(v, self.profile_picture.as_deref());
    }
}

impl Validate for RegisterMentorJudgeParams {
    fn check(&self, v: &mut Violations) {
        self.profile.check(v);
        v.require("password", &self.password);
    }
}

impl Validate for LoginParams {
    fn check(&self, v: &mut Violations) {
        v.require("email", &self.email);
        v.require("password", &self.password);
    }
}
