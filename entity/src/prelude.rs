pub use super::hackathon::Entity as Hackathon;
pub use super::hackathon_judging_criterion::Entity as HackathonJudgingCriterion;
pub use super::hackathon_prize::Entity as HackathonPrize;
pub use super::hackathon_registration::Entity as HackathonRegistration;
pub use super::hackathon_timeline::Entity as HackathonTimeline;
pub use super::mentor_judge::Entity as MentorJudge;
pub use super::mentor_judge_event::Entity as MentorJudgeEvent;
pub use super::organizer::Entity as Organizer;
pub use super::participant::Entity as Participant;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::timeline_event::Entity as TimelineEvent;
