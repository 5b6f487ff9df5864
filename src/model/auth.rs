use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

wire_enum! {
    /// Which of the three account tables a login targets.
    AccountType("account type") {
        Organizer => "organizer",
        Participant => "participant",
        MentorJudge => "mentor_judge",
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
    pub account_type: AccountType,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AccountDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
}
