pub mod json;
pub mod parse;
pub mod password;
pub mod team_code;
