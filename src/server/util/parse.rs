//! Conversions between stored column values and domain types.
//!
//! Used by `from_entity` conversions at the repository boundary; failures surface as
//! `DbErr` the same way a corrupt row would.

use std::str::FromStr;

use sea_orm::DbErr;
use serde::{de::DeserializeOwned, Serialize};

/// Parses a string column into a wire enum.
///
/// # Arguments
/// - `column` - Column name, used in the error message
/// - `value` - Stored string value
///
/// # Returns
/// - `Ok(T)` - Parsed value
/// - `Err(DbErr::Custom)` - The stored string is not a known variant
pub fn parse_column<T>(column: &str, value: &str) -> Result<T, DbErr>
where
    T: FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
}

/// Decodes a JSON column into a typed value.
pub fn decode_json<T: DeserializeOwned>(
    column: &str,
    value: serde_json::Value,
) -> Result<T, DbErr> {
    serde_json::from_value(value)
        .map_err(|e| DbErr::Json(format!("Failed to decode {}: {}", column, e)))
}

/// Encodes a value for storage in a JSON column.
pub fn encode_json<T: Serialize>(value: &T) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(value).map_err(|e| DbErr::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::hackathon::HackathonStatus;

    #[test]
    fn parses_known_variant() {
        let status: HackathonStatus = parse_column("status", "ongoing").unwrap();
        assert_eq!(status, HackathonStatus::Ongoing);
    }

    #[test]
    fn rejects_unknown_variant() {
        let result = parse_column::<HackathonStatus>("status", "paused");
        assert!(matches!(result, Err(DbErr::Custom(msg)) if msg.contains("paused")));
    }

    #[test]
    fn decodes_string_list() {
        let list: Vec<String> = decode_json("skills", json!(["rust", "sql"])).unwrap();
        assert_eq!(list, vec!["rust".to_string(), "sql".to_string()]);
    }

    #[test]
    fn rejects_mismatched_json() {
        let result = decode_json::<Vec<String>>("skills", json!({"rust": true}));
        assert!(matches!(result, Err(DbErr::Json(_))));
    }
}
