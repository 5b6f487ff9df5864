use rand::Rng;

pub const TEAM_CODE_LENGTH: usize = 6;

const TEAM_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random team code of uppercase letters and digits.
pub fn generate_team_code() -> String {
    let mut rng = rand::rng();

    (0..TEAM_CODE_LENGTH)
        .map(|_| TEAM_CODE_CHARSET[rng.random_range(0..TEAM_CODE_CHARSET.len())] as char)
        .collect()
}

/// Normalizes a user-entered team code for lookup.
pub fn normalize_team_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_code_has_expected_shape() {
        for _ in 0..50 {
            let code = generate_team_code();
            assert_eq!(code.len(), TEAM_CODE_LENGTH);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_team_code("  ab12cd "), "AB12CD");
    }
}
