//! Shared helpers: password hashing and timestamp parsing.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{AppError, AppResult};

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Parse an ISO-8601 date-time, with or without seconds.
/// `field` names the offending input in the validation message.
pub fn parse_datetime(field: &str, value: &str) -> AppResult<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::validation(format!("{field} is not a valid timestamp: {value}")))
}

/// Parse an ISO-8601 calendar date. A full timestamp is accepted and
/// truncated to its date component.
pub fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| parse_datetime(field, value).map(|dt| dt.date()))
        .map_err(|_| AppError::validation(format!("{field} is not a valid date: {value}")))
}

/// Reject blank required text fields. The value is stored as sent; only the
/// blankness check looks at the trimmed form.
pub fn require_text(field: &str, value: &str) -> AppResult<String> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("waiter123").unwrap();
        assert!(verify_password("waiter123", &hash));
        assert!(!verify_password("waiter124", &hash));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("pw", "not-a-phc-string"));
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert!(parse_datetime("start", "2024-01-01T09:00").is_ok());
        assert!(parse_datetime("start", "2024-01-01T09:00:30").is_ok());
        assert!(parse_datetime("start", "yesterday").is_err());
        assert!(parse_datetime("start", "2024-13-01T09:00").is_err());
    }

    #[test]
    fn test_parse_date_accepts_timestamp() {
        let d = parse_date("date", "2024-02-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let d = parse_date("date", "2024-02-01T19:00").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(parse_date("date", "02/01/2024").is_err());
    }

    #[test]
    fn test_require_text_keeps_value_as_sent() {
        assert_eq!(require_text("customer", " Smith ").unwrap(), " Smith ");
        assert!(require_text("customer", "   ").is_err());
        assert!(require_text("customer", "").is_err());
    }
}
