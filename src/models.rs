//! Domain models: entities persisted in the store plus the create payloads
//! accepted by the API.
//!
//! Numeric payload fields (party size, revenue, amount) tolerate a missing,
//! null, or blank value and fall back to their documented default rather
//! than failing validation; everything else is validated in the handlers.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Staff role, ordered by increasing privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Role {
    Waiter,
    ShiftLead,
    Manager,
}

impl Default for Role {
    fn default() -> Self {
        Self::Waiter
    }
}

impl Role {
    /// Shift leads and managers share most scheduling privileges
    pub fn is_lead_or_manager(&self) -> bool {
        matches!(self, Role::ShiftLead | Role::Manager)
    }
}

/// A user account. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Create user payload (manager only)
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: Role,
    pub password: String,
}

/// A scheduled shift. `employee` is free text, not a user reference.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Shift {
    pub id: i64,
    pub employee: String,
    pub role: String,
    #[sqlx(rename = "start_at")]
    pub start: NaiveDateTime,
    #[sqlx(rename = "end_at")]
    pub end: NaiveDateTime,
}

/// Create shift payload
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftCreate {
    pub employee: String,
    #[serde(default)]
    pub role: String,
    pub start: String,
    pub end: String,
}

/// A table reservation
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Reservation {
    pub id: i64,
    pub customer: String,
    pub size: i64,
    pub at: NaiveDateTime,
    pub notes: String,
}

/// Create reservation payload
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationCreate {
    pub customer: String,
    #[serde(default, deserialize_with = "blank_number")]
    pub size: Option<i64>,
    pub at: String,
    #[serde(default)]
    pub notes: String,
}

/// A shift-end report. `lead_id` records who filed it and is nullable so
/// reports survive the departure of their author.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShiftReport {
    pub id: i64,
    pub date: NaiveDate,
    pub lead_id: Option<i64>,
    pub revenue: f64,
    pub issues: String,
    pub notes: String,
}

/// Create report payload. The lead is always the acting user, never
/// client-supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftReportCreate {
    pub date: String,
    #[serde(default, deserialize_with = "blank_number")]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub issues: String,
    #[serde(default)]
    pub notes: String,
}

/// A worked-hours claim filed for a user
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: i64,
    #[sqlx(rename = "start_at")]
    pub start: NaiveDateTime,
    #[sqlx(rename = "end_at")]
    pub end: NaiveDateTime,
    pub note: String,
}

/// Create time entry payload
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntryCreate {
    pub user_id: i64,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub note: String,
}

/// A clothing/uniform security deposit held for a user
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClothingDeposit {
    pub id: i64,
    pub user_id: i64,
    pub item: String,
    pub size: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub returned: bool,
    pub notes: String,
}

/// Create deposit payload. `date` defaults to today when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct ClothingDepositCreate {
    pub user_id: i64,
    pub item: String,
    #[serde(default)]
    pub size: String,
    #[serde(default, deserialize_with = "blank_number")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub returned: bool,
    #[serde(default)]
    pub notes: String,
}

/// Accept a JSON number, a numeric string, or a blank/null value.
/// Blank and null both mean "use the default".
fn blank_number<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: std::str::FromStr + serde::de::DeserializeOwned,
    T::Err: std::fmt::Display,
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse::<T>().map(Some).map_err(serde::de::Error::custom)
            }
        }
        Some(other) => serde_json::from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_names() {
        assert_eq!(serde_json::to_string(&Role::ShiftLead).unwrap(), "\"shift_lead\"");
        let role: Role = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn test_user_serialization_hides_hash() {
        let user = User {
            id: 1,
            username: "waiter".into(),
            full_name: "Waiter".into(),
            role: Role::Waiter,
            password_hash: "secret".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_blank_numeric_fields_default_to_none() {
        let r: ReservationCreate =
            serde_json::from_str(r#"{"customer":"Smith","at":"2024-02-01T19:00"}"#).unwrap();
        assert_eq!(r.size, None);

        let r: ReservationCreate =
            serde_json::from_str(r#"{"customer":"Smith","size":"","at":"2024-02-01T19:00"}"#)
                .unwrap();
        assert_eq!(r.size, None);

        let r: ReservationCreate =
            serde_json::from_str(r#"{"customer":"Smith","size":"4","at":"2024-02-01T19:00"}"#)
                .unwrap();
        assert_eq!(r.size, Some(4));

        let r: ReservationCreate =
            serde_json::from_str(r#"{"customer":"Smith","size":4,"at":"2024-02-01T19:00"}"#)
                .unwrap();
        assert_eq!(r.size, Some(4));
    }

    #[test]
    fn test_revenue_accepts_float() {
        let r: ShiftReportCreate =
            serde_json::from_str(r#"{"date":"2024-02-01","revenue":1234.5}"#).unwrap();
        assert_eq!(r.revenue, Some(1234.5));
    }
}
