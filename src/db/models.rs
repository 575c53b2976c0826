use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp format SQLite's datetime('now') produces (UTC).
const SQLITE_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub token: String,
    pub expires_at: String,
    pub created_at: String,
}

/// A single dated observation about a family member. Immutable once
/// created; `created_at` is assigned by the store and is the sole
/// ordering and bucketing key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkin {
    pub id: String,
    pub parent_name: String,
    pub mood: String,
    pub notes: Option<String>,
    pub user_id: Option<String>,
    pub created_at: String,
}

impl Checkin {
    pub fn created_at_local(&self) -> Option<DateTime<Local>> {
        NaiveDateTime::parse_from_str(&self.created_at, SQLITE_DATETIME)
            .ok()
            .map(|dt| dt.and_utc().with_timezone(&Local))
    }

    /// Calendar date of this record in local time. Bucketing compares
    /// these, not exact timestamps.
    pub fn local_date(&self) -> Option<NaiveDate> {
        self.created_at_local().map(|dt| dt.date_naive())
    }
}
