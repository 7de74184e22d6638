//! Dataset refresh history entries

use super::dataset::parse_timestamp;
use super::{array_field, int_field, str_field};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Value;

/// One entry of a dataset's refresh history
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Refresh {
    pub id: Option<i64>,
    pub request_id: Option<String>,
    pub refresh_type: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub status: Option<String>,
    pub service_exception_json: Option<String>,
    pub refresh_attempts: Option<Vec<Value>>,
}

impl From<&Value> for Refresh {
    fn from(value: &Value) -> Self {
        Self {
            id: int_field(value, "id"),
            request_id: str_field(value, "requestId"),
            refresh_type: str_field(value, "refreshType"),
            start_time: str_field(value, "startTime"),
            end_time: str_field(value, "endTime"),
            status: str_field(value, "status"),
            service_exception_json: str_field(value, "serviceExceptionJson"),
            refresh_attempts: array_field(value, "refreshAttempts"),
        }
    }
}

impl Refresh {
    /// Build from a raw API payload
    pub fn from_raw(raw: &Value) -> Self {
        Self::from(raw)
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.start_time.as_deref().and_then(parse_timestamp)
    }

    /// `None` while the refresh is still running
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.end_time.as_deref().and_then(parse_timestamp)
    }

    pub fn duration(&self) -> Option<Duration> {
        Some(self.ended_at()? - self.started_at()?)
    }

    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("Completed")
    }

    pub fn is_failed(&self) -> bool {
        self.status.as_deref() == Some("Failed")
    }

    /// Decode the JSON document embedded as a string in `serviceExceptionJson`
    pub fn service_exception(&self) -> Option<Value> {
        self.service_exception_json
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
    }
}

/// Who gets mailed when a triggered refresh finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NotifyOption {
    MailOnCompletion,
    MailOnFailure,
    #[default]
    NoNotification,
}

impl NotifyOption {
    pub fn as_str(self) -> &'static str {
        match self {
            NotifyOption::MailOnCompletion => "MailOnCompletion",
            NotifyOption::MailOnFailure => "MailOnFailure",
            NotifyOption::NoNotification => "NoNotification",
        }
    }
}

impl std::str::FromStr for NotifyOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mailoncompletion" => Ok(NotifyOption::MailOnCompletion),
            "mailonfailure" => Ok(NotifyOption::MailOnFailure),
            "nonotification" => Ok(NotifyOption::NoNotification),
            _ => Err(format!("unknown notify option '{}'", s)),
        }
    }
}
