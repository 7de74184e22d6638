//! Installed apps

use super::{id_field, str_field};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub published_by: Option<String>,
    pub last_update: Option<String>,
    pub workspace_id: Option<String>,
}

impl From<&Value> for App {
    fn from(value: &Value) -> Self {
        Self {
            id: id_field(value, "id"),
            name: str_field(value, "name"),
            description: str_field(value, "description"),
            published_by: str_field(value, "publishedBy"),
            last_update: str_field(value, "lastUpdate"),
            workspace_id: str_field(value, "workspaceId"),
        }
    }
}

entity!(App, "app");

impl App {
    /// Last publish time, keeping the offset the service reported
    pub fn last_updated_at(&self) -> Option<DateTime<FixedOffset>> {
        self.last_update
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_app_from_raw() {
        let app = App::from_raw(&json!({
            "id": "3d9b93c6-7b6d-4801-a491-1738910904fd",
            "description": "The marketing app",
            "name": "Marketing",
            "publishedBy": "Ben",
            "lastUpdate": "2018-11-13T09:46:53.094+02:00"
        }));

        assert_eq!(app.name.as_deref(), Some("Marketing"));
        assert_eq!(app.published_by.as_deref(), Some("Ben"));
        assert_eq!(app.workspace_id, None);

        let updated = app.last_updated_at().unwrap();
        assert_eq!(updated.offset().local_minus_utc(), 2 * 3600);
    }
}
