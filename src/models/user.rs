//! User models, as sideloaded next to tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Zendesk user (end user, agent or admin).
///
/// Only the fields needed to render ticket participants are captured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id.
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// "end-user", "agent" or "admin".
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub organization_id: Option<i64>,

    #[serde(default)]
    pub active: Option<bool>,

    #[serde(default)]
    pub suspended: Option<bool>,

    #[serde(default)]
    pub time_zone: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Returns the display name, falling back to email or id.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Returns true for agents and admins.
    pub fn is_staff(&self) -> bool {
        matches!(self.role.as_deref(), Some("agent") | Some("admin"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_display_name_fallbacks() {
        let user = User {
            id: 7,
            email: Some("jane@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "jane@example.com");

        let user = User {
            id: 7,
            ..Default::default()
        };
        assert_eq!(user.display_name(), "7");
    }

    #[test]
    fn test_user_deserialize() {
        let json = r#"{"id": 35436, "name": "Johnny Agent", "role": "agent", "active": true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "Johnny Agent");
        assert!(user.is_staff());
    }
}
