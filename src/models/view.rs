//! View models for the Zendesk Support API.
//!
//! A view is a saved ticket filter: a set of ALL/ANY conditions plus the
//! grouping and sorting used to display the matching tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// A saved ticket view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct View {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether the view is shown to agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Who may use the view; `None` means everyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction: Option<ViewRestriction>,

    /// Position in the agent's view list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution: Option<ViewExecution>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<ViewConditions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl View {
    /// Returns the title or a placeholder.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(Untitled view)")
    }

    /// Returns true unless the server marked the view inactive.
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}

/// Restricts a view to a group or a single user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRestriction {
    /// "Group" or "User".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub restriction_type: Option<String>,

    /// Id of the group or user.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
}

/// How matching tickets are grouped, sorted and displayed.
///
/// `columns`, `group` and `sort` are rendered by the server and are never
/// sent back on create or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewExecution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_order: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing)]
    pub columns: Vec<ViewColumn>,

    #[serde(default, skip_serializing)]
    pub group: Option<ViewOrdering>,

    #[serde(default, skip_serializing)]
    pub sort: Option<ViewOrdering>,
}

/// A displayed column. Custom field columns use the numeric field id,
/// system columns a string such as `"subject"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewColumn {
    #[serde(default)]
    pub id: serde_json::Value,

    #[serde(default)]
    pub title: Option<String>,
}

/// The rendered group or sort column of a view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewOrdering {
    #[serde(default)]
    pub id: serde_json::Value,

    #[serde(default)]
    pub title: Option<String>,

    /// "asc" or "desc".
    #[serde(default)]
    pub order: Option<String>,
}

/// The filter of a view: tickets must match every `all` condition and at
/// least one `any` condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConditions {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub all: Vec<ViewCondition>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub any: Vec<ViewCondition>,
}

impl ViewConditions {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a condition every ticket must match.
    pub fn all(mut self, condition: ViewCondition) -> Self {
        self.all.push(condition);
        self
    }

    /// Adds a condition of which at least one must match.
    pub fn any(mut self, condition: ViewCondition) -> Self {
        self.any.push(condition);
        self
    }
}

/// A single field/operator/value predicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewCondition {
    /// Ticket field, e.g. "status", "group_id", "custom_fields_123".
    pub field: String,

    /// "is", "is_not", "less_than", "greater_than", "includes", ...
    pub operator: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl ViewCondition {
    /// Creates a condition.
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: Some(value.into()),
        }
    }

    /// Creates an "is" condition for exact matching.
    pub fn is(field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::new(field, "is", value)
    }

    /// Creates a "less_than" condition, used for status ordering.
    pub fn less_than(field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::new(field, "less_than", value)
    }
}

/// Ticket count of a view at the time of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_id: i64,

    #[serde(default)]
    pub url: Option<String>,

    /// Number of tickets; `None` while the server is still computing it.
    #[serde(default)]
    pub value: Option<i64>,

    /// Human readable count, e.g. "~700".
    #[serde(default)]
    pub pretty: Option<String>,

    /// False when the count is cached and being refreshed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fresh: bool,
}
