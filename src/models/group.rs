//! Agent group models, as sideloaded next to tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A group of agents tickets can be assigned to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group id.
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Whether new tickets land in this group by default.
    #[serde(default)]
    pub default: Option<bool>,

    #[serde(default)]
    pub deleted: Option<bool>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
