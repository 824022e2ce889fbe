//! Organization models, as sideloaded next to tickets.

use serde::{Deserialize, Serialize};

/// A customer organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique organization id.
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    /// Email domains whose users join the organization automatically.
    #[serde(default)]
    pub domain_names: Vec<String>,

    /// Group new tickets from this organization are routed to.
    #[serde(default)]
    pub group_id: Option<i64>,

    #[serde(default)]
    pub shared_tickets: Option<bool>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub details: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}
