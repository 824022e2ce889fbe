//! Common types shared across Zendesk API models.
//!
//! This module defines the pagination types used by every list endpoint,
//! on both the request side (`PageOptions`) and the response side (`Page`).

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes an explicit JSON `null` the same way as a missing key.
///
/// Pair with `#[serde(default)]`; on its own `default` only covers the
/// missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Offset pagination parameters for list operations.
///
/// Unset fields are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageOptions {
    /// Number of records per page (Zendesk caps this at 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// One-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl PageOptions {
    /// Creates empty page options (server defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of records per page.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Pagination metadata returned next to every list of resources.
///
/// Zendesk puts these keys at the top level of the response, beside the
/// plural resource key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Absolute URL of the previous page, if any.
    #[serde(default)]
    pub previous_page: Option<String>,

    /// Absolute URL of the next page, if any.
    #[serde(default)]
    pub next_page: Option<String>,

    /// Total number of records across all pages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i64,
}

impl Page {
    /// Returns true if the server advertised a following page.
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Returns true if the server advertised a preceding page.
    pub fn has_previous(&self) -> bool {
        self.previous_page.is_some()
    }
}
