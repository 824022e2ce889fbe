//! Ticket models for the Zendesk Support API.
//!
//! A single `Ticket` type is used for reads and writes. Every field is
//! optional on the wire and unset fields are left out when serializing,
//! so a `Ticket` built with `..Default::default()` only sends what the
//! caller filled in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::null_as_default;
use super::{CustomField, PageOptions};

/// A Zendesk support ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Server-assigned ticket id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// API URL of the ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Id of the ticket in an external system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// "problem", "incident", "question" or "task".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Subject before any dynamic content placeholders were rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_subject: Option<String>,

    /// First comment on the ticket (read-only, use `comment` to write).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// "urgent", "high", "normal" or "low".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// "new", "open", "pending", "hold", "solved" or "closed".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Original recipient address of an email ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub collaborator_ids: Vec<i64>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub follower_ids: Vec<i64>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub email_cc_ids: Vec<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forum_topic_id: Option<i64>,

    /// For incidents, the problem ticket they are linked to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_incidents: Option<bool>,

    /// Due date of a task ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,

    /// How the ticket was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<Via>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction_rating: Option<SatisfactionRating>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub sharing_agreement_ids: Vec<i64>,

    /// Closed tickets that were followed up by this one.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub followup_ids: Vec<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_followup_source_id: Option<i64>,

    /// Macros to apply on create or update (write-only).
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub macro_ids: Vec<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_form_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_channelback: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_attachments: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// CCs to add on create (write-only).
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub collaborators: Vec<Collaborator>,

    /// Comment to add on create or update (write-only, required on create).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<TicketComment>,

    /// SLA policy state, present when `slas` is sideloaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slas: Option<Slas>,

    /// Metric event history, present when `metric_events` is sideloaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_events: Option<MetricEvents>,
}

impl Ticket {
    /// Returns the subject or a placeholder.
    pub fn display_subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("(No subject)")
    }

    /// Returns the status or "unknown".
    pub fn display_status(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }

    /// Looks up a custom field by its definition id.
    pub fn custom_field(&self, id: i64) -> Option<&CustomField> {
        self.custom_fields.iter().find(|field| field.id == id)
    }
}

/// The channel a ticket came in through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Via {
    /// "web", "email", "api", "chat", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Channel-specific origin details, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,
}

/// Customer satisfaction rating attached to a solved ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisfactionRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// "offered", "unoffered", "good" or "bad".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A CC entry on ticket creation.
///
/// Zendesk accepts a user id, a bare email address, or a name/email pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Collaborator {
    /// An existing user id.
    Id(i64),
    /// An email address; unknown addresses become new users.
    Email(String),
    /// A new or existing user, matched on email.
    Named {
        /// Display name for a newly created user.
        name: String,
        /// Email address.
        email: String,
    },
}

/// A comment to add to a ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketComment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// "Comment" or "VoiceComment".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub comment_type: Option<String>,

    /// Plain text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// HTML body; takes precedence over `body` when both are sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,

    /// False for internal notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    /// Upload tokens of attachments to associate with the comment.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub uploads: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TicketComment {
    /// Creates a plain-text comment; Zendesk makes it public unless marked private.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Default::default()
        }
    }

    /// Marks the comment as an internal note.
    pub fn private(mut self) -> Self {
        self.public = Some(false);
        self
    }
}

/// SLA state of a ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slas {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub policy_metrics: Vec<SlaPolicyMetric>,
}

/// One active SLA target on a ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaPolicyMetric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breach_at: Option<DateTime<Utc>>,

    /// "active", "paused" or "achieved".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    /// e.g. "first_reply_time", "next_reply_time".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,
}

/// Metric event history grouped by metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricEvents {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub periodic_update_time: Vec<MetricEvent>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub requester_wait_time: Vec<MetricEvent>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub resolution_time: Vec<MetricEvent>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub pausable_update_time: Vec<MetricEvent>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub agent_work_time: Vec<MetricEvent>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub reply_time: Vec<MetricEvent>,
}

/// A single metric event. `status` and `sla` only appear on some event
/// types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<i64>,

    /// "activate", "pause", "fulfill", "apply_sla", "breach", "update_status", ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MetricStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla: Option<MetricSla>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

/// Elapsed minutes of a metric in calendar and business hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub calendar: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub business: i64,
}

/// The SLA target applied by an `apply_sla` event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSla {
    /// Target in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<SlaPolicy>,
}

/// Reference to the SLA policy an event came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters for listing tickets and for the incremental export.
///
/// Use the builder methods to construct the query. Unset fields never
/// reach the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketListOptions {
    /// Offset pagination.
    #[serde(flatten)]
    pub page: PageOptions,

    /// "assignee", "assignee.name", "created_at", "group", "id", "locale",
    /// "requester", "requester.name", "status", "subject" or "updated_at".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// "asc" or "desc".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    /// UNIX timestamp an incremental export starts from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,

    /// Cursor of the next incremental export page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    /// Comma separated sideloads, sent as `include`.
    #[serde(rename = "include", skip_serializing_if = "Option::is_none")]
    pub sideload: Option<String>,
}

impl TicketListOptions {
    /// Creates empty options (server defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of tickets per page.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.page.per_page = Some(per_page);
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page.page = Some(page);
        self
    }

    /// Sets the sort field.
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Sets the sort order ("asc" or "desc").
    pub fn with_sort_order(mut self, sort_order: impl Into<String>) -> Self {
        self.sort_order = Some(sort_order.into());
        self
    }

    /// Sets the UNIX timestamp an incremental export starts from.
    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets the incremental export cursor.
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Sets the sideloads to include.
    pub fn with_sideload(mut self, sideload: impl Into<String>) -> Self {
        self.sideload = Some(sideload.into());
        self
    }
}

/// One page of the incremental ticket export.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IncrementalTickets {
    /// Tickets changed since the requested start time or cursor.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tickets: Vec<Ticket>,

    /// URL of the following page.
    #[serde(default)]
    pub after_url: Option<String>,

    /// Cursor of the following page (cursor-based exports only).
    #[serde(default)]
    pub after_cursor: Option<String>,

    /// True once the export has caught up; `after_url` then stops advancing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_of_stream: bool,
}

impl IncrementalTickets {
    /// Builds the options for the page after this one.
    ///
    /// Returns `None` at the end of the stream, or when the server sent
    /// no cursor (time-based exports should follow `after_url` instead).
    pub fn next_options(&self, current: &TicketListOptions) -> Option<TicketListOptions> {
        if self.end_of_stream {
            return None;
        }
        let cursor = self.after_cursor.as_ref()?;
        let mut next = current.clone();
        next.start_time = None;
        next.cursor = Some(cursor.clone());
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomFieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ticket_deserialize_full() {
        let json = r#"{
            "id": 35436,
            "url": "https://acme.zendesk.com/api/v2/tickets/35436.json",
            "type": "incident",
            "subject": "Help, my printer is on fire!",
            "priority": "high",
            "status": "open",
            "requester_id": 20978392,
            "assignee_id": 235323,
            "group_id": 98738,
            "collaborator_ids": [35334, 234],
            "tags": ["enterprise", "other_tag"],
            "via": {"channel": "web", "source": {"from": {}, "to": {}, "rel": null}},
            "satisfaction_rating": {"id": 1234, "score": "good", "comment": "Great support!"},
            "custom_fields": [
                {"id": 27642, "value": "745"},
                {"id": 27648, "value": "yes"},
                {"id": 27650, "value": ["a", "b"]},
                {"id": 27651, "value": null}
            ],
            "created_at": "2009-07-20T22:55:29Z",
            "slas": {"policy_metrics": [
                {"breach_at": "2024-01-01T10:00:00Z", "stage": "active", "metric": "first_reply_time", "hours": 2, "minutes": 0}
            ]},
            "metric_events": {
                "reply_time": [{
                    "id": 1, "ticket_id": 35436, "metric": "reply_time", "instance_id": 1,
                    "type": "apply_sla", "time": "2024-01-01T08:00:00Z",
                    "sla": {"target": 120, "business_hours": false, "policy": {"id": 9, "title": "Gold", "description": null}}
                }],
                "agent_work_time": [{
                    "id": 2, "ticket_id": 35436, "metric": "agent_work_time", "instance_id": 1,
                    "type": "update_status", "time": "2024-01-01T09:00:00Z",
                    "status": {"calendar": 60, "business": 30}
                }]
            }
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, Some(35436));
        assert_eq!(ticket.ticket_type.as_deref(), Some("incident"));
        assert_eq!(ticket.display_subject(), "Help, my printer is on fire!");
        assert_eq!(ticket.collaborator_ids, vec![35334, 234]);
        assert_eq!(ticket.via.as_ref().unwrap().channel.as_deref(), Some("web"));
        assert_eq!(
            ticket.satisfaction_rating.as_ref().unwrap().score.as_deref(),
            Some("good")
        );
        assert_eq!(ticket.custom_fields.len(), 4);
        assert_eq!(
            ticket.custom_field(27650).unwrap().value,
            CustomFieldValue::StringList(vec!["a".to_string(), "b".to_string()])
        );
        assert!(ticket.custom_field(27651).unwrap().value.is_absent());

        let metric = &ticket.slas.as_ref().unwrap().policy_metrics[0];
        assert_eq!(metric.hours, Some(2));

        let events = ticket.metric_events.as_ref().unwrap();
        let policy = events.reply_time[0].sla.as_ref().unwrap().policy.as_ref().unwrap();
        assert_eq!(policy.title.as_deref(), Some("Gold"));
        assert_eq!(
            events.agent_work_time[0].status,
            Some(MetricStatus {
                calendar: 60,
                business: 30
            })
        );
    }

    #[test]
    fn test_ticket_rejects_bad_custom_field() {
        let json = r#"{"id": 1, "custom_fields": [{"id": 2, "value": 7}]}"#;
        let err = serde_json::from_str::<Ticket>(json).unwrap_err();
        assert!(err.to_string().contains("number is an invalid type"));
    }

    #[test]
    fn test_null_satisfaction_rating() {
        let ticket: Ticket =
            serde_json::from_str(r#"{"id": 1, "satisfaction_rating": null}"#).unwrap();
        assert_eq!(ticket.satisfaction_rating, None);
    }

    #[test]
    fn test_null_collections_decode_as_empty() {
        let json = r#"{
            "id": 1,
            "tags": null,
            "custom_fields": null,
            "collaborator_ids": null,
            "collaborators": null,
            "metric_events": {"reply_time": null, "agent_work_time": [
                {"id": 9, "type": "update_status", "status": {"calendar": null, "business": 3}}
            ]}
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();

        assert!(ticket.tags.is_empty());
        assert!(ticket.custom_fields.is_empty());
        assert!(ticket.collaborator_ids.is_empty());
        assert!(ticket.collaborators.is_empty());

        let events = ticket.metric_events.unwrap();
        assert!(events.reply_time.is_empty());
        assert_eq!(
            events.agent_work_time[0].status,
            Some(MetricStatus {
                calendar: 0,
                business: 3
            })
        );
    }

    #[test]
    fn test_incremental_page_with_null_tickets() {
        let page: IncrementalTickets =
            serde_json::from_str(r#"{"tickets": null, "end_of_stream": null}"#).unwrap();
        assert!(page.tickets.is_empty());
        assert!(!page.end_of_stream);
    }

    #[test]
    fn test_ticket_serialize_omits_unset() {
        let ticket = Ticket {
            subject: Some("My printer is on fire!".to_string()),
            comment: Some(TicketComment::new("The smoke is very colorful.")),
            collaborators: vec![
                Collaborator::Id(562),
                Collaborator::Email("someone@example.com".to_string()),
                Collaborator::Named {
                    name: "Someone Else".to_string(),
                    email: "else@example.com".to_string(),
                },
            ],
            ..Default::default()
        };

        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "subject": "My printer is on fire!",
                "comment": {"body": "The smoke is very colorful."},
                "collaborators": [
                    562,
                    "someone@example.com",
                    {"name": "Someone Else", "email": "else@example.com"}
                ]
            })
        );
    }

    #[test]
    fn test_private_comment() {
        let comment = TicketComment::new("internal").private();
        assert_eq!(comment.public, Some(false));
    }

    #[test]
    fn test_list_options_builder_and_serialize() {
        let opts = TicketListOptions::new()
            .with_per_page(50)
            .with_sort_by("created_at")
            .with_sort_order("desc");
        let value = serde_json::to_value(&opts).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"per_page": 50, "sort_by": "created_at", "sort_order": "desc"})
        );
    }

    #[test]
    fn test_sideload_serializes_as_include() {
        let value = serde_json::to_value(TicketListOptions::new().with_sideload("users")).unwrap();
        assert_eq!(value, serde_json::json!({"include": "users"}));
    }

    #[test]
    fn test_next_options_follows_cursor() {
        let page = IncrementalTickets {
            after_cursor: Some("MTU3NjYxMzUzOS4wfHw0Njd8".to_string()),
            ..Default::default()
        };
        let current = TicketListOptions::new().with_start_time(1332034771);
        let next = page.next_options(&current).unwrap();
        assert_eq!(next.start_time, None);
        assert_eq!(next.cursor.as_deref(), Some("MTU3NjYxMzUzOS4wfHw0Njd8"));
    }

    #[test]
    fn test_next_options_stops_at_end_of_stream() {
        let page = IncrementalTickets {
            after_cursor: Some("abc".to_string()),
            end_of_stream: true,
            ..Default::default()
        };
        assert_eq!(page.next_options(&TicketListOptions::new()), None);
    }
}
