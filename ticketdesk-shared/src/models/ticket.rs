use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

use super::Timestamp;
use super::lenient::{null_as_default, optional_timestamp};

/// Workflow state of a ticket.
///
/// The API sends snake case values (`in_progress`), but older records and
/// hand-edited rows use labels such as `In Progress` or `OPEN`, so incoming
/// values are matched with [`TicketStatus::parse_loose`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Canonical wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    /// Match a status as received from the server, ignoring case, surrounding
    /// whitespace and the space/underscore/hyphen spelling of `in progress`.
    ///
    /// Used for badges, filters and the edit form. Counting uses
    /// [`TicketStatus::parse_canonical`].
    #[must_use]
    pub fn parse_loose(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

impl TicketStatus {
    /// Match the wire value after trimming and lowercasing only, so
    /// `In Progress` is not `in_progress`.
    #[must_use]
    pub fn parse_canonical(raw: &str) -> Option<Self> {
        raw.trim().to_lowercase().parse().ok()
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err("unknown ticket status"),
        }
    }
}

/// Ticket urgency. Values are compared exactly as the server spells them.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter,
)]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TicketPriority {
    /// Wire value, which doubles as the display label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            _ => Err("unknown ticket priority"),
        }
    }
}

/// A support ticket as returned by `GET /tickets`.
///
/// `status` and `priority` are kept verbatim; use [`Ticket::status_kind`] and
/// [`Ticket::priority_kind`] for typed comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: String,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub assigned_to_id: Option<i64>,
    #[serde(default)]
    pub assigned_to_name: Option<String>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub created_at: Option<Timestamp>,
}

impl Ticket {
    #[must_use]
    pub fn status_kind(&self) -> Option<TicketStatus> {
        TicketStatus::parse_loose(&self.status)
    }

    /// Status as counted by the dashboard summaries.
    #[must_use]
    pub fn counted_status(&self) -> Option<TicketStatus> {
        TicketStatus::parse_canonical(&self.status)
    }

    #[must_use]
    pub fn priority_kind(&self) -> Option<TicketPriority> {
        self.priority.parse().ok()
    }

    /// Reporter display name, empty when the API did not resolve one.
    #[must_use]
    pub fn reporter_name(&self) -> &str {
        self.created_by_name.as_deref().unwrap_or_default()
    }

    /// Assignee display name with the `Unassigned` fallback used in tables.
    #[must_use]
    pub fn assignee_label(&self) -> &str {
        match self.assigned_to_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "Unassigned",
        }
    }
}

/// Body of `POST /tickets`. The API binds this payload with Pascal case keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTicketRequest {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub created_by: Option<i64>,
    pub assigned_to: Option<i64>,
    #[serde(rename = "CategoryID")]
    pub category_id: Option<i64>,
}

/// A file reference attached to a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub uploaded_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn ticket_reads_camel_case_payload() {
        let ticket: Ticket = serde_json::from_value(json!({
            "id": 42,
            "title": "Printer on fire",
            "description": "Third floor",
            "status": "in_progress",
            "priority": "High",
            "createdBy": 7,
            "createdByName": "Dana Scully",
            "assignedToId": 3,
            "assignedToName": "Fox Mulder",
            "createdAt": "2025-01-15T10:30:00"
        }))
        .unwrap();

        assert_eq!(ticket.id, 42);
        assert_eq!(ticket.status_kind(), Some(TicketStatus::InProgress));
        assert_eq!(ticket.priority_kind(), Some(TicketPriority::High));
        assert_eq!(ticket.reporter_name(), "Dana Scully");
        assert_eq!(ticket.assignee_label(), "Fox Mulder");
        assert!(ticket.created_at.is_some());
    }

    #[test]
    fn sparse_ticket_uses_defaults() {
        let ticket: Ticket = serde_json::from_value(json!({ "id": 1 })).unwrap();

        assert_eq!(ticket.reporter_name(), "");
        assert_eq!(ticket.assignee_label(), "Unassigned");
        assert_eq!(ticket.status_kind(), None);
        assert!(ticket.created_at.is_none());
    }

    #[test]
    fn null_fields_do_not_reject_the_list() {
        let tickets: Vec<Ticket> = serde_json::from_value(json!([
            { "id": 1, "title": "Ok", "status": "open", "priority": "Low" },
            { "id": 2, "title": "No status", "status": null, "priority": "High" },
            { "id": 3, "title": null, "status": "resolved", "priority": null }
        ]))
        .unwrap();

        assert_eq!(tickets.len(), 3);
        assert_eq!(tickets[1].status, "");
        assert_eq!(tickets[1].status_kind(), None);
        assert_eq!(tickets[2].title, "");
        assert_eq!(tickets[2].priority_kind(), None);
        assert_eq!(tickets[2].status_kind(), Some(TicketStatus::Resolved));
    }

    #[test]
    fn unreadable_created_at_is_dropped() {
        let tickets: Vec<Ticket> = serde_json::from_value(json!([
            { "id": 1, "createdAt": "sometime last week" },
            { "id": 2, "createdAt": "2025-01-15 10:30:00" },
            { "id": 3, "createdAt": null }
        ]))
        .unwrap();

        assert!(tickets[0].created_at.is_none());
        assert!(tickets[1].created_at.is_some());
        assert!(tickets[2].created_at.is_none());
    }

    #[test]
    fn status_parsing_tolerates_label_spellings() {
        for raw in ["in_progress", "In Progress", "IN_PROGRESS", " in-progress "] {
            assert_eq!(TicketStatus::parse_loose(raw), Some(TicketStatus::InProgress), "{raw}");
        }
        assert_eq!(TicketStatus::parse_loose("Open"), Some(TicketStatus::Open));
        assert_eq!(TicketStatus::parse_loose("pending"), None);
        assert_eq!(TicketStatus::parse_loose(""), None);
    }

    #[test]
    fn canonical_parsing_only_ignores_case_and_padding() {
        assert_eq!(TicketStatus::parse_canonical(" IN_PROGRESS "), Some(TicketStatus::InProgress));
        assert_eq!(TicketStatus::parse_canonical("Resolved"), Some(TicketStatus::Resolved));
        assert_eq!(TicketStatus::parse_canonical("In Progress"), None);
        assert_eq!(TicketStatus::parse_canonical("in-progress"), None);
    }

    #[test]
    fn strict_status_parsing_matches_wire_values() {
        for status in TicketStatus::iter() {
            assert_eq!(status.as_str().parse::<TicketStatus>(), Ok(status));
            assert_eq!(status.to_string(), status.as_str());
        }
        assert!("Open".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn priority_is_case_sensitive() {
        assert_eq!("High".parse::<TicketPriority>(), Ok(TicketPriority::High));
        assert!("high".parse::<TicketPriority>().is_err());
        assert_eq!(TicketPriority::default(), TicketPriority::Medium);
    }

    #[test]
    fn create_request_uses_pascal_case_keys() {
        let request = CreateTicketRequest {
            title: "VPN down".to_string(),
            description: String::new(),
            priority: TicketPriority::Low,
            created_by: Some(12),
            assigned_to: None,
            category_id: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "Title": "VPN down",
                "Description": "",
                "Priority": "Low",
                "CreatedBy": 12,
                "AssignedTo": null,
                "CategoryID": null
            })
        );
    }

    #[test]
    fn attachment_omits_unset_fields() {
        let attachment = Attachment {
            id: None,
            ticket_id: None,
            file_name: "trace.log".to_string(),
            file_url: Some("https://files.example.com/trace.log".to_string()),
            uploaded_at: None,
        };

        let value = serde_json::to_value(&attachment).unwrap();
        assert_eq!(
            value,
            json!({ "fileName": "trace.log", "fileUrl": "https://files.example.com/trace.log" })
        );
    }
}
