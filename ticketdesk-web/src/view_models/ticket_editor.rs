//! Edit buffer behind the ticket detail modal.

use shared::models::{Attachment, Ticket, TicketStatus, User};

use super::Notice;
use crate::api::TicketGateway;
use crate::error::AppError;

/// Users that can be picked as assignee.
pub fn support_roster(users: &[User]) -> Vec<User> {
    users.iter().filter(|user| user.is_support()).cloned().collect()
}

/// The assignee to preselect for `ticket`.
///
/// An explicit assignee id wins. Otherwise the assignee name is matched
/// against the roster, trimmed and case-insensitive, first match wins.
pub fn resolve_assignee(ticket: &Ticket, roster: &[User]) -> Option<i64> {
    if let Some(id) = ticket.assigned_to_id {
        return Some(id);
    }
    let wanted = ticket.assigned_to_name.as_deref()?.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    roster
        .iter()
        .find(|user| user.name.trim().to_lowercase() == wanted)
        .map(|user| user.id)
}

/// Mutable fields of a ticket while the modal is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketEditBuffer {
    pub ticket_id: i64,
    pub status: TicketStatus,
    pub assignee: Option<i64>,
}

impl TicketEditBuffer {
    pub fn open(ticket: &Ticket, roster: &[User]) -> Self {
        Self {
            ticket_id: ticket.id,
            status: ticket.status_kind().unwrap_or(TicketStatus::Open),
            assignee: resolve_assignee(ticket, roster),
        }
    }

    /// Fill in the assignee once the roster arrives, unless one is chosen.
    pub fn roster_loaded(&mut self, ticket: &Ticket, roster: &[User]) {
        if self.assignee.is_none() {
            self.assignee = resolve_assignee(ticket, roster);
        }
    }

    /// Apply a select value: empty means unassigned.
    pub fn set_assignee_value(&mut self, raw: &str) {
        self.assignee = raw.trim().parse().ok();
    }

    pub fn set_status_value(&mut self, raw: &str) {
        if let Ok(status) = raw.parse() {
            self.status = status;
        }
    }
}

/// Fetch the assignee roster. A failure leaves the picker with only
/// "Unassigned".
pub async fn load_roster<G>(gateway: &G) -> Vec<User>
where
    G: TicketGateway + ?Sized,
{
    match gateway.list_users().await {
        Ok(users) => support_roster(&users),
        Err(err) => {
            log::warn!("failed to fetch users: {err}");
            Vec::new()
        }
    }
}

/// Read-only context shown next to the edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDetails {
    pub attachments: Vec<Attachment>,
    pub reporter: Option<User>,
}

pub async fn load_details<G>(gateway: &G, ticket: &Ticket) -> TicketDetails
where
    G: TicketGateway + ?Sized,
{
    let attachments = gateway
        .list_attachments(ticket.id)
        .await
        .inspect_err(|err| log::warn!("failed to fetch attachments for #{}: {err}", ticket.id))
        .unwrap_or_default();
    let reporter = match ticket.created_by {
        Some(id) => gateway
            .get_user(id)
            .await
            .inspect_err(|err| log::warn!("failed to fetch reporter {id}: {err}"))
            .ok(),
        None => None,
    };
    TicketDetails {
        attachments,
        reporter,
    }
}

/// Attach a file reference to a ticket.
pub async fn attach_file<G>(
    gateway: &G,
    ticket_id: i64,
    file_name: &str,
    file_url: &str,
) -> Result<Attachment, AppError>
where
    G: TicketGateway + ?Sized,
{
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Err(AppError::validation("file name required"));
    }
    let file_url = Some(file_url.trim())
        .filter(|url| !url.is_empty())
        .map(str::to_string);
    let attachment = Attachment {
        id: None,
        ticket_id: Some(ticket_id),
        file_name: file_name.to_string(),
        file_url,
        uploaded_at: None,
    };
    gateway.add_attachment(ticket_id, &attachment).await
}

/// Submit the buffer. `publish` runs only after the server accepted the
/// change; on failure the buffer is left untouched for a retry.
pub async fn save_ticket<G, P>(
    gateway: &G,
    buffer: &TicketEditBuffer,
    publish: P,
) -> Result<Notice, Notice>
where
    G: TicketGateway + ?Sized,
    P: FnOnce(),
{
    match gateway
        .update_ticket_status(buffer.ticket_id, buffer.status, buffer.assignee)
        .await
    {
        Ok(_) => {
            log::info!("updated ticket {}", buffer.ticket_id);
            publish();
            Ok(Notice::success("Ticket updated successfully"))
        }
        Err(err) => {
            log::warn!("failed to update ticket {}: {err}", buffer.ticket_id);
            Err(Notice::error("Failed to update ticket"))
        }
    }
}
