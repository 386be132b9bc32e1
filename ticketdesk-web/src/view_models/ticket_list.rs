//! Ticket table state: filters, pagination and optimistic deletes.

use std::rc::Rc;

use shared::models::{Ticket, TicketPriority, TicketStatus};
use yew::Reducible;

use super::Notice;
use crate::api::TicketGateway;
use crate::config::PAGE_SIZE;
use crate::error::AppError;

/// The three independent table filters. Empty means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilters {
    /// Case-insensitive substring of the reporter's name.
    pub reporter: String,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

impl TicketFilters {
    pub fn matches(&self, ticket: &Ticket) -> bool {
        let reporter = match ticket.created_by_name.as_deref() {
            Some(name) => name
                .to_lowercase()
                .contains(&self.reporter.to_lowercase()),
            None => self.reporter.is_empty(),
        };
        let status = self
            .status
            .is_none_or(|wanted| ticket.status_kind() == Some(wanted));
        let priority = self
            .priority
            .is_none_or(|wanted| ticket.priority == wanted.as_str());

        reporter && status && priority
    }
}

/// Tickets passing every filter, in their original order.
pub fn apply_filters(tickets: &[Ticket], filters: &TicketFilters) -> Vec<Ticket> {
    tickets
        .iter()
        .filter(|ticket| filters.matches(ticket))
        .cloned()
        .collect()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Keep `page` within `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The 1-based `page` of `items`. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// A ticket removed from the table whose server-side delete is in flight.
#[derive(Debug, Clone, PartialEq)]
struct PendingDelete {
    index: usize,
    ticket: Ticket,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TicketListAction {
    Reload,
    Loaded(Vec<Ticket>),
    Failed(String),
    SetReporter(String),
    SetStatus(Option<TicketStatus>),
    SetPriority(Option<TicketPriority>),
    GoToPage(usize),
    NextPage,
    PreviousPage,
    BeginDelete(i64),
    ConfirmDelete(i64),
    RollbackDelete(i64),
}

/// State of a ticket table.
///
/// The page is clamped whenever filters change or the list shrinks, so a
/// narrowing filter never leaves the table on an empty page.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketListModel {
    pub state: LoadState,
    tickets: Vec<Ticket>,
    filters: TicketFilters,
    page: usize,
    page_size: usize,
    pending_deletes: Vec<PendingDelete>,
}

impl Default for TicketListModel {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl TicketListModel {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: LoadState::Loading,
            tickets: Vec::new(),
            filters: TicketFilters::default(),
            page: 1,
            page_size: page_size.max(1),
            pending_deletes: Vec::new(),
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn filters(&self) -> &TicketFilters {
        &self.filters
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn filtered(&self) -> Vec<Ticket> {
        apply_filters(&self.tickets, &self.filters)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    /// Rows on the current page.
    pub fn visible(&self) -> Vec<Ticket> {
        paginate(&self.filtered(), self.page, self.page_size).to_vec()
    }

    pub fn has_pending_delete(&self, id: i64) -> bool {
        self.pending_deletes.iter().any(|pending| pending.ticket.id == id)
    }

    fn clamp(&mut self) {
        self.page = clamp_page(self.page, self.total_pages());
    }

    pub fn apply(&mut self, action: TicketListAction) {
        match action {
            TicketListAction::Reload => self.state = LoadState::Loading,
            TicketListAction::Loaded(tickets) => {
                // Deletes still in flight stay hidden after a refetch.
                self.tickets = tickets
                    .into_iter()
                    .filter(|ticket| !self.has_pending_delete(ticket.id))
                    .collect();
                self.state = LoadState::Ready;
                self.clamp();
            }
            TicketListAction::Failed(message) => self.state = LoadState::Failed(message),
            TicketListAction::SetReporter(reporter) => {
                self.filters.reporter = reporter;
                self.clamp();
            }
            TicketListAction::SetStatus(status) => {
                self.filters.status = status;
                self.clamp();
            }
            TicketListAction::SetPriority(priority) => {
                self.filters.priority = priority;
                self.clamp();
            }
            TicketListAction::GoToPage(page) => {
                self.page = clamp_page(page, self.total_pages());
            }
            TicketListAction::NextPage => {
                self.page = clamp_page(self.page + 1, self.total_pages());
            }
            TicketListAction::PreviousPage => {
                self.page = clamp_page(self.page.saturating_sub(1), self.total_pages());
            }
            TicketListAction::BeginDelete(id) => {
                if let Some(index) = self.tickets.iter().position(|ticket| ticket.id == id) {
                    let ticket = self.tickets.remove(index);
                    self.pending_deletes.push(PendingDelete { index, ticket });
                    self.clamp();
                }
            }
            TicketListAction::ConfirmDelete(id) => {
                self.pending_deletes.retain(|pending| pending.ticket.id != id);
            }
            TicketListAction::RollbackDelete(id) => {
                if let Some(position) = self
                    .pending_deletes
                    .iter()
                    .position(|pending| pending.ticket.id == id)
                {
                    let PendingDelete { index, ticket } = self.pending_deletes.remove(position);
                    let index = index.min(self.tickets.len());
                    self.tickets.insert(index, ticket);
                    self.clamp();
                }
            }
        }
    }
}

impl Reducible for TicketListModel {
    type Action = TicketListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Shown in place of a table whose tickets could not be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch tickets";

impl From<Result<Vec<Ticket>, AppError>> for TicketListAction {
    fn from(result: Result<Vec<Ticket>, AppError>) -> Self {
        match result {
            Ok(tickets) => Self::Loaded(tickets),
            Err(_) => Self::Failed(LOAD_FAILED_MESSAGE.to_string()),
        }
    }
}

/// Fetch tickets for a table. `owner` narrows the list to one reporter.
///
/// # Errors
/// Whatever the gateway reports; the failure is logged here.
pub async fn load_tickets<G>(gateway: &G, owner: Option<&str>) -> Result<Vec<Ticket>, AppError>
where
    G: TicketGateway + ?Sized,
{
    let result = match owner {
        Some(user_id) => gateway.list_user_tickets(user_id).await,
        None => gateway.list_tickets().await,
    };
    match &result {
        Ok(tickets) => log::debug!("loaded {} tickets", tickets.len()),
        Err(err) => log::warn!("failed to fetch tickets: {err}"),
    }
    result
}

/// Delete one ticket, removing it from the table before the server answers.
///
/// A failed request puts the ticket back where it was.
pub async fn delete_ticket<G, D>(gateway: &G, id: i64, dispatch: D) -> Notice
where
    G: TicketGateway + ?Sized,
    D: Fn(TicketListAction),
{
    dispatch(TicketListAction::BeginDelete(id));
    match gateway.delete_tickets(&[id]).await {
        Ok(()) => {
            log::info!("deleted ticket {id}");
            dispatch(TicketListAction::ConfirmDelete(id));
            Notice::success("Ticket deleted successfully")
        }
        Err(err) => {
            log::warn!("failed to delete ticket {id}: {err}");
            dispatch(TicketListAction::RollbackDelete(id));
            Notice::error("Failed to delete ticket")
        }
    }
}
