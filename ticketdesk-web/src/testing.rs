//! In-memory [`TicketGateway`] and token helpers for unit tests.

use std::cell::RefCell;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use shared::models::{
    Attachment, CreateTicketRequest, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, Ticket, TicketStatus, User,
};

use crate::api::TicketGateway;
use crate::error::AppError;

/// Build an unsigned token whose claims segment is `claims`.
pub(crate) fn token_with(claims: serde_json::Value) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}

pub(crate) fn ticket(id: i64, status: &str, priority: &str, reporter: &str) -> Ticket {
    Ticket {
        id,
        title: format!("Ticket {id}"),
        description: None,
        status: status.to_string(),
        priority: priority.to_string(),
        created_by: Some(100 + id),
        created_by_name: Some(reporter.to_string()),
        assigned_to_id: None,
        assigned_to_name: None,
        created_at: None,
    }
}

pub(crate) fn user(id: i64, name: &str, role: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: None,
        role: role.to_string(),
    }
}

fn not_found(what: &str) -> AppError {
    AppError::Http {
        status: 404,
        body: format!(r#"{{"error":"{what} not found"}}"#),
    }
}

/// Gateway double backed by vectors. Every call is recorded; when a failure
/// is set, every call returns it.
#[derive(Default)]
pub(crate) struct FakeGateway {
    tickets: RefCell<Vec<Ticket>>,
    users: RefCell<Vec<User>>,
    attachments: RefCell<Vec<Attachment>>,
    login_response: RefCell<Option<LoginResponse>>,
    register_response: RefCell<RegisterResponse>,
    failure: RefCell<Option<AppError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeGateway {
    pub(crate) fn with_tickets(tickets: Vec<Ticket>) -> Self {
        let gateway = Self::default();
        *gateway.tickets.borrow_mut() = tickets;
        gateway
    }

    pub(crate) fn set_users(&self, users: Vec<User>) {
        *self.users.borrow_mut() = users;
    }

    pub(crate) fn set_login_response(&self, response: LoginResponse) {
        *self.login_response.borrow_mut() = Some(response);
    }

    pub(crate) fn set_register_response(&self, response: RegisterResponse) {
        *self.register_response.borrow_mut() = response;
    }

    pub(crate) fn fail_with(&self, error: AppError) {
        *self.failure.borrow_mut() = Some(error);
    }

    pub(crate) fn recover(&self) {
        self.failure.borrow_mut().take();
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn tickets(&self) -> Vec<Ticket> {
        self.tickets.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), AppError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow().as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TicketGateway for FakeGateway {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, AppError> {
        self.record("list_tickets".to_string())?;
        Ok(self.tickets())
    }

    async fn list_user_tickets(&self, user_id: &str) -> Result<Vec<Ticket>, AppError> {
        self.record(format!("list_user_tickets {user_id}"))?;
        let owner = user_id.parse::<i64>().ok();
        Ok(self
            .tickets
            .borrow()
            .iter()
            .filter(|ticket| ticket.created_by.is_some() && ticket.created_by == owner)
            .cloned()
            .collect())
    }

    async fn get_ticket(&self, id: i64) -> Result<Ticket, AppError> {
        self.record(format!("get_ticket {id}"))?;
        self.tickets
            .borrow()
            .iter()
            .find(|ticket| ticket.id == id)
            .cloned()
            .ok_or_else(|| not_found("ticket"))
    }

    async fn create_ticket(&self, request: &CreateTicketRequest) -> Result<Ticket, AppError> {
        self.record(format!("create_ticket {}", request.title))?;
        let mut tickets = self.tickets.borrow_mut();
        let id = tickets.iter().map(|ticket| ticket.id).max().unwrap_or(0) + 1;
        let created = Ticket {
            id,
            title: request.title.clone(),
            description: Some(request.description.clone()),
            status: TicketStatus::Open.as_str().to_string(),
            priority: request.priority.as_str().to_string(),
            created_by: request.created_by,
            created_by_name: None,
            assigned_to_id: request.assigned_to,
            assigned_to_name: None,
            created_at: None,
        };
        tickets.push(created.clone());
        Ok(created)
    }

    async fn update_ticket_status(
        &self,
        id: i64,
        status: TicketStatus,
        assigned_to: Option<i64>,
    ) -> Result<Ticket, AppError> {
        self.record(format!("update_ticket_status {id} {status} {assigned_to:?}"))?;
        let mut tickets = self.tickets.borrow_mut();
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or_else(|| not_found("ticket"))?;
        ticket.status = status.as_str().to_string();
        ticket.assigned_to_id = assigned_to;
        Ok(ticket.clone())
    }

    async fn delete_tickets(&self, ids: &[i64]) -> Result<(), AppError> {
        self.record(format!("delete_tickets {ids:?}"))?;
        self.tickets
            .borrow_mut()
            .retain(|ticket| !ids.contains(&ticket.id));
        Ok(())
    }

    async fn add_attachment(
        &self,
        ticket_id: i64,
        attachment: &Attachment,
    ) -> Result<Attachment, AppError> {
        self.record(format!("add_attachment {ticket_id} {}", attachment.file_name))?;
        let mut attachments = self.attachments.borrow_mut();
        let stored = Attachment {
            id: Some(i64::try_from(attachments.len()).unwrap_or(i64::MAX) + 1),
            ticket_id: Some(ticket_id),
            ..attachment.clone()
        };
        attachments.push(stored.clone());
        Ok(stored)
    }

    async fn list_attachments(&self, ticket_id: i64) -> Result<Vec<Attachment>, AppError> {
        self.record(format!("list_attachments {ticket_id}"))?;
        Ok(self
            .attachments
            .borrow()
            .iter()
            .filter(|attachment| attachment.ticket_id == Some(ticket_id))
            .cloned()
            .collect())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.record("list_users".to_string())?;
        Ok(self.users.borrow().clone())
    }

    async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.record(format!("get_user {id}"))?;
        self.users
            .borrow()
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| not_found("user"))
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.record(format!("login {}", request.email))?;
        self.login_response.borrow().clone().ok_or(AppError::Http {
            status: 401,
            body: r#"{"error":"Invalid credentials"}"#.to_string(),
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
        self.record(format!("register {}", request.email))?;
        Ok(self.register_response.borrow().clone())
    }
}
