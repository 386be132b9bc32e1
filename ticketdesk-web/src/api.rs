use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::models::{
    Attachment, CreateTicketRequest, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, Ticket, TicketStatus, User,
};

use crate::config::FrontendConfig;
use crate::error::AppError;

thread_local! {
    static SHARED_CLIENT: OnceCell<TicketDeskClient> = OnceCell::new();
}

/// Operations the views need from the ticket REST service.
///
/// Each call is one request and one response. Nothing is retried or cached;
/// callers decide what to do with a failure.
#[async_trait(?Send)]
pub trait TicketGateway {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, AppError>;
    async fn list_user_tickets(&self, user_id: &str) -> Result<Vec<Ticket>, AppError>;
    async fn get_ticket(&self, id: i64) -> Result<Ticket, AppError>;
    async fn create_ticket(&self, request: &CreateTicketRequest) -> Result<Ticket, AppError>;
    /// `assigned_to` is only sent when present; `Some(0)` is a real id.
    async fn update_ticket_status(
        &self,
        id: i64,
        status: TicketStatus,
        assigned_to: Option<i64>,
    ) -> Result<Ticket, AppError>;
    async fn delete_tickets(&self, ids: &[i64]) -> Result<(), AppError>;
    async fn add_attachment(
        &self,
        ticket_id: i64,
        attachment: &Attachment,
    ) -> Result<Attachment, AppError>;
    async fn list_attachments(&self, ticket_id: i64) -> Result<Vec<Attachment>, AppError>;
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn get_user(&self, id: i64) -> Result<User, AppError>;
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, AppError>;
}

/// Lightweight API client for the TicketDesk REST service.
#[derive(Clone, Debug)]
pub struct TicketDeskClient {
    base_url: String,
    client: Client,
}

impl TicketDeskClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The per-thread client configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn list_tickets_request(&self) -> RequestBuilder {
        self.client.get(self.api_url("tickets"))
    }

    pub(crate) fn list_user_tickets_request(&self, user_id: &str) -> RequestBuilder {
        self.client
            .get(self.api_url(&format!("tickets/user/{}", user_id.trim())))
    }

    pub(crate) fn get_ticket_request(&self, id: i64) -> RequestBuilder {
        self.client.get(self.api_url(&format!("tickets/{id}")))
    }

    pub(crate) fn create_ticket_request(&self, request: &CreateTicketRequest) -> RequestBuilder {
        self.client.post(self.api_url("tickets")).json(request)
    }

    pub(crate) fn update_status_request(
        &self,
        id: i64,
        status: TicketStatus,
        assigned_to: Option<i64>,
    ) -> RequestBuilder {
        let mut request = self
            .client
            .put(self.api_url(&format!("tickets/{id}/status")))
            .query(&[("status", status.as_str())]);
        if let Some(assignee) = assigned_to {
            request = request.query(&[("assignedTo", assignee)]);
        }
        request
    }

    pub(crate) fn delete_tickets_request(&self, ids: &[i64]) -> RequestBuilder {
        self.client.delete(self.api_url("tickets")).json(ids)
    }

    pub(crate) fn add_attachment_request(
        &self,
        ticket_id: i64,
        attachment: &Attachment,
    ) -> RequestBuilder {
        self.client
            .post(self.api_url(&format!("tickets/{ticket_id}/attachments")))
            .json(attachment)
    }

    pub(crate) fn list_attachments_request(&self, ticket_id: i64) -> RequestBuilder {
        self.client
            .get(self.api_url(&format!("tickets/{ticket_id}/attachments")))
    }

    pub(crate) fn list_users_request(&self) -> RequestBuilder {
        self.client.get(self.api_url("users"))
    }

    pub(crate) fn get_user_request(&self, id: i64) -> RequestBuilder {
        self.client.get(self.api_url(&format!("users/{id}")))
    }

    pub(crate) fn login_request(&self, request: &LoginRequest) -> RequestBuilder {
        self.client.post(self.api_url("auth/login")).json(request)
    }

    pub(crate) fn register_request(&self, request: &RegisterRequest) -> RequestBuilder {
        self.client.post(self.api_url("auth/register")).json(request)
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> Result<String, AppError> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        log::debug!("{method} {url}");

        let response = self.client.execute(request).await.map_err(|err| {
            log::warn!("{method} {url} failed: {err}");
            AppError::from(err)
        })?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("{method} {url} returned {status}");
            return Err(AppError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let body = self.send(request).await?;
        decode_body(&body)
    }
}

/// Parse a response body, mapping malformed JSON to [`AppError::Parse`].
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|err| {
        log::error!("could not decode response body: {err}");
        AppError::from(err)
    })
}

#[async_trait(?Send)]
impl TicketGateway for TicketDeskClient {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, AppError> {
        self.execute(self.list_tickets_request()).await
    }

    async fn list_user_tickets(&self, user_id: &str) -> Result<Vec<Ticket>, AppError> {
        self.execute(self.list_user_tickets_request(user_id)).await
    }

    async fn get_ticket(&self, id: i64) -> Result<Ticket, AppError> {
        self.execute(self.get_ticket_request(id)).await
    }

    async fn create_ticket(&self, request: &CreateTicketRequest) -> Result<Ticket, AppError> {
        self.execute(self.create_ticket_request(request)).await
    }

    async fn update_ticket_status(
        &self,
        id: i64,
        status: TicketStatus,
        assigned_to: Option<i64>,
    ) -> Result<Ticket, AppError> {
        self.execute(self.update_status_request(id, status, assigned_to))
            .await
    }

    async fn delete_tickets(&self, ids: &[i64]) -> Result<(), AppError> {
        self.send(self.delete_tickets_request(ids)).await.map(|_| ())
    }

    async fn add_attachment(
        &self,
        ticket_id: i64,
        attachment: &Attachment,
    ) -> Result<Attachment, AppError> {
        self.execute(self.add_attachment_request(ticket_id, attachment))
            .await
    }

    async fn list_attachments(&self, ticket_id: i64) -> Result<Vec<Attachment>, AppError> {
        self.execute(self.list_attachments_request(ticket_id)).await
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.execute(self.list_users_request()).await
    }

    async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.execute(self.get_user_request(id)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.execute(self.login_request(request)).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
        self.execute(self.register_request(request)).await
    }
}
