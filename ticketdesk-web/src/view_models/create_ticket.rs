//! Form state for raising a new ticket.

use shared::models::{CreateTicketRequest, Ticket, TicketPriority};

use crate::api::TicketGateway;
use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTicketForm {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
}

impl CreateTicketForm {
    /// # Errors
    /// [`AppError::Validation`] when the title is blank.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("title required"));
        }
        Ok(())
    }

    /// The request body for `POST /tickets`. New tickets are unassigned and
    /// uncategorised; the title is sent as typed.
    pub fn to_request(&self, created_by: Option<i64>) -> Result<CreateTicketRequest, AppError> {
        self.validate()?;
        Ok(CreateTicketRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            created_by,
            assigned_to: None,
            category_id: None,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validate and submit `form`.
///
/// On success the form is reset and `publish` runs. Validation failures send
/// nothing; any failure leaves the entered values in place.
pub async fn submit_ticket<G, P>(
    gateway: &G,
    form: &mut CreateTicketForm,
    created_by: Option<i64>,
    publish: P,
) -> Result<Ticket, AppError>
where
    G: TicketGateway + ?Sized,
    P: FnOnce(),
{
    let request = form.to_request(created_by)?;
    let created = gateway.create_ticket(&request).await.inspect_err(|err| {
        log::warn!("failed to create ticket: {err}");
    })?;

    log::info!("created ticket {}", created.id);
    form.reset();
    publish();
    Ok(created)
}
