pub mod auth;
pub mod errors;
pub mod lenient;
pub mod session;
pub mod ticket;
pub mod timestamp;
pub mod user;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, TokenEnvelope};
pub use errors::ErrorResponse;
pub use session::{ClaimsError, Session};
pub use ticket::{Attachment, CreateTicketRequest, Ticket, TicketPriority, TicketStatus};
pub use timestamp::Timestamp;
pub use user::{User, UserRole};
