mod client;
mod dashboard;
mod error;
mod forbidden;
pub mod login;
mod register;
mod tickets;

pub use client::ClientPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use forbidden::ForbiddenPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use tickets::TicketsPage;
