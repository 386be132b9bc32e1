pub(crate) mod bar_chart;
pub(crate) mod create_ticket_modal;
pub(crate) mod delete_modal;
pub(crate) mod loading;
pub(crate) mod logout_button;
pub(crate) mod pagination;
pub(crate) mod sidebar;
pub(crate) mod stat_card;
pub(crate) mod ticket_editor_modal;
pub(crate) mod ticket_table;
pub(crate) mod toast;

// Re-export components for convenience
pub use bar_chart::{Bar, BarChart};
pub use create_ticket_modal::CreateTicketModal;
pub use delete_modal::DeleteModal;
pub use loading::Loading;
pub use logout_button::LogoutButton;
pub use pagination::Pagination;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use ticket_editor_modal::TicketEditorModal;
pub use ticket_table::TicketTable;
pub use toast::Toast;
