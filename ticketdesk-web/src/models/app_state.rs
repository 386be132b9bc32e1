use shared::models::{Session, UserRole};
use yewdux::Store;

/// Application-wide state shared through yewdux.
///
/// `tickets_revision` is bumped whenever a view changes tickets on the
/// server; list views watch it and refetch.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Option<Session>,
    /// Set once the persisted session has been looked at on start-up.
    pub restored: bool,
    pub tickets_revision: u64,
}

impl AppState {
    pub fn role(&self) -> Option<UserRole> {
        self.session.as_ref().and_then(Session::user_role)
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.restored = true;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
    }

    pub fn publish_ticket_change(&mut self) {
        self.tickets_revision = self.tickets_revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: &str) -> Session {
        Session {
            token: "t".to_string(),
            role: role.to_string(),
            user_id: "1".to_string(),
            user_name: String::new(),
            user_email: String::new(),
        }
    }

    #[test]
    fn unknown_roles_read_as_signed_out() {
        let mut state = AppState::default();
        assert_eq!(state.role(), None);

        state.sign_in(session("Auditor"));
        assert_eq!(state.role(), None);

        state.sign_in(session("admin"));
        assert_eq!(state.role(), None);

        state.sign_in(session("Client"));
        assert_eq!(state.role(), Some(UserRole::Client));

        state.sign_out();
        assert_eq!(state.role(), None);
        assert!(state.restored);
    }

    #[test]
    fn ticket_changes_bump_the_revision() {
        let mut state = AppState::default();
        state.publish_ticket_change();
        state.publish_ticket_change();
        assert_eq!(state.tickets_revision, 2);
    }
}
