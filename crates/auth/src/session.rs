use serde::{Deserialize, Serialize};

use crate::Role;

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub display_name: Option<String>,
    pub roles: Vec<Role>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: None,
            roles,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Name used in greetings; falls back to "User".
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("User")
    }
}

/// External authentication collaborator.
///
/// Implementations wrap whatever identity provider the host uses; the
/// storefront only asks for the current session.
pub trait SessionProvider {
    fn current_session(&self) -> Option<Session>;
}

/// Fixed session, used in dev mode (no provider configured) and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSessionProvider {
    session: Option<Session>,
}

impl StaticSessionProvider {
    pub fn signed_out() -> Self {
        Self { session: None }
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Dev-mode stand-in: an admin called "Dev User".
    pub fn dev_admin() -> Self {
        Self::signed_in(Session::new("dev", vec![Role::ADMIN]).with_display_name("Dev User"))
    }
}

impl SessionProvider for StaticSessionProvider {
    fn current_session(&self) -> Option<Session> {
        self.session.clone()
    }
}
