//! Page-boundary capability check.
//!
//! Pages call one of the `require_*` functions once and get back an
//! [`AccessView`]; rendering then matches on it exactly once.

use serde::Serialize;

use crate::{authorize, AuthzError, Permission, RolePolicy, Session, SessionProvider};

/// Typed outcome of an access check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "access", content = "view", rename_all = "snake_case")]
pub enum AccessView<T> {
    Unauthenticated,
    Unauthorized { missing: Permission },
    Authorized(T),
}

impl<T> AccessView<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AccessView<U> {
        match self {
            AccessView::Unauthenticated => AccessView::Unauthenticated,
            AccessView::Unauthorized { missing } => AccessView::Unauthorized { missing },
            AccessView::Authorized(view) => AccessView::Authorized(f(view)),
        }
    }

    pub fn authorized(&self) -> Option<&T> {
        match self {
            AccessView::Authorized(view) => Some(view),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<T, AuthzError> {
        match self {
            AccessView::Unauthenticated => Err(AuthzError::Unauthenticated),
            AccessView::Unauthorized { missing } => {
                Err(AuthzError::Forbidden(missing.as_str().to_string()))
            }
            AccessView::Authorized(view) => Ok(view),
        }
    }
}

/// The signed-in session plus its effective permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub session: Session,
    pub permissions: Vec<Permission>,
}

impl Grant {
    pub fn can(&self, permission: &Permission) -> bool {
        authorize(&self.permissions, permission).is_ok()
    }
}

/// Any signed-in user.
pub fn require_session<P, T>(
    provider: &P,
    policy: &RolePolicy,
    build: impl FnOnce(&Grant) -> T,
) -> AccessView<T>
where
    P: SessionProvider + ?Sized,
{
    match provider.current_session() {
        None => AccessView::Unauthenticated,
        Some(session) => {
            let permissions = policy.effective(&session.roles);
            let grant = Grant {
                session,
                permissions,
            };
            AccessView::Authorized(build(&grant))
        }
    }
}

/// A signed-in user holding `required`.
pub fn require_permission<P, T>(
    provider: &P,
    policy: &RolePolicy,
    required: &Permission,
    build: impl FnOnce(&Grant) -> T,
) -> AccessView<T>
where
    P: SessionProvider + ?Sized,
{
    let Some(session) = provider.current_session() else {
        return AccessView::Unauthenticated;
    };

    let permissions = policy.effective(&session.roles);
    if let Err(err) = authorize(&permissions, required) {
        tracing::info!(user = %session.user_id, %err, "access denied");
        return AccessView::Unauthorized {
            missing: required.clone(),
        };
    }

    let grant = Grant {
        session,
        permissions,
    };
    AccessView::Authorized(build(&grant))
}
