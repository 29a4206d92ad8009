//! `storefront-auth` — access gating for admin-only storefront pages.
//!
//! The session itself comes from an external identity provider; this crate
//! only turns "who is signed in" into a typed view state at the page boundary.
//! It is intentionally decoupled from routing and rendering.

pub mod access;
pub mod authorize;
pub mod permissions;
pub mod roles;
pub mod session;

pub use access::{require_permission, require_session, AccessView, Grant};
pub use authorize::{authorize, AuthzError};
pub use permissions::Permission;
pub use roles::{Role, RolePolicy};
pub use session::{Session, SessionProvider, StaticSessionProvider};
