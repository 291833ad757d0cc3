//! The authentication/authorization boundary: credential checks, signed
//! session tokens, and the path policy enforced in front of every route.

pub mod authenticator;
pub mod gate;
pub mod policy;
pub mod session;

pub use authenticator::Authenticator;
pub use policy::{evaluate, Decision};
pub use session::SessionManager;
