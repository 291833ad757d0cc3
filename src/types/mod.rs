pub mod error;
pub mod response;
pub mod session;
pub mod user;
