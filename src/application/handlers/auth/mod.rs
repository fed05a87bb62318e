//! Auth application handlers.

mod logout;
mod validate_session;

pub use logout::{LogoutCommand, LogoutHandler, LogoutResult};
pub use validate_session::ValidateSessionHandler;
