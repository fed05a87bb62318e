//! Session domain types.
//!
//! Sessions and refresh tokens are created at login (outside this service's
//! scope) and destroyed in bulk on logout. The session store owns both; no
//! other component mutates them.

mod session;

pub use session::{AuthSession, InvalidatedCredentials};
