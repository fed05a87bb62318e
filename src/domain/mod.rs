//! Domain layer - pure types and rules, no I/O.

pub mod foundation;
pub mod session;
pub mod subscription;
