//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: session domain model (`Session`, `UserAccount`,
//!   `SessionInfo`) and the `SessionSnapshot` stream value
//! - `accessor`: the `SessionAccessor` trait implemented by the remote
//!   auth client

mod accessor;
mod model;

// Re-export public API
pub use accessor::SessionAccessor;
pub use model::{Session, SessionInfo, SessionSnapshot, UserAccount};
