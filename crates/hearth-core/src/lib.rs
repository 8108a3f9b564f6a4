pub mod config;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod session;

// Re-export common error type
pub use error::{HearthError, Result};
pub use fetch::FetchState;
