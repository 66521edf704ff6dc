pub mod batches;
pub mod config;
pub mod db;
pub mod error;
pub mod init;
pub mod records;
pub mod responses;
pub mod services;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export main types
pub use error::StoreError;
pub use types::*;

// Re-export init API for convenience
pub use init::{initialize, InitBuilder, InitOptions};
