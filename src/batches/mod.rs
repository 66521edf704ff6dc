// Batch operations
//
// A batch is one ingested claim file. This module covers:
// - Creating batches
// - Point and status-filtered queries for dispatchers
// - Status / run-number transitions

mod create;
mod lifecycle;
mod query;

#[cfg(test)]
mod tests;

// Re-export public API
pub use create::create_batch;
pub use lifecycle::{update_batch_status, update_batch_status_and_run_number};
pub use query::{
    count_batches_by_status, get_batch, get_batches_by_status, get_batches_by_status_oldest_first,
};
