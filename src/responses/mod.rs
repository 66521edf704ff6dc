// Response operations
//
// A response is one validation result for a record. This module covers:
// - Creating responses (batch and record references validated at insert)
// - Point and per-generation queries
// - The pending-identifier discovery feed dispatchers poll
// - Single-row and set-based status transitions

mod claim;
mod create;
mod lifecycle;
mod query;


// Re-export public API
pub use claim::{claim_responses, get_pending_response_identifiers};
pub use create::create_response;
pub use lifecycle::{update_response_status, update_run_status};
pub use query::{get_response, get_responses_by_batch_and_run};
