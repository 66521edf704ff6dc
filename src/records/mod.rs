// Record operations
//
// A record is one claim line inside a batch + run generation. This module
// covers:
// - Creating records (batch reference validated at insert)
// - Per-generation queries and progress counters
// - Single-record status updates
// - The compare-and-swap run transition workers race on

mod claim;
mod create;
mod lifecycle;
mod query;


// Re-export public API
pub use claim::claim_records;
pub use create::create_record;
pub use lifecycle::update_record_status;
pub use query::{
    count_records_by_status, get_record, get_records_by_batch_and_run,
    get_records_by_batch_and_run_recent_first,
};
