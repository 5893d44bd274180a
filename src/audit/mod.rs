//! Audit trail of expense, budget and theme changes
//!
//! Every committed change is appended to a JSONL file as one [`AuditEntry`]
//! per line. The trail can be listed with `depenses audit`.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditAction, AuditEntry};
pub use logger::AuditLogger;
