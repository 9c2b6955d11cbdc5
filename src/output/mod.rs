//! Output module for persisting the catalog and reporting a run
//!
//! This module handles:
//! - Loading the previously written catalog snapshot
//! - Writing the new catalog only when it differs from that snapshot
//! - Collecting and printing per-storefront run statistics

mod snapshot;
pub mod stats;
mod writer;

pub use snapshot::load_previous;
pub use stats::{print_statistics, RunStatistics, SourceStatistics};
pub use writer::{render_catalog, write_if_changed, WriteOutcome};
