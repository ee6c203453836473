//! Diagnostic side channel for retrieval runs
//!
//! The orchestrator and record parser report progress to a [`ProgressObserver`].
//! Observers only watch; nothing they do changes the results of a run.

use crate::records::OutputRecord;
use tracing::debug;

/// Receives progress notices from a retrieval run
pub trait ProgressObserver: Send {
    /// A run is starting for `query`
    fn query_started(&mut self, _query: &str) {}

    /// ESearch returned `count` identifiers
    fn ids_found(&mut self, _count: usize) {}

    /// A paper passed the company-author filter
    fn record_accepted(&mut self, _record: &OutputRecord) {}

    /// The run finished with `count` papers
    fn finished(&mut self, _count: usize) {}
}

/// Discards every notice
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}

/// Forwards notices to `tracing` at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn query_started(&mut self, query: &str) {
        debug!(query = %query, "Starting PubMed fetch");
    }

    fn ids_found(&mut self, count: usize) {
        debug!(count, "Found papers");
    }

    fn record_accepted(&mut self, record: &OutputRecord) {
        debug!(pmid = %record.pmid, title = %record.title, "Added paper");
    }

    fn finished(&mut self, count: usize) {
        debug!(count, "Total papers after filtering");
    }
}
