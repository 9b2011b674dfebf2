//! Bridge self-metrics.
//!
//! Counts what the ingest and flush tasks did (datagrams, accepted/rejected
//! lines, resets) without logging per line. Rendered after the aggregates on
//! the `/metrics` handler.

pub mod metrics;
