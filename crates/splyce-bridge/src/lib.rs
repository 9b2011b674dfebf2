//! splyce bridge library entry.
//!
//! Wires the UDP ingest transport, the aggregate store, the exposition
//! encoder, and the periodic reset task into one process. It is consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod aggregate;
pub mod app_state;
pub mod config;
pub mod exposition;
pub mod flush;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
pub mod transport;
