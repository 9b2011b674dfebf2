//! Transport layer (UDP sample ingestion).

pub mod udp;
