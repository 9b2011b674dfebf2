//! Sample line protocol.
//!
//! Senders emit newline-delimited lines of the form
//! `key:value|type[|@sample_rate]` packed into datagrams:
//! - `sample`: one line -> one validated `Sample`
//! - `datagram`: one payload -> its lines, parsed independently
//!
//! All parsers are panic-free: a malformed line is reported as
//! `SplyceError::BadSample` and never affects its neighbours.

pub mod datagram;
pub mod sample;

pub use datagram::{lines, parse_datagram};
pub use sample::{parse_line, MetricKind, Sample, DEFAULT_SAMPLE_RATE};
