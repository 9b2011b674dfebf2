//! Datagram -> lines.
//!
//! A datagram carries zero or more complete lines separated by `\n`. A line
//! never spans datagrams, so each payload is split and parsed on its own.

use crate::error::{Result, SplyceError};
use crate::protocol::sample::{parse_line, Sample};

/// Iterate the non-empty lines of a datagram payload (trailing `\r` stripped).
pub fn lines(payload: &[u8]) -> impl Iterator<Item = &[u8]> {
    payload
        .split(|b| *b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
}

/// Parse every line of a datagram independently.
///
/// Lines that are not valid UTF-8 are rejected like any other malformed line.
pub fn parse_datagram(payload: &[u8]) -> impl Iterator<Item = Result<Sample>> + '_ {
    lines(payload).map(|line| {
        std::str::from_utf8(line)
            .map_err(|_| SplyceError::BadSample("line is not valid utf-8".into()))
            .and_then(parse_line)
    })
}
