//! UDP ingest loop.
//!
//! One task owns the socket: receive a datagram, split it into lines, parse
//! and apply each line independently. Bad lines are counted, never logged,
//! and never answered (the protocol has no reply channel).

use bytes::BytesMut;
use tokio::net::UdpSocket;

use splyce_core::protocol::parse_datagram;

use crate::app_state::AppState;
use crate::obs::metrics::{OUTCOME_ACCEPTED, OUTCOME_IGNORED, OUTCOME_REJECTED};

/// Largest possible UDP payload; nothing is truncated.
pub const MAX_DATAGRAM_BYTES: usize = 65_535;

/// Per-datagram line tally.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    pub accepted: usize,
    pub rejected: usize,
    pub ignored: usize,
}

/// Parse and apply one datagram payload.
pub fn ingest_datagram(app: &AppState, payload: &[u8]) -> IngestReport {
    let mut report = IngestReport::default();
    app.metrics().datagrams.inc(&[]);

    for parsed in parse_datagram(payload) {
        let outcome = match parsed {
            Ok(sample) => {
                if app.store().apply(sample) {
                    report.accepted += 1;
                    OUTCOME_ACCEPTED
                } else {
                    report.ignored += 1;
                    OUTCOME_IGNORED
                }
            }
            Err(_) => {
                report.rejected += 1;
                OUTCOME_REJECTED
            }
        };
        app.metrics().record_line(outcome);
    }
    report
}

/// Receive forever. Only returns if the task is dropped.
pub async fn run_ingest(socket: UdpSocket, app: AppState) {
    let mut buf = BytesMut::with_capacity(MAX_DATAGRAM_BYTES);
    loop {
        buf.clear();
        match socket.recv_buf_from(&mut buf).await {
            Ok((_, _peer)) => {
                ingest_datagram(&app, &buf);
            }
            Err(e) => {
                app.metrics().recv_errors.inc(&[]);
                tracing::debug!(error = %e, "udp recv failed");
            }
        }
    }
}
