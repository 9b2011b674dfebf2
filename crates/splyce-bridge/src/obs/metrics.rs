//! Labelled counters backed by `DashMap` + atomics.
//!
//! Labels are flattened into sorted key vectors so the same label set always
//! maps to one series regardless of argument order.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value of one series (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();
        self.map
            .get(&key)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let mut series: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        series.sort();

        for (label_str, val) in series {
            if label_str.is_empty() {
                let _ = writeln!(out, "{} {}", name, val);
            } else {
                let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
            }
        }
    }
}

/// Outcome label values for `lines`.
pub const OUTCOME_ACCEPTED: &str = "accepted";
pub const OUTCOME_REJECTED: &str = "rejected";
pub const OUTCOME_IGNORED: &str = "ignored";

#[derive(Default)]
pub struct BridgeMetrics {
    pub datagrams: CounterVec,
    pub lines: CounterVec,
    pub recv_errors: CounterVec,
    pub histogram_resets: CounterVec,
}

impl BridgeMetrics {
    /// Unlabelled series start at 0 so they render before the first event.
    pub fn new() -> Self {
        let m = Self::default();
        m.datagrams.add(&[], 0);
        m.recv_errors.add(&[], 0);
        m.histogram_resets.add(&[], 0);
        m
    }

    pub fn record_line(&self, outcome: &str) {
        self.lines.inc(&[("outcome", outcome)]);
    }

    /// Append all bridge metrics to `out`.
    pub fn render(&self, out: &mut String) {
        self.datagrams.render("splyce_bridge_datagrams_total", out);
        self.lines.render("splyce_bridge_lines_total", out);
        self.recv_errors.render("splyce_bridge_recv_errors_total", out);
        self.histogram_resets
            .render("splyce_bridge_histogram_resets_total", out);
    }
}
