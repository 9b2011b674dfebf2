//! Prometheus text exposition of an aggregate `Snapshot`.
//!
//! Families are emitted counters first, then gauges, then timers, each sorted
//! by metric name. Timers become cumulative histograms over `BUCKETS`, closed
//! by a `+Inf` bucket, `_count`, and `_sum`.

use std::collections::HashSet;
use std::fmt::Write;

use crate::aggregate::Snapshot;

/// Leading component of every aggregate metric name.
pub const METRIC_PREFIX: &str = "splyce";

/// Inclusive upper bounds of the finite histogram buckets, ascending.
pub const BUCKETS: [f64; 7] = [50.0, 100.0, 250.0, 500.0, 1000.0, 2000.0, 5000.0];

/// `.` separates hierarchy on the wire but is not legal in metric names.
///
/// No other character is rewritten; keys are expected to be metric-name safe
/// apart from their dots.
pub fn sanitize(key: &str) -> String {
    key.replace('.', "_")
}

/// Bucketed view of one timer window.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSummary {
    /// `cumulative[i]` = observations `<= BUCKETS[i]`.
    pub cumulative: [u64; BUCKETS.len()],
    pub count: u64,
    pub sum: f64,
}

impl HistogramSummary {
    pub fn from_observations(observations: &[f64]) -> Self {
        let mut sorted = observations.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mut cumulative = [0u64; BUCKETS.len()];
        for (slot, le) in cumulative.iter_mut().zip(BUCKETS) {
            *slot = sorted.partition_point(|v| *v <= le) as u64;
        }

        Self {
            cumulative,
            count: sorted.len() as u64,
            sum: sorted.iter().sum(),
        }
    }
}

/// Encode a snapshot. Every call renders from scratch.
pub fn encode(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let mut typed = HashSet::new();

    for (name, v) in named(snapshot.counters.iter(), "counter") {
        type_line(&mut out, &mut typed, &name, "counter");
        let _ = writeln!(out, "{name} {v}");
    }

    for (name, v) in named(snapshot.gauges.iter(), "gauge") {
        type_line(&mut out, &mut typed, &name, "gauge");
        let _ = writeln!(out, "{name} {v}");
    }

    for (name, observations) in named(snapshot.histograms.iter(), "timer") {
        if observations.is_empty() {
            continue;
        }
        let hist = HistogramSummary::from_observations(observations);

        type_line(&mut out, &mut typed, &name, "histogram");
        for (le, n) in BUCKETS.iter().zip(hist.cumulative) {
            let _ = writeln!(out, "{name}_bucket{{le=\"{le}\"}} {n}");
        }
        let _ = writeln!(out, "{name}_bucket{{le=\"+Inf\"}} {}", hist.count);
        let _ = writeln!(out, "{name}_count {}", hist.count);
        let _ = writeln!(out, "{name}_sum {}", hist.sum);
    }

    out
}

/// Full metric names for one family, sorted.
fn named<'a, V>(
    entries: impl Iterator<Item = (&'a String, &'a V)>,
    family: &str,
) -> Vec<(String, &'a V)> {
    let mut out: Vec<(String, &V)> = entries
        .map(|(k, v)| (format!("{METRIC_PREFIX}_{family}_{}", sanitize(k)), v))
        .collect();
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}

// Keys that collide after sanitizing share one TYPE line.
fn type_line(out: &mut String, typed: &mut HashSet<String>, name: &str, kind: &str) {
    if typed.insert(name.to_string()) {
        let _ = writeln!(out, "# TYPE {name} {kind}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_timer(key: &str, obs: &[f64]) -> Snapshot {
        let mut snap = Snapshot::default();
        snap.histograms.insert(key.to_string(), obs.to_vec());
        snap
    }

    #[test]
    fn sanitize_replaces_every_dot() {
        assert_eq!(sanitize("app.requests.count"), "app_requests_count");
        assert_eq!(sanitize("plain"), "plain");
        assert_eq!(sanitize("..x."), "__x_");
    }

    #[test]
    fn only_dots_are_rewritten() {
        assert_eq!(sanitize("a b"), "a b");
        assert_eq!(sanitize("a-b{c}"), "a-b{c}");

        let mut snap = Snapshot::default();
        snap.counters.insert("a b".into(), 1.0);
        assert_eq!(
            encode(&snap),
            "# TYPE splyce_counter_a b counter\nsplyce_counter_a b 1\n"
        );
    }

    #[test]
    fn histogram_buckets_are_cumulative() {
        let hist = HistogramSummary::from_observations(&[9999.0, 60.0, 5000.0, 10.0]);
        assert_eq!(hist.cumulative, [1, 2, 2, 2, 2, 2, 3]);
        assert_eq!(hist.count, 4);
        assert_eq!(hist.sum, 15069.0);
        assert!(hist.cumulative.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn bucket_bounds_are_inclusive() {
        let hist = HistogramSummary::from_observations(&[50.0, 100.0, 5000.0]);
        assert_eq!(hist.cumulative, [1, 2, 2, 2, 2, 2, 3]);
    }

    #[test]
    fn encodes_histogram_lines() {
        let out = encode(&snapshot_with_timer("api.latency", &[10.0, 60.0, 5000.0, 9999.0]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "# TYPE splyce_timer_api_latency histogram",
                "splyce_timer_api_latency_bucket{le=\"50\"} 1",
                "splyce_timer_api_latency_bucket{le=\"100\"} 2",
                "splyce_timer_api_latency_bucket{le=\"250\"} 2",
                "splyce_timer_api_latency_bucket{le=\"500\"} 2",
                "splyce_timer_api_latency_bucket{le=\"1000\"} 2",
                "splyce_timer_api_latency_bucket{le=\"2000\"} 2",
                "splyce_timer_api_latency_bucket{le=\"5000\"} 3",
                "splyce_timer_api_latency_bucket{le=\"+Inf\"} 4",
                "splyce_timer_api_latency_count 4",
                "splyce_timer_api_latency_sum 15069",
            ]
        );
    }

    #[test]
    fn empty_histograms_are_omitted() {
        let out = encode(&snapshot_with_timer("idle", &[]));
        assert!(out.is_empty());
    }

    #[test]
    fn counters_and_gauges_render_plain_decimals() {
        let mut snap = Snapshot::default();
        snap.counters.insert("b.hits".into(), 2.5);
        snap.counters.insert("a.hits".into(), 1e21);
        snap.gauges.insert("temp".into(), -0.125);

        let out = encode(&snap);
        assert_eq!(
            out,
            "# TYPE splyce_counter_a_hits counter\n\
             splyce_counter_a_hits 1000000000000000000000\n\
             # TYPE splyce_counter_b_hits counter\n\
             splyce_counter_b_hits 2.5\n\
             # TYPE splyce_gauge_temp gauge\n\
             splyce_gauge_temp -0.125\n"
        );
    }

    #[test]
    fn colliding_keys_share_one_type_line() {
        let mut snap = Snapshot::default();
        snap.counters.insert("a.b".into(), 1.0);
        snap.counters.insert("a_b".into(), 2.0);

        let out = encode(&snap);
        assert_eq!(out.matches("# TYPE splyce_counter_a_b counter").count(), 1);
        assert_eq!(out.lines().count(), 3);
    }
}
