//! In-memory aggregate state: counters, gauges, and raw timer observations.
//!
//! One mutex guards all three maps as a unit so a snapshot never mixes state
//! from different points in time. Every operation holds the lock only for a
//! single map update or clone; encoding runs on the returned `Snapshot`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use splyce_core::protocol::{MetricKind, Sample, DEFAULT_SAMPLE_RATE};

#[derive(Debug, Default)]
struct Aggregates {
    counters: HashMap<String, f64>,
    gauges: HashMap<String, f64>,
    histograms: HashMap<String, Vec<f64>>,
}

/// Point-in-time copy of the store, detached from the lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub counters: HashMap<String, f64>,
    pub gauges: HashMap<String, f64>,
    /// Only keys with at least one observation in the current window.
    pub histograms: HashMap<String, Vec<f64>>,
}

#[derive(Debug, Default)]
pub struct AggregateStore {
    inner: Mutex<Aggregates>,
}

impl AggregateStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Aggregates> {
        // Each mutation is a single map operation, so a poisoned guard still
        // holds consistent state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fold one sample into the aggregates.
    ///
    /// Returns `false` when the sample's kind is not aggregated (unknown tag).
    pub fn apply(&self, sample: Sample) -> bool {
        let Sample {
            key,
            kind,
            value,
            sample_rate,
        } = sample;

        match kind {
            MetricKind::Counter => {
                let rate = if sample_rate > 0.0 {
                    sample_rate
                } else {
                    DEFAULT_SAMPLE_RATE
                };
                *self.lock().counters.entry(key).or_insert(0.0) += value / rate;
            }
            MetricKind::Gauge => {
                self.lock().gauges.insert(key, value);
            }
            MetricKind::Timer => {
                self.lock().histograms.entry(key).or_default().push(value);
            }
            MetricKind::Unknown => return false,
        }
        true
    }

    /// Drop every histogram key at once. Counters and gauges are untouched.
    pub fn reset_histograms(&self) {
        self.lock().histograms = HashMap::new();
    }

    pub fn snapshot(&self) -> Snapshot {
        let guard = self.lock();
        Snapshot {
            counters: guard.counters.clone(),
            gauges: guard.gauges.clone(),
            histograms: guard
                .histograms
                .iter()
                .filter(|(_, obs)| !obs.is_empty())
                .map(|(k, obs)| (k.clone(), obs.clone()))
                .collect(),
        }
    }
}
