//! Periodic histogram window reset.
//!
//! Runs on its own timer, independent of scrapes: every `period` the whole
//! histogram map is dropped. Counters and gauges live for the process.

use tokio::time::{self, Duration, Instant, MissedTickBehavior};

use crate::app_state::AppState;

pub async fn run_reset_loop(app: AppState, period: Duration) {
    // first reset one full period after start, not immediately
    let mut tick = time::interval_at(Instant::now() + period, period);
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tick.tick().await;
        app.store().reset_histograms();
        app.metrics().histogram_resets.inc(&[]);
        tracing::debug!(period_secs = period.as_secs(), "histogram window reset");
    }
}
