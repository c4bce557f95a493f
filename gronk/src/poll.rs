use std::time::Duration;

use gronk_data::Snapshot;
use tokio::{
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, instrument};

use crate::fetch::{FetchError, SnapshotSource};

/// Fetches snapshots on an interval and hands them over one at a time.
///
/// The handoff slot is reserved *before* fetching, so with a capacity-1 channel a new fetch only
/// starts once the renderer has taken the previous snapshot. A slow renderer slows polling down.
pub struct Poller<S> {
    source: S,
    interval: Duration,
    fixed_rate: bool,
}

impl<S: SnapshotSource> Poller<S> {
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            source,
            interval,
            fixed_rate: false,
        }
    }

    /// Start fetches on a fixed tick instead of sleeping `interval` after each one.
    pub fn fixed_rate(mut self, fixed_rate: bool) -> Self {
        self.fixed_rate = fixed_rate;
        self
    }

    /// Runs until a fetch fails (returned as is, nothing is sent) or the receiving side is gone.
    #[instrument(skip_all, fields(interval = ?self.interval, fixed_rate = self.fixed_rate))]
    pub async fn run(self, handoff: mpsc::Sender<Snapshot>) -> Result<(), FetchError> {
        info!("poller started");
        let mut ticker = self.fixed_rate.then(|| {
            let mut ticker = time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });

        loop {
            if let Some(ticker) = ticker.as_mut() {
                ticker.tick().await;
            }
            let Ok(slot) = handoff.reserve().await else {
                info!("renderer gone, stopping poller");
                return Ok(());
            };
            let snapshot = self.source.fetch().await?;
            debug!(updated = snapshot.updated, "handing over snapshot");
            slot.send(snapshot);

            if ticker.is_none() {
                time::sleep(self.interval).await;
            }
        }
    }
}
