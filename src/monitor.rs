use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

use crate::data::{Deltas, Metrics, Observation};
use crate::error::{MonitorError, MonitorResult};

/// Today's observations, ordered by time ascending.
#[async_trait]
pub trait RateSource {
    async fn fetch_today(&self) -> MonitorResult<Vec<Observation>>;
}

/// Human-facing view of one refresh cycle. No return value is consumed.
pub trait Presenter {
    fn render(
        &mut self,
        rows: &[Observation],
        latest: &Metrics,
        deltas: &Deltas,
    ) -> MonitorResult<()>;
}

pub struct Monitor<S: RateSource, P: Presenter> {
    pub source: S,
    pub presenter: P,
    snapshot: Metrics,
    interval: Duration,
}

impl<S: RateSource, P: Presenter> Monitor<S, P> {
    pub fn new(source: S, presenter: P, interval: Duration) -> Self {
        Self {
            source,
            presenter,
            snapshot: Metrics::default(),
            interval,
        }
    }

    /// One fetch -> extract -> delta -> render cycle.
    ///
    /// The snapshot is only overwritten once every step has succeeded, so after
    /// a failed cycle the next delta is still computed against the last values
    /// that actually reached the screen.
    pub async fn tick(&mut self) -> MonitorResult<()> {
        let rows = self.source.fetch_today().await?;

        let latest = rows.last().ok_or_else(|| {
            MonitorError::Fetch("no observations recorded for today yet".to_string())
        })?;

        let latest = Metrics::from_observation(latest);
        let deltas = latest.deltas_since(&self.snapshot);

        self.presenter.render(&rows, &latest, &deltas)?;

        self.snapshot = latest;
        Ok(())
    }

    /// Poll forever on the fixed cadence. A failed cycle is logged and skipped;
    /// the monitor never exits on a fetch or render error. Best-effort display,
    /// not a system of record.
    pub async fn run(&mut self) -> MonitorResult<()> {
        info!(
            "Starting refresh loop with a {}s interval",
            self.interval.as_secs()
        );

        loop {
            if let Err(e) = self.tick().await {
                error!("Refresh cycle failed, retrying next interval: {}", e);
            }

            tokio::time::sleep(self.interval).await;
        }
    }
}
