//! Sample producers and the tick loop that feeds them into [`FrameStats`].

pub mod channel;
pub mod replay;

pub use channel::{parse_sample, spawn_line_reader, ChannelSource};
pub use replay::ReplaySource;

use frametimes_config::SamplingConfig;
use frametimes_core::{FrameStats, FrameTimesError, Result, Sample, Summary};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;
use tracing::{error, info};

/// Anything that can hand the monitor one frame-time sample per tick.
pub trait SampleSource {
    /// The sample to record for the current tick, or `None` once the source
    /// is finished.  A source without fresh data repeats its last sample.
    fn latest(&mut self) -> Option<Sample>;
}

impl<S: SampleSource + ?Sized> SampleSource for Box<S> {
    fn latest(&mut self) -> Option<Sample> {
        (**self).latest()
    }
}

/// Spawn a background Tokio task that pulls one sample from `source` every
/// `settings.tick_ms` milliseconds and forwards each [`Summary`] the cadence
/// produces through the returned channel.
///
/// Invalid settings are reported here, before anything is spawned.  The task
/// stops when the source finishes or the receiver is dropped.
pub fn spawn_monitor<S>(settings: &SamplingConfig, mut source: S) -> Result<mpsc::Receiver<Summary>>
where
    S: SampleSource + Send + 'static,
{
    if settings.tick_ms == 0 {
        return Err(FrameTimesError::Configuration(
            "sampling.tick_ms must be at least 1".into(),
        ));
    }

    let mut stats = FrameStats::new(settings.capacity, settings.interval, settings.trim_outliers)?;
    let period = Duration::from_millis(settings.tick_ms);
    let (tx, rx) = mpsc::channel(4);

    info!(
        capacity = settings.capacity,
        interval = settings.interval,
        tick_ms = settings.tick_ms,
        trim_outliers = settings.trim_outliers,
        "Frame-time monitor started"
    );

    tokio::spawn(async move {
        let mut ticker = time::interval(period);
        let mut ticks: u64 = 0;

        loop {
            ticker.tick().await;

            let Some(sample) = source.latest() else {
                info!("Sample source finished after {ticks} ticks");
                break;
            };
            ticks += 1;

            match stats.tick(sample) {
                Ok(Some(summary)) => {
                    if tx.send(summary).await.is_err() {
                        break; // all receivers dropped
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    error!("Frame-time aggregation failed: {e}");
                    break;
                }
            }
        }
    });

    Ok(rx)
}
