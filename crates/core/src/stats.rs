use crate::{
    cadence::Cadence,
    error::Result,
    ring::RingBuffer,
    sample::Sample,
    summary::Summary,
};

/// Ring buffer + cadence for one sample producer.
///
/// Owned by exactly one driver, which calls [`tick`](Self::tick) once per
/// frame.  Reads and writes never interleave, so no locking is involved.
#[derive(Debug, Clone)]
pub struct FrameStats {
    ring:          RingBuffer,
    cadence:       Cadence,
    trim_outliers: bool,
}

impl FrameStats {
    pub fn new(capacity: usize, interval: u32, trim_outliers: bool) -> Result<Self> {
        Ok(Self {
            ring:    RingBuffer::new(capacity)?,
            cadence: Cadence::new(interval),
            trim_outliers,
        })
    }

    /// Record this tick's sample.  Returns a summary when the cadence fires.
    pub fn tick(&mut self, sample: Sample) -> Result<Option<Summary>> {
        self.ring.write(sample);
        if !self.cadence.tick() {
            return Ok(None);
        }

        let summary = self.summary()?;
        tracing::debug!(?summary, "frame window summarized");
        Ok(Some(summary))
    }

    /// Summarize the current window without touching the cadence.
    pub fn summary(&self) -> Result<Summary> {
        self.ring.summary(self.trim_outliers)
    }

    pub fn ring(&self) -> &RingBuffer {
        &self.ring
    }

    pub fn trim_outliers(&self) -> bool {
        self.trim_outliers
    }
}
