use serde::{Deserialize, Serialize};

/// One tick's paired frame-time measurement.
///
/// Units are opaque (milliseconds in practice).  Values are stored exactly as
/// the producer reported them; nothing is validated or clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time the CPU spent on the frame.
    pub cpu: f64,
    /// Time the GPU spent on the frame.
    pub gpu: f64,
}

impl Sample {
    #[inline]
    pub const fn new(cpu: f64, gpu: f64) -> Self {
        Self { cpu, gpu }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((cpu, gpu): (f64, f64)) -> Self {
        Self { cpu, gpu }
    }
}
