use crate::{
    error::{FrameTimesError, Result},
    sample::Sample,
};
use serde::Serialize;

/// Min / max / mean of both channels over one full window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub cpu_min: f64,
    pub cpu_max: f64,
    pub cpu_avg: f64,
    pub gpu_min: f64,
    pub gpu_max: f64,
    pub gpu_avg: f64,
}

/// Reduce `samples` to a [`Summary`].
///
/// Min and max always cover every sample.  With `trim_outliers` set and more
/// than two samples, one instance of each channel's min and max is removed
/// from the mean; duplicates of an extreme value stay in.
///
/// Sums are accumulated in slice order.
pub fn summarize(samples: &[Sample], trim_outliers: bool) -> Result<Summary> {
    let (first, rest) = samples.split_first().ok_or(FrameTimesError::EmptyBuffer)?;

    let (mut cpu_min, mut cpu_max, mut cpu_sum) = (first.cpu, first.cpu, first.cpu);
    let (mut gpu_min, mut gpu_max, mut gpu_sum) = (first.gpu, first.gpu, first.gpu);

    for sample in rest {
        cpu_min = min_nan(cpu_min, sample.cpu);
        cpu_max = max_nan(cpu_max, sample.cpu);
        cpu_sum += sample.cpu;
        gpu_min = min_nan(gpu_min, sample.gpu);
        gpu_max = max_nan(gpu_max, sample.gpu);
        gpu_sum += sample.gpu;
    }

    let mut count = samples.len();
    if trim_outliers && count > 2 {
        cpu_sum -= cpu_min;
        cpu_sum -= cpu_max;
        gpu_sum -= gpu_min;
        gpu_sum -= gpu_max;
        count -= 2;
    }

    Ok(Summary {
        cpu_min,
        cpu_max,
        cpu_avg: cpu_sum / count as f64,
        gpu_min,
        gpu_max,
        gpu_avg: gpu_sum / count as f64,
    })
}

/// `f64::min` ignores NaN; a NaN sample must show up in the extremes too.
#[inline]
fn min_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

#[inline]
fn max_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
