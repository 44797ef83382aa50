//! Rolling CPU/GPU frame-time statistics.
//!
//! A fixed-capacity [`RingBuffer`] collects one [`Sample`] per tick, a
//! [`Cadence`] decides when to reduce it, and [`summarize`] turns the full
//! window into a six-number [`Summary`].  [`FrameStats`] wires the three
//! together for a single driver.

pub mod cadence;
pub mod error;
pub mod ring;
pub mod sample;
pub mod stats;
pub mod summary;

pub use cadence::Cadence;
pub use error::{FrameTimesError, Result};
pub use ring::RingBuffer;
pub use sample::Sample;
pub use stats::FrameStats;
pub use summary::{summarize, Summary};
