//! Text presentation of frame-time summaries.

pub mod frame_times;
pub mod presenter;
pub mod style;
pub mod surface;

pub use frame_times::FrameTimesWidget;
pub use presenter::Presenter;
pub use style::DisplayStyle;
pub use surface::{SharedText, StdoutSurface, TextSurface};
