use crate::{
    frame_times::FrameTimesWidget,
    style::DisplayStyle,
    surface::{StdoutSurface, TextSurface},
};
use frametimes_config::DisplayConfig;
use frametimes_core::Summary;
use tracing::{info, warn};

/// Routes rendered summaries to a [`TextSurface`], or to the log when there
/// is none.
///
/// The text buffer is reused between calls.
pub struct Presenter {
    widget:  FrameTimesWidget,
    surface: Option<Box<dyn TextSurface>>,
    buffer:  String,
}

impl Presenter {
    pub fn new(widget: FrameTimesWidget, surface: Option<Box<dyn TextSurface>>) -> Self {
        if surface.is_none() {
            warn!("No text surface provided, frame times will be logged instead.");
        }

        Self {
            widget,
            surface,
            buffer: String::with_capacity(1024),
        }
    }

    /// Presenter for the `[display]` section: stdout when `surface` is on,
    /// the log otherwise.
    pub fn from_config(cfg: &DisplayConfig) -> Self {
        let surface = cfg
            .surface
            .then(|| Box::new(StdoutSurface) as Box<dyn TextSurface>);
        Self::new(FrameTimesWidget::new(DisplayStyle::from_config(cfg)), surface)
    }

    /// Render `summary` and hand it to the surface.  Returns the rendered text.
    pub fn present(&mut self, summary: &Summary) -> &str {
        self.buffer.clear();
        self.widget.render_into(summary, &mut self.buffer);

        match self.surface.as_mut() {
            Some(surface) => surface.set_text(&self.buffer),
            None => info!("{}", self.buffer),
        }

        &self.buffer
    }

    /// Swap in new display settings, e.g. after a config reload.
    pub fn set_style(&mut self, style: DisplayStyle) {
        self.widget = FrameTimesWidget::new(style);
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }
}

impl std::fmt::Debug for Presenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presenter")
            .field("widget", &self.widget)
            .field("has_surface", &self.has_surface())
            .finish_non_exhaustive()
    }
}
