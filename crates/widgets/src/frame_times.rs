use crate::style::DisplayStyle;
use frametimes_config::OutputStyle;
use frametimes_core::Summary;
use std::fmt::Write;
use tracing::warn;

/// Renders a [`Summary`] as two lines, CPU first then GPU.
///
/// Rich output:
/// `<size=32><b>CPU:</b> 11.00</size><size=26>ms <i>min:08.00 max:14.00</i></size>`
#[derive(Debug, Clone, Default)]
pub struct FrameTimesWidget {
    style: DisplayStyle,
}

impl FrameTimesWidget {
    pub fn new(style: DisplayStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &DisplayStyle {
        &self.style
    }

    pub fn render(&self, summary: &Summary) -> String {
        let mut out = String::with_capacity(256);
        self.render_into(summary, &mut out);
        out
    }

    /// Append the rendered summary to `out`.
    pub fn render_into(&self, summary: &Summary, out: &mut String) {
        match self.style.format {
            OutputStyle::Json => match serde_json::to_string(summary) {
                Ok(json) => out.push_str(&json),
                Err(e) => warn!("Cannot serialize summary: {e}"),
            },
            OutputStyle::Rich | OutputStyle::Plain => {
                self.channel_line(out, "CPU", summary.cpu_avg, summary.cpu_min, summary.cpu_max);
                out.push('\n');
                self.channel_line(out, "GPU", summary.gpu_avg, summary.gpu_min, summary.gpu_max);
            }
        }
    }

    fn channel_line(&self, out: &mut String, label: &str, avg: f64, min: f64, max: f64) {
        let w = self.style.number_width();
        let p = self.style.precision;

        // Writing into a String cannot fail.
        let _ = match self.style.format {
            OutputStyle::Rich => write!(
                out,
                "<size={main}><b>{label}:</b> {avg:0w$.p$}</size>\
                 <size={secondary}>ms <i>min:{min:0w$.p$} max:{max:0w$.p$}</i></size>",
                main = self.style.main_size,
                secondary = self.style.secondary_size,
            ),
            _ => write!(out, "{label}: {avg:0w$.p$}ms ({min:0w$.p$}/{max:0w$.p$})"),
        };
    }
}
