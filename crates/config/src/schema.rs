use frametimes_core::{FrameTimesError, Result};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `frametimes.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameTimesConfig {
    /// History size, cadence and averaging policy.
    pub sampling: SamplingConfig,
    /// How summaries are formatted and where they go.
    pub display: DisplayConfig,
}

impl FrameTimesConfig {
    /// Reject settings the monitor cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.sampling.capacity == 0 {
            return Err(FrameTimesError::Configuration(
                "sampling.capacity must be at least 1".into(),
            ));
        }
        if self.sampling.tick_ms == 0 {
            return Err(FrameTimesError::Configuration(
                "sampling.tick_ms must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// `[sampling]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of ring buffer slots.
    pub capacity: usize,
    /// Ticks between summaries; a summary is produced on tick `interval + 1`.
    pub interval: u32,
    /// Tick period of the monitor task in milliseconds.
    pub tick_ms: u64,
    /// Drop one min and one max per channel from the average.
    pub trim_outliers: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            capacity:      30,
            interval:      30,
            tick_ms:       16,
            trim_outliers: true,
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub style: OutputStyle,
    /// Digits after the decimal point.
    pub precision: u8,
    /// Text size of the average figure (rich style only).
    pub main_size: u32,
    /// Text size of the min/max figures (rich style only).
    pub secondary_size: u32,
    /// Write to the text surface.  `false` routes summaries to the log.
    pub surface: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            style:          OutputStyle::Rich,
            precision:      2,
            main_size:      32,
            secondary_size: 26,
            surface:        true,
        }
    }
}

/// Summary text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Size/bold/italic markup tags.
    #[default]
    Rich,
    Plain,
    /// One JSON object per summary.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config: FrameTimesConfig = toml::from_str(
            r#"
            [sampling]
            capacity = 120

            [display]
            style = "plain"
            "#,
        )
        .unwrap();

        assert_eq!(config.sampling.capacity, 120);
        assert_eq!(config.sampling.interval, 30);
        assert!(config.sampling.trim_outliers);
        assert_eq!(config.display.style, OutputStyle::Plain);
        assert_eq!(config.display.main_size, 32);
        assert!(config.display.surface);
    }

    #[test]
    fn empty_document_is_default() {
        let config: FrameTimesConfig = toml::from_str("").unwrap();
        assert_eq!(config, FrameTimesConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_tick_period_is_invalid() {
        let mut config = FrameTimesConfig::default();
        config.sampling.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_style_is_rejected() {
        let parsed: std::result::Result<FrameTimesConfig, _> =
            toml::from_str("[display]\nstyle = \"fancy\"\n");
        assert!(parsed.is_err());
    }
}
