use frametimes_config::{DisplayConfig, OutputStyle};

/// Smallest and largest accepted text size.
const TEXT_SIZE_RANGE: (u32, u32) = (10, 200);
/// Highest supported number of decimals.
const MAX_PRECISION: usize = 6;

/// Display settings derived from the `[display]` config section.
///
/// [`DisplayStyle::from_config`] is infallible: out-of-range values are
/// clamped instead of rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStyle {
    pub format:         OutputStyle,
    /// Digits after the decimal point.
    pub precision:      usize,
    pub main_size:      u32,
    pub secondary_size: u32,
}

impl DisplayStyle {
    pub fn from_config(cfg: &DisplayConfig) -> Self {
        let (lo, hi) = TEXT_SIZE_RANGE;
        Self {
            format:         cfg.style,
            precision:      usize::from(cfg.precision).min(MAX_PRECISION),
            main_size:      cfg.main_size.clamp(lo, hi),
            secondary_size: cfg.secondary_size.clamp(lo, hi),
        }
    }

    /// Minimum rendered width of a number: two integer digits, the point,
    /// then the decimals.
    pub fn number_width(&self) -> usize {
        if self.precision == 0 {
            2
        } else {
            self.precision + 3
        }
    }
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        let style = DisplayStyle::from_config(&DisplayConfig {
            precision: 12,
            main_size: 4,
            secondary_size: 900,
            ..DisplayConfig::default()
        });
        assert_eq!(style.precision, 6);
        assert_eq!(style.main_size, 10);
        assert_eq!(style.secondary_size, 200);
    }

    #[test]
    fn number_width_tracks_precision() {
        let mut style = DisplayStyle::default();
        assert_eq!(style.number_width(), 5);
        style.precision = 0;
        assert_eq!(style.number_width(), 2);
    }
}
