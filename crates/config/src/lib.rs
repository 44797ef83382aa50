pub mod schema;
pub mod watcher;

pub use schema::{DisplayConfig, FrameTimesConfig, OutputStyle, SamplingConfig};
pub use watcher::ConfigWatcher;

use frametimes_core::{FrameTimesError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `FrameTimesConfig::default()`
/// if the file doesn't exist; any other failure is a configuration error.
///
/// The loaded config is validated before it is returned.
pub fn load(path: impl AsRef<Path>) -> Result<FrameTimesConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(FrameTimesConfig::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|e| {
        FrameTimesError::Configuration(format!("cannot read '{}': {e}", path.display()))
    })?;

    parse(&raw)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<FrameTimesConfig> {
    let config: FrameTimesConfig = toml::from_str(raw)
        .map_err(|e| FrameTimesError::Configuration(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("frametimes").join("frametimes.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load("/nonexistent/frametimes/frametimes.toml").unwrap();
        assert_eq!(config.sampling.capacity, 30);
        assert_eq!(config.display.precision, 2);
    }

    #[test]
    fn unreadable_path_is_a_configuration_error() {
        let err = load(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, FrameTimesError::Configuration(_)));
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn parse_rejects_zero_capacity() {
        let err = parse("[sampling]\ncapacity = 0\n").unwrap_err();
        assert!(matches!(err, FrameTimesError::Configuration(_)));
    }

    #[test]
    fn parse_rejects_negative_capacity() {
        assert!(parse("[sampling]\ncapacity = -4\n").is_err());
    }

    #[test]
    fn parse_reports_bad_toml() {
        let err = parse("[sampling\n").unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        assert!(default_path().ends_with("frametimes/frametimes.toml"));
    }
}
