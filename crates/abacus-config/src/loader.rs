//! Reading configuration files.
//!
//! The format is chosen by extension: `.toml` or `.json`. Loaded
//! configurations are validated before they are returned.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::settings::CalculatorConfig;

/// Directory under the platform config directory that holds Abacus files.
pub const CONFIG_DIR_NAME: &str = "abacus";

/// File name looked up in [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

impl CalculatorConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let read = || {
            fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        log::debug!("loading configuration from {}", path.display());
        match extension.as_str() {
            "toml" => Self::from_toml_str(&read()?),
            "json" => Self::from_json_str(&read()?),
            _ => Err(ConfigError::UnsupportedFormat { extension }),
        }
    }

    /// Loads the file at [`default_path`] if there is one, defaults otherwise.
    pub fn load_default() -> ConfigResult<Self> {
        match default_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                log::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// `<config_dir>/abacus/config.toml`, or `None` when the platform has no
/// config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::AngleUnit;
    use std::io::Write;

    #[test]
    fn test_empty_toml_is_default() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            CalculatorConfig::from_json_str(r#"{"solver": {"irr_guess": 5.0}}"#).unwrap();
        assert_eq!(config.solver.irr_guess, 5.0);
        assert_eq!(config.solver.max_iterations, 1000);
        assert_eq!(config.angle_unit, AngleUnit::Radians);
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            CalculatorConfig::from_toml_str("angle_unit = "),
            Err(ConfigError::Deserialization(_))
        ));
        assert!(matches!(
            CalculatorConfig::from_json_str(r#"{"angle_unit": "gradians"}"#),
            Err(ConfigError::Deserialization(_))
        ));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = CalculatorConfig::from_toml_str("[graph]\nx_min = 10.0\nx_max = -10.0\n");
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("abacus.toml");
        let mut file = fs::File::create(&toml_path).unwrap();
        writeln!(file, "angle_unit = \"deg\"").unwrap();
        assert_eq!(
            CalculatorConfig::load(&toml_path).unwrap().angle_unit,
            AngleUnit::Degrees
        );

        let json_path = dir.path().join("abacus.json");
        fs::write(&json_path, r#"{"graph": {"samples": 50}}"#).unwrap();
        assert_eq!(CalculatorConfig::load(&json_path).unwrap().graph.samples, 50);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("abacus.yaml");
        fs::write(&yaml_path, "angle_unit: deg").unwrap();
        assert!(matches!(
            CalculatorConfig::load(&yaml_path),
            Err(ConfigError::UnsupportedFormat { extension }) if extension == "yaml"
        ));

        assert!(matches!(
            CalculatorConfig::load(dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_default_path_shape() {
        if let Some(path) = default_path() {
            assert!(path.ends_with("abacus/config.toml"));
        }
    }
}
