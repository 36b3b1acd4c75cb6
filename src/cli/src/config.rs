use std::{fs, io, path::Path};

use color_eyre::eyre::WrapErr;
use cube3::scramble::DEFAULT_SCRAMBLE_LENGTH;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Settings read from the TOML configuration file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Number of moves in a generated scramble.
    pub scramble_length: usize,
    /// Whether to print the net with colored facelets.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            color: true,
        }
    }
}

impl CliConfig {
    /// Read the configuration at `path`. A missing file falls back to the
    /// defaults unless the user named it explicitly.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or is not a valid configuration.
    pub fn load(path: &Path, explicit: bool) -> color_eyre::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
                debug!("No configuration at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("Failed to read configuration {}", path.display()));
            }
        };
        let config = Self::parse(&text)
            .wrap_err_with(|| format!("Failed to parse configuration {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::parse("scramble_length = 12").unwrap();
        assert_eq!(config.scramble_length, 12);
        assert!(config.color);

        let config = CliConfig::parse("color = false\nscramble_length = 0").unwrap();
        assert_eq!(
            config,
            CliConfig {
                scramble_length: 0,
                color: false
            }
        );
    }

    #[test]
    fn test_bad_config() {
        assert!(CliConfig::parse("scramble_length = \"long\"").is_err());
        assert!(CliConfig::parse("colour = true").is_err());
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("this/config/does/not/exist.toml");
        assert_eq!(
            CliConfig::load(path, false).unwrap(),
            CliConfig::default()
        );
        assert!(CliConfig::load(path, true).is_err());
    }
}
