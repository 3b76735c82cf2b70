use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use v1::output::OutputConfig;
pub use v1::qr::QrConfig;

mod v1 {
    /// Output file config
    pub mod output;

    /// QR symbol config
    pub mod qr;
}

pub const CURRENT_VERSION: usize = 1;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    qr: QrConfig,
    #[serde(default = "current_version")]
    version: usize,
}

fn current_version() -> usize {
    CURRENT_VERSION
}

impl Config {
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn qr(&self) -> &QrConfig {
        &self.qr
    }

    pub fn needs_upgrade(&self) -> bool {
        self.version < CURRENT_VERSION
    }

    pub fn from_toml(toml: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml)
    }

    /// Load from the default location, or the defaults if there is no file yet.
    pub fn load_from_file() -> Result<Self, ConfigError> {
        Self::load(config_location())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Default::default());
        }
        let config = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(Self::from_toml(&config)?)
    }

    /// get a list of all things potentially wrong with the config
    pub fn config_errors(&self) -> Vec<&str> {
        let mut errors = Vec::new();
        if self.output().qr_file.is_empty() {
            errors.push("default QR file name is empty");
        }
        if matches!(&self.output().text_file, Some(f) if f.is_empty()) {
            errors.push("text file name is empty");
        }
        if !(1..=40).contains(&self.qr().min_version) {
            errors.push("QR version must be between 1 and 40");
        }
        if self.qr().module_size == 0 {
            errors.push("QR module size is 0");
        }
        errors
    }
}

fn config_location() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("epc-qr").join("config.toml")
    } else {
        PathBuf::from("epc-qr.toml")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            output: OutputConfig::default(),
            qr: QrConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.config_errors().is_empty());
        assert!(!config.needs_upgrade());
    }

    #[test]
    fn partial_sections() {
        let config = Config::from_toml(
            r#"
            version = 1

            [output]
            text_file = "qr_source.txt"

            [qr]
            module_size = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.output().qr_file, "qr.png");
        assert_eq!(config.output().text_file.as_deref(), Some("qr_source.txt"));
        assert_eq!(config.qr().min_version, 6);
        assert_eq!(config.qr().module_size, 4);
        assert!(config.qr().quiet_zone);
    }

    #[test]
    fn old_version_needs_upgrade() {
        let config = Config::from_toml("version = 0").unwrap();
        assert!(config.needs_upgrade());
    }

    #[test]
    fn errors_are_listed() {
        let config = Config::from_toml(
            r#"
            [output]
            qr_file = ""

            [qr]
            min_version = 41
            module_size = 0
            "#,
        )
        .unwrap();
        assert_eq!(
            config.config_errors(),
            vec![
                "default QR file name is empty",
                "QR version must be between 1 and 40",
                "QR module size is 0",
            ]
        );
    }

    #[test]
    fn load() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Config::load(dir.path().join("config.toml")).unwrap();
        assert_eq!(missing, Config::default());

        let path = dir.path().join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[output]\nqr_file = \"transfer.png\"").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.output().qr_file, "transfer.png");

        std::fs::write(&path, "[qr\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
