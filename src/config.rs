use crate::error::AppError;
use crate::filesystem;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const CONFIG_FILE: &str = "krishiveda.toml";

/// Simulated lookup delays in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulatedDelays {
    pub weather_ms: u64,
    pub pesticide_ms: u64,
    pub chemical_ms: u64,
    pub image_analysis_ms: u64,
    pub voice_navigation_ms: u64,
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        Self {
            weather_ms: 2000,
            pesticide_ms: 2000,
            chemical_ms: 3000,
            image_analysis_ms: 3000,
            voice_navigation_ms: 2000,
        }
    }
}

impl SimulatedDelays {
    pub fn weather(&self) -> Duration {
        Duration::from_millis(self.weather_ms)
    }

    pub fn pesticide(&self) -> Duration {
        Duration::from_millis(self.pesticide_ms)
    }

    pub fn chemical(&self) -> Duration {
        Duration::from_millis(self.chemical_ms)
    }

    pub fn image_analysis(&self) -> Duration {
        Duration::from_millis(self.image_analysis_ms)
    }
}

/// App settings read from `data/krishiveda.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub default_language: String,
    pub log_level: String,
    pub voice_assistant: bool,
    pub delays: SimulatedDelays,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            log_level: "info".to_string(),
            voice_assistant: true,
            delays: SimulatedDelays::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Loads the config file from the app data dir. A broken file is reported
    /// and replaced by defaults; logging is not up yet, so this goes to stderr.
    pub fn load() -> Self {
        let path = filesystem::get_app_data_dir().join(CONFIG_FILE);
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.default_language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.language(), Language::English);
        assert_eq!(config.delays.weather(), Duration::from_secs(2));
        assert_eq!(config.delays.chemical(), Duration::from_secs(3));
        assert!(config.voice_assistant);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
default_language = "hi"

[delays]
weather_ms = 0
"#,
        )
        .unwrap();
        assert_eq!(config.language(), Language::Hindi);
        assert_eq!(config.delays.weather_ms, 0);
        assert_eq!(config.delays.pesticide_ms, 2000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let err = AppConfig::from_toml("default_language = [").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load_from(Path::new("./does-not-exist/krishiveda.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
