use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::i18n::Language;
use crate::locations::Coordinates;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "maps.defaultZoom")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Language used when nothing valid was persisted.
    pub default_language: Language,

    /// File backing the persisted language slot.
    /// If unset, the choice only lives for the current process.
    pub language_file: Option<String>,

    /// Write logs to this file instead of stderr.
    pub log_file: Option<String>,

    pub slider: SliderConfig,
    pub forms: FormsConfig,
    pub count_up: CountUpConfig,
    pub maps: MapsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderConfig {
    /// Auto-advance period of the timed sliders.
    pub interval_ms: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self { interval_ms: 7000 }
    }
}

impl SliderConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormsConfig {
    /// Artificial delay standing in for the submission round trip.
    pub submit_delay_ms: u64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self { submit_delay_ms: 1000 }
    }
}

impl FormsConfig {
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountUpConfig {
    /// Delay between the counter becoming visible and its first frame.
    pub start_delay_ms: u64,
    /// Spacing of animation frames.
    pub frame_interval_ms: u64,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self { start_delay_ms: 100, frame_interval_ms: 16 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapsConfig {
    /// Explicit API key; takes precedence over `api_key_env`.
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    pub api_key_env: String,
    pub default_zoom: u8,
    /// Map center used when there are no locations to center on.
    pub fallback_center: Coordinates,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "GOOGLE_MAPS_API_KEY".to_string(),
            default_zoom: 12,
            fallback_center: Coordinates { lat: 40.416_775, lng: -3.703_790 },
        }
    }
}

impl MapsConfig {
    /// API key from the settings, or from the configured environment variable.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl SiteSettings {
    /// # Errors
    /// - A period that would make a timer spin is zero
    /// - Map zoom or fallback center out of range
    /// - An optional path or variable name is present but empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.slider.interval_ms == 0 {
            errors.push(ValidationError::new(
                "slider.intervalMs",
                "The interval must be greater than zero. Example: 7000",
            ));
        }

        if self.count_up.frame_interval_ms == 0 {
            errors.push(ValidationError::new(
                "countUp.frameIntervalMs",
                "The frame interval must be greater than zero. Example: 16",
            ));
        }

        if self.maps.default_zoom > 22 {
            errors.push(ValidationError::new(
                "maps.defaultZoom",
                format!("Zoom {} is out of range. Use a value between 0 and 22", self.maps.default_zoom),
            ));
        }

        let center = self.maps.fallback_center;
        if !(-90.0..=90.0).contains(&center.lat) {
            errors.push(ValidationError::new(
                "maps.fallbackCenter.lat",
                format!("Latitude {} is out of range [-90, 90]", center.lat),
            ));
        }
        if !(-180.0..=180.0).contains(&center.lng) {
            errors.push(ValidationError::new(
                "maps.fallbackCenter.lng",
                format!("Longitude {} is out of range [-180, 180]", center.lng),
            ));
        }

        if self.maps.api_key_env.is_empty() {
            errors.push(ValidationError::new(
                "maps.apiKeyEnv",
                "The variable name cannot be empty. Example: \"GOOGLE_MAPS_API_KEY\"",
            ));
        }

        if let Some(path) = &self.language_file
            && path.is_empty()
        {
            errors.push(ValidationError::new(
                "languageFile",
                "The path cannot be empty. Please specify a file, or remove this field",
            ));
        }

        if let Some(path) = &self.log_file
            && path.is_empty()
        {
            errors.push(ValidationError::new(
                "logFile",
                "The path cannot be empty. Please specify a file, or remove this field",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            default_language: Language::Es,
            language_file: None,
            log_file: None,
            slider: SliderConfig::default(),
            forms: FormsConfig::default(),
            count_up: CountUpConfig::default(),
            maps: MapsConfig::default(),
        }
    }
}
