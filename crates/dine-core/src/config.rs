//! Storefront configuration.
//!
//! Configuration is built explicitly by the hosting workload (from Spin
//! variables or a TOML document) and passed down to every page.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default revalidation window for listing content, in seconds.
pub const DEFAULT_REVALIDATE_SECS: u64 = 3600;

/// Default stale-while-revalidate window, in seconds.
pub const DEFAULT_STALE_WHILE_REVALIDATE_SECS: u64 = 86_400;

/// Default background video for the hero banner.
pub const DEFAULT_HERO_VIDEO_URL: &str = "/video/hero.mp4";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required option: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {option}: {reason}")]
    Invalid {
        option: &'static str,
        reason: String,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" => Ok(Self::Human),
            other => Err(ConfigError::Invalid {
                option: "logFormat",
                reason: format!("expected 'json' or 'human', got '{}'", other),
            }),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Base URL of the content API (e.g. `https://cms.example.com/api`).
    #[serde(default)]
    pub api_base_url: String,
    /// Origin that relative image paths resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_origin: Option<String>,
    /// Revalidation window for listing content.
    #[serde(default = "default_revalidate_secs")]
    pub revalidate_secs: u64,
    /// Stale-while-revalidate window advertised to the edge.
    #[serde(default = "default_swr_secs")]
    pub stale_while_revalidate_secs: u64,
    /// Hero banner video source.
    #[serde(default = "default_hero_video_url")]
    pub hero_video_url: String,
    /// Browser module that binds the category slider, if deployed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_script_url: Option<String>,
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_revalidate_secs() -> u64 {
    DEFAULT_REVALIDATE_SECS
}

fn default_swr_secs() -> u64 {
    DEFAULT_STALE_WHILE_REVALIDATE_SECS
}

fn default_hero_video_url() -> String {
    DEFAULT_HERO_VIDEO_URL.to_string()
}

impl StorefrontConfig {
    /// Create a configuration with defaults for everything but the API base URL.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            media_origin: None,
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
            stale_while_revalidate_secs: DEFAULT_STALE_WHILE_REVALIDATE_SECS,
            hero_video_url: default_hero_video_url(),
            slider_script_url: None,
            log_format: LogFormat::default(),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set an explicit media origin.
    pub fn with_media_origin(mut self, origin: impl Into<String>) -> Self {
        self.media_origin = Some(origin.into());
        self
    }

    /// Set the revalidation window.
    pub fn with_revalidate_secs(mut self, secs: u64) -> Self {
        self.revalidate_secs = secs;
        self
    }

    /// Set the slider script URL.
    pub fn with_slider_script_url(mut self, url: impl Into<String>) -> Self {
        self.slider_script_url = Some(url.into());
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Check that required options are present and well-formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::Missing("apiBaseUrl"));
        }
        if !is_http_url(base) {
            return Err(ConfigError::Invalid {
                option: "apiBaseUrl",
                reason: format!("expected an http(s) URL, got '{}'", base),
            });
        }
        if let Some(origin) = &self.media_origin {
            if !is_http_url(origin.trim()) {
                return Err(ConfigError::Invalid {
                    option: "mediaOrigin",
                    reason: format!("expected an http(s) URL, got '{}'", origin),
                });
            }
        }
        Ok(())
    }

    /// API base URL without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim().trim_end_matches('/')
    }

    /// Origin for media files.
    ///
    /// Falls back to the API base URL with its trailing `/api` segment removed.
    pub fn media_origin(&self) -> &str {
        match &self.media_origin {
            Some(origin) => origin.trim().trim_end_matches('/'),
            None => {
                let base = self.api_base_url();
                base.strip_suffix("/api").unwrap_or(base)
            }
        }
    }

    /// Resolve an image reference against the media origin.
    pub fn media_url(&self, path: &str) -> String {
        if is_http_url(path) {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.media_origin(), path)
        } else {
            format!("{}/{}", self.media_origin(), path)
        }
    }

    /// Revalidation window as a duration.
    pub fn revalidate_window(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }

    /// Stale-while-revalidate window as a duration.
    pub fn stale_while_revalidate(&self) -> Duration {
        Duration::from_secs(self.stale_while_revalidate_secs)
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_camel_case() {
        let config = StorefrontConfig::from_toml_str(
            r#"
apiBaseUrl = "https://cms.example.com/api"
revalidateSecs = 60
logFormat = "human"
"#,
        )
        .unwrap();

        assert_eq!(config.api_base_url(), "https://cms.example.com/api");
        assert_eq!(config.revalidate_secs, 60);
        assert_eq!(config.stale_while_revalidate_secs, DEFAULT_STALE_WHILE_REVALIDATE_SECS);
        assert_eq!(config.hero_video_url, DEFAULT_HERO_VIDEO_URL);
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn test_missing_api_base_url() {
        let err = StorefrontConfig::from_toml_str("revalidateSecs = 10").unwrap_err();
        assert!(matches!(err, ConfigError::Missing("apiBaseUrl")));
    }

    #[test]
    fn test_invalid_api_base_url() {
        let err = StorefrontConfig::new("cms.example.com").validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { option: "apiBaseUrl", .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = StorefrontConfig::from_toml_str("apiBaseUrl = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_media_origin_strips_api_segment() {
        let config = StorefrontConfig::new("https://cms.example.com/api/");
        assert_eq!(config.media_origin(), "https://cms.example.com");
        assert_eq!(
            config.media_url("/uploads/pizza.png"),
            "https://cms.example.com/uploads/pizza.png"
        );
    }

    #[test]
    fn test_explicit_media_origin() {
        let config = StorefrontConfig::new("https://cms.example.com/api")
            .with_media_origin("https://media.example.com/");
        assert_eq!(config.media_url("uploads/a.png"), "https://media.example.com/uploads/a.png");
    }

    #[test]
    fn test_absolute_media_url_passthrough() {
        let config = StorefrontConfig::new("https://cms.example.com/api");
        assert_eq!(
            config.media_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!(" JSON ".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(ConfigError::Invalid { option: "logFormat", .. })
        ));
    }

    #[test]
    fn test_json_round_trip_uses_camel_case() {
        let config = StorefrontConfig::new("https://cms.example.com/api");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["apiBaseUrl"], "https://cms.example.com/api");
        assert_eq!(json["revalidateSecs"], 3600);
    }
}
