//! Client configuration
//!
//! Loaded from a TOML file, then overridden from the environment:
//! - `INVITE_API_BASE_URL`
//! - `INVITE_STORAGE_PATH`
//!
//! Every section has defaults, so a missing file or a partial file is fine.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the remote service URL
pub const ENV_API_BASE_URL: &str = "INVITE_API_BASE_URL";
/// Environment variable overriding the local storage file
pub const ENV_STORAGE_PATH: &str = "INVITE_STORAGE_PATH";

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InviteConfig {
    /// Base URL of the remote RSVP service
    pub api_base_url: String,
    /// JSON file backing local key-value storage
    pub storage_path: PathBuf,
    /// Gallery carousel
    pub gallery: GalleryConfig,
    /// Navigation bar
    pub navigation: NavigationConfig,
    /// Event information shown in the hero and details sections
    pub event: EventConfig,
    /// Phone contacts for guests who cannot use the form
    pub contacts: Vec<Contact>,
    /// Footer text
    pub footer: FooterConfig,
}

impl InviteConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With remote service URL
    #[inline]
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// With storage file
    #[inline]
    #[must_use]
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// `ConfigError::Parse` on malformed TOML, `ConfigError::Invalid` on
    /// unusable values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides
    ///
    /// A path that was given but does not exist is an error; no path at all
    /// means defaults.
    ///
    /// # Errors
    /// IO, parse or validation failure.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| ConfigError::io_error(path, e))?;
                tracing::debug!("Loaded config from {}", path.display());
                toml::from_str(&text)?
            }
            None => Self::default(),
        };

        let config = config.with_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the environment in production)
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            tracing::info!("{ENV_API_BASE_URL} set, using {url}");
            self.api_base_url = url;
        }
        if let Some(path) = lookup(ENV_STORAGE_PATH).filter(|v| !v.trim().is_empty()) {
            tracing::info!("{ENV_STORAGE_PATH} set, using {path}");
            self.storage_path = PathBuf::from(path);
        }
        self
    }

    /// Check values are usable
    ///
    /// # Errors
    /// `ConfigError::Invalid` naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be an http(s) URL, got '{url}'"
            )));
        }
        if self.gallery.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "gallery.interval_ms must be positive".to_string(),
            ));
        }
        if self.gallery.images.is_empty() {
            return Err(ConfigError::Invalid(
                "gallery.images must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://invitation-app-backend-production.up.railway.app".to_string(),
            storage_path: PathBuf::from("invite-storage.json"),
            gallery: GalleryConfig::default(),
            navigation: NavigationConfig::default(),
            event: EventConfig::default(),
            contacts: vec![
                Contact::new("077 190 8356", "0771908356"),
                Contact::new("076 672 1005", "0766721005"),
            ],
            footer: FooterConfig::default(),
        }
    }
}

/// Gallery carousel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Auto-advance period in milliseconds
    pub interval_ms: u64,
    /// Images in display order
    pub images: Vec<GalleryImage>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4000,
            images: vec![
                GalleryImage::new("pic2.jpg", "Hasini & Sachin - Pre-shoot 1"),
                GalleryImage::new("pic4.jpg", "Hasini & Sachin - Pre-shoot 2"),
                GalleryImage::new("pic1.jpg", "Hasini & Sachin - Pre-shoot 3"),
            ],
        }
    }
}

/// One gallery picture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    #[inline]
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Navigation bar settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Scroll offset past which the bar shrinks
    pub scroll_threshold_px: f64,
    /// Fallback bar height used when computing scroll targets
    pub navbar_height_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
            navbar_height_px: 96.0,
        }
    }
}

/// Event information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub couple: String,
    pub tagline: String,
    pub date: String,
    pub weekday: String,
    pub start_time: String,
    pub venue: String,
    pub hall: String,
    pub locality: String,
    /// Maps search endpoint; the encoded address is appended
    pub maps_search_url: String,
}

impl EventConfig {
    /// Full address used for directions
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}, {}, {}", self.venue, self.hall, self.locality)
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            couple: "Hasini & Sachin".to_string(),
            tagline: "We are getting married".to_string(),
            date: "October 02, 2025".to_string(),
            weekday: "Thursday".to_string(),
            start_time: "9:00 AM".to_string(),
            venue: "Hotel Green Court".to_string(),
            hall: "Grand Ballroom".to_string(),
            locality: "Homagama, Sri Lanka".to_string(),
            maps_search_url: "https://www.google.com/maps/search/?api=1&query=".to_string(),
        }
    }
}

/// Phone contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display form
    pub label: String,
    /// Dialable number
    pub phone: String,
}

impl Contact {
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            phone: phone.into(),
        }
    }

    /// `tel:` link
    #[inline]
    #[must_use]
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// Footer text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub message: String,
    pub copyright: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            message: "Thank you for being part of our love story. Your presence will make our special day complete.".to_string(),
            copyright: "© 2025 All Rights Reserved".to_string(),
        }
    }
}
