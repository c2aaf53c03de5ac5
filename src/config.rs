use log::Level;
use serde::Deserialize;

use crate::error::Result;

/// Id of the optional inline JSON block that overrides [`SiteConfig`] defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Testimonial autoplay period. 0 turns autoplay off.
    pub autoplay_interval_ms: u32,
    pub header_threshold_px: f64,
    pub reveal_ratio: f64,
    pub stats_trigger_ratio: f64,
    pub stats_duration_ms: u32,
    pub stats_frame_ms: u32,
    pub contact_delay_ms: u32,
    /// When set, the contact form really posts here instead of simulating.
    pub contact_endpoint: Option<String>,
    pub contact_success_message: String,
    pub contact_failure_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
            header_threshold_px: 100.0,
            reveal_ratio: 1.15,
            stats_trigger_ratio: 0.75,
            stats_duration_ms: 2000,
            stats_frame_ms: 16,
            contact_delay_ms: 2000,
            contact_endpoint: None,
            contact_success_message: "Thank you for contacting us! We will get back to you soon."
                .to_string(),
            contact_failure_message: "Sorry, your message could not be sent. Please try again later."
                .to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the inline config block, falling back to defaults when it is
    /// missing or malformed.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = SiteConfig::from_json(
            r#"{"autoplay_interval_ms": 8000, "contact_endpoint": "/api/contact"}"#,
        )
        .unwrap();
        assert_eq!(config.autoplay_interval_ms, 8000);
        assert_eq!(config.contact_endpoint.as_deref(), Some("/api/contact"));
        assert_eq!(config.header_threshold_px, 100.0);
        assert_eq!(config.contact_delay_ms, 2000);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json("{autoplay").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
