use serde::Deserialize;
use thiserror::Error;

use crate::console::log_warning;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Tunables for the page's interactions. Every key is optional in the JSON
/// override; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner_name: String,
    /// Scroll offset (px) past which the navbar gets its shadow
    pub navbar_shadow_offset: f64,
    /// Scroll offset (px) past which the scroll-to-top button shows
    pub scroll_top_offset: f64,
    /// How far below the viewport top (px) the active-section probe sits
    pub active_section_lookahead: f64,
    /// Height of the fixed navbar (px) subtracted from smooth-scroll targets
    pub nav_height: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub skills_threshold: f64,
    pub skills_fill_delay_ms: u64,
    pub submit_delay_ms: u64,
    pub success_notice_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Poornima Kulkarni".to_string(),
            navbar_shadow_offset: 50.0,
            scroll_top_offset: 300.0,
            active_section_lookahead: 100.0,
            nav_height: 70.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            skills_threshold: 0.3,
            skills_fill_delay_ms: 100,
            submit_delay_ms: 1500,
            success_notice_ms: 5000,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config value out of range: {0}")]
    OutOfRange(&'static str),
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        for (name, ratio) in [
            ("reveal_threshold", self.reveal_threshold),
            ("skills_threshold", self.skills_threshold),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::OutOfRange(name));
            }
        }
        Ok(())
    }
}

/// Load the page's config overrides.
///
/// # Fallback Behavior
///
/// Returns defaults if:
/// - Running outside a browser, or the page has no config element
/// - The element's JSON is malformed or out of range (logs a console warning)
pub fn load_config() -> SiteConfig {
    let Some(raw) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };

    if raw.trim().is_empty() {
        return SiteConfig::default();
    }

    SiteConfig::from_json(&raw).unwrap_or_else(|e| {
        log_warning(&format!("Portfolio: {e} (using defaults)"));
        SiteConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_defaults_match_page_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.submit_delay_ms, 1500);
        assert_eq!(config.success_notice_ms, 5000);
        assert_eq!(config.skills_fill_delay_ms, 100);
        assert_eq!(config.nav_height, 70.0);
        assert_eq!(config.navbar_shadow_offset, 50.0);
        assert_eq!(config.scroll_top_offset, 300.0);
        assert_eq!(config.active_section_lookahead, 100.0);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(config.skills_threshold, 0.3);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{"owner_name": "Ada Lovelace", "submit_delay_ms": 10}"#)
                .unwrap();
        assert_eq!(
            config,
            SiteConfig {
                owner_name: "Ada Lovelace".to_string(),
                submit_delay_ms: 10,
                ..SiteConfig::default()
            }
        );
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            SiteConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"nav_height": "tall"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let err = SiteConfig::from_json(r#"{"skills_threshold": 1.5}"#).unwrap_err();
        assert_eq!(err.to_string(), "site config value out of range: skills_threshold");
    }
}
