//! Site configuration.
//!
//! Load configuration using `SiteConfig::from_env()`. A WASM bundle has no
//! process environment at runtime, so overrides are read at build time with
//! `option_env!`:
//!
//! - `FIBRE_LOCALE` (`ar` or `en`)
//! - `FIBRE_SUBMIT_LATENCY_MS`
//! - `FIBRE_SETTLE_DELAY_MS`

use std::time::Duration;

use super::i18n::Locale;

/// Distance in pixels an element's top must rise above the viewport bottom
/// before it is revealed
pub const DEFAULT_REVEAL_THRESHOLD_PX: f64 = 150.0;

/// Scroll offset past which the navbar turns compact
pub const DEFAULT_COMPACT_NAVBAR_OFFSET_PX: f64 = 50.0;

/// Hero translation per scrolled pixel
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.5;

/// Simulated network round trip
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 2000;

/// Time the success banner stays up before the form resets
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 2000;

/// Site configuration shared with every component through context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    /// Language for page copy and validation messages
    pub locale: Locale,
    pub reveal_threshold_px: f64,
    pub compact_navbar_offset_px: f64,
    pub parallax_factor: f64,
    /// Delay before the simulated transport acknowledges a record
    pub submit_latency: Duration,
    /// Delay between the success banner and the form reset
    pub settle_delay: Duration,
}

impl SiteConfig {
    /// Build the configuration, applying any build-time overrides.
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("FIBRE_LOCALE"),
            option_env!("FIBRE_SUBMIT_LATENCY_MS"),
            option_env!("FIBRE_SETTLE_DELAY_MS"),
        )
    }

    fn from_overrides(
        locale: Option<&str>,
        submit_latency_ms: Option<&str>,
        settle_delay_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            locale: locale.map(Locale::from_tag).unwrap_or(defaults.locale),
            submit_latency: parse_millis(submit_latency_ms, defaults.submit_latency),
            settle_delay: parse_millis(settle_delay_ms, defaults.settle_delay),
            ..defaults
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            reveal_threshold_px: DEFAULT_REVEAL_THRESHOLD_PX,
            compact_navbar_offset_px: DEFAULT_COMPACT_NAVBAR_OFFSET_PX,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            submit_latency: Duration::from_millis(DEFAULT_SUBMIT_LATENCY_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}

/// Parse a millisecond override, keeping the fallback for missing or
/// malformed values
fn parse_millis(raw: Option<&str>, fallback: Duration) -> Duration {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(fallback)
}
