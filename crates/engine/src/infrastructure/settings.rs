//! Environment-driven runtime settings.
//!
//! Every value has a default; a malformed value logs a warning and falls back
//! to that default rather than aborting start-up.

use std::str::FromStr;
use std::time::Duration;

use dexview_domain::{
    OverflowPolicy, Point, RadarConfig, DEFAULT_CENTER, DEFAULT_MAX_RADIUS, DEFAULT_MAX_SCALE,
    DEFAULT_PAGE_SIZE,
};
use url::Url;

use super::pokeapi::DEFAULT_POKEAPI_BASE_URL;

pub const DEFAULT_CATALOG_LIMIT: usize = 1025;
pub const DEFAULT_MAX_IN_FLIGHT: usize = 32;

/// Runtime settings for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Validated absolute URL, without a trailing slash
    pub api_base_url: String,
    pub page_size: usize,
    /// Number of records the full catalog load requests
    pub catalog_limit: usize,
    /// Upper bound on concurrent requests within one batch
    pub max_in_flight: usize,
    pub radar: RadarConfig,
    /// `None` leaves the transport's own timeouts in place
    pub http_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            catalog_limit: DEFAULT_CATALOG_LIMIT,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            radar: RadarConfig::default(),
            http_timeout: None,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which returns the raw value for a key.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = match lookup("DEXVIEW_API_BASE_URL") {
            Some(raw) => match Url::parse(raw.trim()) {
                Ok(_) => raw.trim().trim_end_matches('/').to_string(),
                Err(e) => {
                    tracing::warn!(
                        key = "DEXVIEW_API_BASE_URL",
                        value = %raw,
                        error = %e,
                        "Invalid setting, using default"
                    );
                    defaults.api_base_url.clone()
                }
            },
            None => defaults.api_base_url.clone(),
        };

        let page_size = positive(&lookup, "DEXVIEW_PAGE_SIZE", defaults.page_size);
        let catalog_limit = positive(&lookup, "DEXVIEW_CATALOG_LIMIT", defaults.catalog_limit);
        let max_in_flight = positive(&lookup, "DEXVIEW_MAX_IN_FLIGHT", defaults.max_in_flight);

        let max_scale = parsed(&lookup, "DEXVIEW_STAT_MAX_SCALE", DEFAULT_MAX_SCALE);
        let max_radius = parsed(&lookup, "DEXVIEW_CHART_RADIUS", DEFAULT_MAX_RADIUS);
        let center = parsed(&lookup, "DEXVIEW_CHART_CENTER", DEFAULT_CENTER);
        let overflow = parsed(&lookup, "DEXVIEW_STAT_OVERFLOW", OverflowPolicy::default());

        let mut radar = RadarConfig {
            max_scale,
            max_radius,
            center: Point::new(center, center),
            overflow,
        };
        if let Err(e) = radar.validate() {
            tracing::warn!(error = %e, "Invalid chart settings, using defaults");
            radar = RadarConfig::default();
        }

        let http_timeout = lookup("DEXVIEW_HTTP_TIMEOUT_SECS").and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    tracing::warn!(
                        key = "DEXVIEW_HTTP_TIMEOUT_SECS",
                        value = %raw,
                        error = %e,
                        "Invalid setting, ignoring"
                    );
                    None
                }
            }
        });

        Self {
            api_base_url,
            page_size,
            catalog_limit,
            max_in_flight,
            radar,
            http_timeout,
        }
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, value = %raw, error = %e, "Invalid setting, using default");
                default
            }
        },
        None => default,
    }
}

fn positive<F>(lookup: &F, key: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    match parsed(lookup, key, default) {
        0 => {
            tracing::warn!(key, "Setting must be greater than zero, using default");
            default
        }
        value => value,
    }
}
