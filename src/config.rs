use crate::domain::table::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use std::env;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub mock_latency: Duration,
    pub service_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            mock_latency: Duration::ZERO,
            service_name: "admin-console".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_page_size = match lookup("DEFAULT_PAGE_SIZE") {
            Some(v) => parse_page_size(&v).ok_or(ConfigError::InvalidPageSize("DEFAULT_PAGE_SIZE"))?,
            None => DEFAULT_PAGE_SIZE,
        };

        let max_page_size = match lookup("MAX_PAGE_SIZE") {
            Some(v) => parse_page_size(&v).ok_or(ConfigError::InvalidPageSize("MAX_PAGE_SIZE"))?,
            None => MAX_PAGE_SIZE,
        };

        if default_page_size > max_page_size {
            return Err(ConfigError::PageSizeExceedsMax {
                default: default_page_size,
                max: max_page_size,
            });
        }

        if !PAGE_SIZE_OPTIONS.contains(&default_page_size) {
            return Err(ConfigError::UnsupportedPageSize(default_page_size));
        }

        let mock_latency = match lookup("MOCK_LATENCY_MS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidLatency)?,
            None => Duration::ZERO,
        };

        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| "admin-console".to_string());

        Ok(Config {
            default_page_size,
            max_page_size,
            mock_latency,
            service_name,
        })
    }
}

impl Config {
    /// Page sizes offered by the selector, capped at `max_page_size`.
    pub fn page_size_options(&self) -> Vec<u32> {
        PAGE_SIZE_OPTIONS
            .iter()
            .copied()
            .filter(|size| *size <= self.max_page_size)
            .collect()
    }
}

fn parse_page_size(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be a positive integer")]
    InvalidPageSize(&'static str),

    #[error("DEFAULT_PAGE_SIZE ({default}) exceeds MAX_PAGE_SIZE ({max})")]
    PageSizeExceedsMax { default: u32, max: u32 },

    #[error("DEFAULT_PAGE_SIZE ({0}) must be one of the page size options")]
    UnsupportedPageSize(u32),

    #[error("MOCK_LATENCY_MS must be a non-negative integer")]
    InvalidLatency,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.max_page_size, 100);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DEFAULT_PAGE_SIZE", "10"),
            ("MAX_PAGE_SIZE", "50"),
            ("MOCK_LATENCY_MS", "500"),
            ("SERVICE_NAME", "console-dev"),
        ]))
        .unwrap();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_page_size, 50);
        assert_eq!(config.mock_latency, Duration::from_millis(500));
        assert_eq!(config.service_name, "console-dev");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[("DEFAULT_PAGE_SIZE", "0")])),
            Err(ConfigError::InvalidPageSize("DEFAULT_PAGE_SIZE"))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("MAX_PAGE_SIZE", "lots")])),
            Err(ConfigError::InvalidPageSize("MAX_PAGE_SIZE"))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("MOCK_LATENCY_MS", "-5")])),
            Err(ConfigError::InvalidLatency)
        );
    }

    #[test]
    fn test_default_must_not_exceed_max() {
        assert_eq!(
            Config::from_lookup(lookup(&[("DEFAULT_PAGE_SIZE", "200")])),
            Err(ConfigError::PageSizeExceedsMax { default: 200, max: 100 })
        );
    }

    #[test]
    fn test_default_must_be_a_selectable_option() {
        assert_eq!(
            Config::from_lookup(lookup(&[("DEFAULT_PAGE_SIZE", "30")])),
            Err(ConfigError::UnsupportedPageSize(30))
        );
        assert!(Config::from_lookup(lookup(&[("DEFAULT_PAGE_SIZE", "50")])).is_ok());
    }

    #[test]
    fn test_page_size_options_respect_max() {
        assert_eq!(Config::default().page_size_options(), vec![10, 25, 50, 100]);

        let config = Config::from_lookup(lookup(&[("MAX_PAGE_SIZE", "60")])).unwrap();
        assert_eq!(config.page_size_options(), vec![10, 25, 50]);
    }
}
