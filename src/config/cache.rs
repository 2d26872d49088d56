//! Insight cache configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Insight cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Whether cached insights are consulted at all. With the cache
    /// disabled every request regenerates.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// How long a cached insight stays live, in hours.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: i64,
}

impl CacheConfig {
    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.enabled && self.ttl_hours < 1 {
            return Err(ValidationError::InvalidCacheTtl);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            ttl_hours: default_ttl_hours(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_ttl_hours() -> i64 {
    24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_a_one_day_ttl() {
        let config = CacheConfig::default();
        assert!(config.enabled);
        assert_eq!(config.ttl_hours, 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_ttl_fails_validation_when_enabled() {
        let config = CacheConfig {
            enabled: true,
            ttl_hours: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCacheTtl)
        ));
    }

    #[test]
    fn ttl_is_ignored_when_disabled() {
        let config = CacheConfig {
            enabled: false,
            ttl_hours: 0,
        };
        assert!(config.validate().is_ok());
    }
}
