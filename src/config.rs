//! Configuration Module
//!
//! Construction parameters for a [`FifoCache`](crate::FifoCache).

use crate::cache::DEFAULT_CAPACITY;
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// Values are supplied by the caller; nothing is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of slots the cache can hold
    pub capacity: usize,
    /// Name attached to log events emitted by the cache
    pub name: String,
}

impl CacheConfig {
    /// Creates a config with the given capacity and the default name.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    // == Validate ==
    /// Rejects a capacity below 1.
    pub fn validate(&self) -> Result<()> {
        if self.capacity < 1 {
            return Err(CacheError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            name: "fifo_cache".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.name, "fifo_cache");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = CacheConfig::new(16).with_name("sessions");
        assert_eq!(config.capacity, 16);
        assert_eq!(config.name, "sessions");

        let config = config.with_capacity(32);
        assert_eq!(config.capacity, 32);
    }

    #[test]
    fn test_config_zero_capacity() {
        let config = CacheConfig::new(0);
        assert_eq!(config.validate(), Err(CacheError::InvalidCapacity(0)));
    }
}
