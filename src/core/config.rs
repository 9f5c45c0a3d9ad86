use std::str::FromStr;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::buffer::{RingBuffer, SearchMode};
use crate::core::error::RingBufferError;

pub fn compose_config<'de, CFG: Deserialize<'de>>(external_path: &str, env_prefix: &str) -> Result<CFG, ConfigError> {
    Config::builder()

        // Add in a local configuration file
        .add_source(File::with_name(external_path).required(false))

        // Add in settings from the environment (e.g. RINGBUFF_CAPACITY)
        .add_source(Environment::with_prefix(env_prefix))

        .build()?
        .try_deserialize()
}

/// Loosely typed buffer parameters, as read from files or the environment.
///
/// Values are only checked by [`BufferConfig::build`].
#[derive(Debug, Clone, Deserialize)]
pub struct BufferConfig {
    #[serde(default = "default_capacity")]
    pub capacity: i64,
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_capacity() -> i64 {
    100
}

fn default_mode() -> String {
    SearchMode::default().to_string()
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            mode: default_mode(),
        }
    }
}

impl BufferConfig {
    pub fn search_mode(&self) -> Result<SearchMode, RingBufferError> {
        SearchMode::from_str(&self.mode)
    }

    pub fn build(&self) -> Result<RingBuffer, RingBufferError> {
        let capacity = usize::try_from(self.capacity)
            .map_err(|_| RingBufferError::InvalidCapacity { capacity: self.capacity })?;
        RingBuffer::new(capacity, self.search_mode()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds() {
        let buffer = BufferConfig::default().build().expect("Error building default buffer");
        assert_eq!(buffer.capacity(), 100);
        assert_eq!(buffer.mode(), SearchMode::Recent);
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let cfg = BufferConfig { capacity: -1, mode: String::from("recent") };
        assert_eq!(cfg.build().unwrap_err(), RingBufferError::InvalidCapacity { capacity: -1 });
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let cfg = BufferConfig { capacity: 10, mode: String::from("sideways") };
        assert!(matches!(cfg.build(), Err(RingBufferError::InvalidMode(_))));
    }
}
