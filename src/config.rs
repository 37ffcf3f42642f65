// Mon May 4 2026 - Alex

use crate::model::Endianness;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Platform cap on natural alignment. 8 matches LP64 targets, where
    /// nothing in the model aligns past 8 bytes.
    pub max_alignment: u64,
    pub default_endianness: Endianness,
    pub pretty_json: bool,
    pub sort_keys: bool,
    pub include_statistics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_alignment: 8,
            default_endianness: Endianness::Little,
            pretty_json: true,
            sort_keys: false,
            include_statistics: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_alignment(mut self, max_alignment: u64) -> Self {
        self.max_alignment = max_alignment;
        self
    }

    pub fn with_default_endianness(mut self, endianness: Endianness) -> Self {
        self.default_endianness = endianness;
        self
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    pub fn with_sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }

    pub fn with_statistics(mut self, include: bool) -> Self {
        self.include_statistics = include;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.max_alignment.is_power_of_two() {
            return Err(format!(
                "max_alignment must be a power of two, got {}",
                self.max_alignment
            ));
        }
        if self.max_alignment > 128 {
            return Err(format!(
                "max_alignment must be at most 128, got {}",
                self.max_alignment
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(8, config.max_alignment);
        assert_eq!(Endianness::Little, config.default_endianness);
        assert!(config.pretty_json);
        assert!(!config.sort_keys);
        assert!(config.include_statistics);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_power_of_two() {
        let config = Config::new().with_max_alignment(3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_cap() {
        let config = Config::new().with_max_alignment(256);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = Config::new()
            .with_sort_keys(true)
            .with_pretty_json(false)
            .with_default_endianness(Endianness::Big);
        assert!(config.sort_keys);
        assert!(!config.pretty_json);
        assert_eq!(Endianness::Big, config.default_endianness);
    }
}
