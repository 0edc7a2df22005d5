//! Inventory configuration.

/// Environment variable holding the low-stock threshold.
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Products at or below this many units (but above zero) are "low stock".
    pub low_stock_threshold: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    pub fn with_low_stock_threshold(mut self, threshold: u64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Read configuration from the process environment.
    ///
    /// Missing values use defaults; unparsable values log a warning and use
    /// defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    default = DEFAULT_LOW_STOCK_THRESHOLD,
                    "{LOW_STOCK_THRESHOLD_ENV} is not a non-negative integer; using default"
                ),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_default() {
        let config = InventoryConfig::from_lookup(|_| None);
        assert_eq!(config.low_stock_threshold, 10);
    }

    #[test]
    fn parses_threshold() {
        let config = InventoryConfig::from_lookup(|key| {
            (key == LOW_STOCK_THRESHOLD_ENV).then(|| " 25 ".to_string())
        });
        assert_eq!(config.low_stock_threshold, 25);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let config = InventoryConfig::from_lookup(|_| Some("-3".to_string()));
        assert_eq!(config, InventoryConfig::default());
    }
}
