use std::env;
use std::str::FromStr;

use business::domain::delivery_slot::model::DEFAULT_RECOMMENDED_PERCENT;

pub const DEFAULT_MIN_ORDER_AMOUNT: u64 = 50_000;

/// Business thresholds applied at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutConfig {
    pub min_order_amount: u64,
    pub recommended_slot_percent: u32,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            min_order_amount: DEFAULT_MIN_ORDER_AMOUNT,
            recommended_slot_percent: DEFAULT_RECOMMENDED_PERCENT,
        }
    }
}

impl CheckoutConfig {
    /// Load checkout thresholds from environment variables
    ///
    /// Environment variables:
    /// - MIN_ORDER_AMOUNT: Smallest cart total accepted at checkout (default: 50000)
    /// - RECOMMENDED_SLOT_PERCENT: Free capacity share, in percent, that marks a
    ///   delivery day as recommended (default: 60)
    ///
    /// Values that do not parse fall back to the default.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("MIN_ORDER_AMOUNT").ok(),
            env::var("RECOMMENDED_SLOT_PERCENT").ok(),
        )
    }

    fn from_values(min_order_amount: Option<String>, recommended_slot_percent: Option<String>) -> Self {
        let defaults = Self::default();
        let recommended_slot_percent =
            parse_or(recommended_slot_percent, defaults.recommended_slot_percent);

        Self {
            min_order_amount: parse_or(min_order_amount, defaults.min_order_amount),
            recommended_slot_percent: if recommended_slot_percent > 100 {
                tracing::warn!(
                    "RECOMMENDED_SLOT_PERCENT={} is above 100, using {}",
                    recommended_slot_percent,
                    defaults.recommended_slot_percent
                );
                defaults.recommended_slot_percent
            } else {
                recommended_slot_percent
            },
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
