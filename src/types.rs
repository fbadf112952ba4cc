//! Domain types for tip-split.
//!
//! Inputs are kept the way the presentation shell receives them (raw text,
//! slider position, head count). Numeric values are derived from those,
//! and outputs are only ever produced by the calculators.

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Lowest split count a session may reach.
pub const DEFAULT_SPLIT_MIN: u32 = 1;

/// Highest split count a session may reach.
pub const DEFAULT_SPLIT_MAX: u32 = 100;

/// Percentage moved per keyboard nudge of the slider.
pub const DEFAULT_TIP_STEP_PERCENT: u8 = 1;

/// Number of discrete stops the slider reports. Cosmetic only: it does not
/// divide the 1% resolution evenly and never feeds a calculation.
pub const DEFAULT_SLIDER_STEPS: u32 = 5;

/// Currency symbol used when formatting amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// Inclusive slider domain.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 1.0;

/// Highest tip percentage the slider can produce.
pub const MAX_TIP_PERCENT: u8 = 100;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// A bill amount parsed from free text.
///
/// Only finite, strictly positive numbers produce a value. Anything else
/// (empty, whitespace, garbage, negative, zero, NaN, infinity) means
/// "no bill entered", which is different from a bill of zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BillAmount(f64);

impl BillAmount {
    /// Parse user text. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let value: f64 = trimmed.parse().ok()?;
        if value.is_finite() && value > 0.0 {
            Some(BillAmount(value))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Number of people sharing the bill.
///
/// Always inside the configured range, so never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SplitCount(u32);

impl SplitCount {
    /// Build a count, rejecting values outside `[split_min, split_max]`.
    pub fn new(count: u32, config: &CalculatorConfig) -> Result<Self, String> {
        if count < config.split_min || count > config.split_max {
            return Err(format!(
                "Split count {} is outside {}..={}",
                count, config.split_min, config.split_max
            ));
        }
        Ok(SplitCount(count))
    }

    /// Count requested on the command line, or the configured minimum
    /// when none was given.
    pub fn resolve(requested: Option<u32>, config: &CalculatorConfig) -> Result<Self, String> {
        match requested {
            Some(count) => SplitCount::new(count, config),
            None => Ok(SplitCount::minimum(config)),
        }
    }

    /// The lowest count allowed by `config`.
    pub fn minimum(config: &CalculatorConfig) -> Self {
        SplitCount(config.split_min.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Divisor handed to the calculator.
    pub fn as_divisor(self) -> i32 {
        i32::try_from(self.0).unwrap_or(i32::MAX)
    }

    /// One fewer person, stopping at the configured minimum.
    pub fn decrement(self, config: &CalculatorConfig) -> Self {
        SplitCount(self.0.saturating_sub(1).max(config.split_min).max(1))
    }

    /// One more person, stopping at the configured maximum.
    pub fn increment(self, config: &CalculatorConfig) -> Self {
        SplitCount(self.0.saturating_add(1).min(config.split_max))
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        SplitCount(DEFAULT_SPLIT_MIN)
    }
}

/// Whole-number tip percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TipPercentage(u8);

impl TipPercentage {
    pub fn new(percent: u8) -> Result<Self, String> {
        if percent > MAX_TIP_PERCENT {
            return Err(format!(
                "Tip percentage {} is above {}",
                percent, MAX_TIP_PERCENT
            ));
        }
        Ok(TipPercentage(percent))
    }

    /// Derive the percentage from a slider position.
    ///
    /// The position is clamped to the slider domain, multiplied by 100 and
    /// truncated. The truncation is taken on the f64 product, so a position
    /// of 0.29 yields 28.
    pub fn from_slider(position: f64) -> Self {
        let clamped = clamp_slider(position);
        TipPercentage((clamped * 100.0) as u8)
    }

    /// Centre of the slider band that truncates back to this percentage.
    pub fn slider_position(self) -> f64 {
        ((f64::from(self.0) + 0.5) / 100.0).min(SLIDER_MAX)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_percent(self) -> i32 {
        i32::from(self.0)
    }
}

/// Clamp a slider position into `[0.0, 1.0]`. NaN lands on 0.0.
pub fn clamp_slider(position: f64) -> f64 {
    if position.is_nan() {
        SLIDER_MIN
    } else {
        position.clamp(SLIDER_MIN, SLIDER_MAX)
    }
}

// ============================================================================
// STRUCTS
// ============================================================================

/// Snapshot of a session: the inputs it holds and the values derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    /// Parsed bill, None when nothing usable was entered.
    pub bill: Option<f64>,
    /// People sharing the bill.
    pub split: u32,
    /// Tip percentage in whole percent.
    pub tip_percentage: u8,
    /// Tip on the whole bill.
    pub tip_amount: f64,
    /// (bill + tip) / split.
    pub total_per_person: f64,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for breakdowns and config dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Ranges and steps the presentation shell works within.
///
/// Passed explicitly to every operation that needs a bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Lowest split count (inclusive).
    pub split_min: u32,
    /// Highest split count (inclusive).
    pub split_max: u32,
    /// Percentage moved per slider nudge.
    pub tip_step_percent: u8,
    /// Number of discrete slider stops reported to the display.
    pub slider_steps: u32,
    /// Symbol prefixed to formatted amounts.
    pub currency_symbol: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            split_min: DEFAULT_SPLIT_MIN,
            split_max: DEFAULT_SPLIT_MAX,
            tip_step_percent: DEFAULT_TIP_STEP_PERCENT,
            slider_steps: DEFAULT_SLIDER_STEPS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Slider percentage is the floor of the hundredfold position.
        #[test]
        fn slider_percentage_is_truncated_hundredfold(position in 0.0f64..=1.0) {
            let tip = TipPercentage::from_slider(position);
            prop_assert_eq!(tip.get(), (position * 100.0).floor() as u8);
        }

        /// Every split reachable by stepping stays inside the configured range.
        #[test]
        fn stepping_stays_in_range(
            min in 1u32..=10,
            span in 0u32..=20,
            steps in proptest::collection::vec(any::<bool>(), 0..60),
        ) {
            let config = CalculatorConfig {
                split_min: min,
                split_max: min + span,
                ..Default::default()
            };
            let mut split = SplitCount::minimum(&config);
            for up in steps {
                split = if up { split.increment(&config) } else { split.decrement(&config) };
                prop_assert!(split.get() >= config.split_min);
                prop_assert!(split.get() <= config.split_max);
            }
        }
    }
}
