//! Breakdown formatting.
//!
//! Pure functions: (Breakdown, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::config::ConfigSource;
use crate::types::{Breakdown, CalculatorConfig, OutputFormat};

/// Format an amount with the currency symbol and two decimals.
pub fn format_money(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Format a breakdown for output.
pub fn format_breakdown(breakdown: &Breakdown, format: OutputFormat, symbol: &str) -> String {
    match format {
        OutputFormat::Human => format_human(breakdown, symbol),
        OutputFormat::Json => to_json(breakdown),
    }
}

/// Format the effective configuration and where it came from.
pub fn format_config(
    config: &CalculatorConfig,
    source: &ConfigSource,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Human => {
            let mut out = String::new();
            out.push_str(&format!("Source:           {}\n", source));
            out.push_str(&format!(
                "Split range:      {}..={}\n",
                config.split_min, config.split_max
            ));
            out.push_str(&format!("Tip step:         {}%\n", config.tip_step_percent));
            out.push_str(&format!("Slider stops:     {}\n", config.slider_steps));
            out.push_str(&format!("Currency symbol:  {}\n", config.currency_symbol));
            out
        }
        OutputFormat::Json => to_json(config),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(breakdown: &Breakdown, symbol: &str) -> String {
    let mut out = String::new();

    out.push_str("=== Total Per Person ===\n");
    out.push_str(&format!(
        "{}\n\n",
        format_money(breakdown.total_per_person, symbol)
    ));

    // Detail is meaningless without a bill
    let Some(bill) = breakdown.bill else {
        out.push_str("No bill entered.\n");
        return out;
    };

    out.push_str("=== Detail ===\n");
    out.push_str(&format!("Bill:             {}\n", format_money(bill, symbol)));
    out.push_str(&format!("Split:            {}\n", breakdown.split));
    out.push_str(&format!("Tip:              {}%\n", breakdown.tip_percentage));
    out.push_str(&format!(
        "Tip amount:       {}\n",
        format_money(breakdown.tip_amount, symbol)
    ));

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // Plain structs of numbers and strings always serialize
        panic!("Failed to serialize to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_breakdown() -> Breakdown {
        Breakdown {
            bill: Some(100.0),
            split: 4,
            tip_percentage: 20,
            tip_amount: 20.0,
            total_per_person: 30.0,
        }
    }

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(30.0, "£"), "£30.00");
        assert_eq!(format_money(33.3333, "£"), "£33.33");
        assert_eq!(format_money(0.0, "$"), "$0.00");
    }

    // --- Human format tests ---

    #[test]
    fn human_format_leads_with_total() {
        let output = format_breakdown(&sample_breakdown(), OutputFormat::Human, "£");
        assert!(output.starts_with("=== Total Per Person ===\n£30.00\n"));
    }

    #[test]
    fn human_format_includes_detail() {
        let output = format_breakdown(&sample_breakdown(), OutputFormat::Human, "£");
        assert!(output.contains("Bill:             £100.00"));
        assert!(output.contains("Split:            4"));
        assert!(output.contains("Tip:              20%"));
        assert!(output.contains("Tip amount:       £20.00"));
    }

    #[test]
    fn human_format_without_bill_hides_detail() {
        let breakdown = Breakdown {
            bill: None,
            split: 1,
            tip_percentage: 0,
            tip_amount: 0.0,
            total_per_person: 0.0,
        };
        let output = format_breakdown(&breakdown, OutputFormat::Human, "£");
        assert!(output.contains("£0.00"));
        assert!(output.contains("No bill entered."));
        assert!(!output.contains("=== Detail ==="));
    }

    // --- JSON format tests ---

    #[test]
    fn json_format_has_expected_fields() {
        let output = format_breakdown(&sample_breakdown(), OutputFormat::Json, "£");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");

        assert_eq!(parsed["bill"], 100.0);
        assert_eq!(parsed["split"], 4);
        assert_eq!(parsed["tip_percentage"], 20);
        assert_eq!(parsed["tip_amount"], 20.0);
        assert_eq!(parsed["total_per_person"], 30.0);
    }

    #[test]
    fn json_format_missing_bill_is_null() {
        let breakdown = Breakdown {
            bill: None,
            ..sample_breakdown()
        };
        let output = format_breakdown(&breakdown, OutputFormat::Json, "£");
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["bill"].is_null());
    }

    #[test]
    fn config_human_format_names_source() {
        let source = ConfigSource::File(PathBuf::from("/etc/tip.json"));
        let output = format_config(&CalculatorConfig::default(), &source, OutputFormat::Human);
        assert!(output.contains("Source:           /etc/tip.json"));
        assert!(output.contains("Split range:      1..=100"));
        assert!(output.contains("Slider stops:     5"));
    }

    #[test]
    fn config_json_round_trips_values() {
        let source = ConfigSource::Defaults {
            looked_for: PathBuf::from("/nowhere"),
        };
        let output = format_config(&CalculatorConfig::default(), &source, OutputFormat::Json);
        let parsed: CalculatorConfig = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, CalculatorConfig::default());
    }
}
