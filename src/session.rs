//! Bill-splitting session: the mutable state behind the single screen.
//!
//! Holds the raw inputs (bill text, split count, slider position) and the
//! two derived outputs. Every mutator ends in [`BillSession::recompute`],
//! so the outputs always reflect the last processed edit. Callers never set
//! the outputs directly.

use tracing::debug;

use crate::calc::{compute_tip, compute_total_per_person};
use crate::types::{
    BillAmount, Breakdown, CalculatorConfig, MAX_TIP_PERCENT, SplitCount, TipPercentage,
    clamp_slider,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BillSession {
    config: CalculatorConfig,
    bill_text: String,
    bill: Option<BillAmount>,
    split: SplitCount,
    slider: f64,
    tip_percentage: TipPercentage,
    tip_amount: f64,
    total_per_person: f64,
}

impl BillSession {
    /// Empty bill, minimum split, slider at zero.
    pub fn new(config: CalculatorConfig) -> Self {
        let split = SplitCount::minimum(&config);
        BillSession {
            config,
            bill_text: String::new(),
            bill: None,
            split,
            slider: 0.0,
            tip_percentage: TipPercentage::default(),
            tip_amount: 0.0,
            total_per_person: 0.0,
        }
    }

    // ------------------------------------------------------------------------
    // Bill text
    // ------------------------------------------------------------------------

    /// Replace the bill text and recompute.
    pub fn set_bill_text(&mut self, text: impl Into<String>) {
        self.bill_text = text.into();
        self.recompute();
    }

    pub fn push_bill_char(&mut self, c: char) {
        self.bill_text.push(c);
        self.recompute();
    }

    pub fn pop_bill_char(&mut self) {
        self.bill_text.pop();
        self.recompute();
    }

    pub fn clear_bill(&mut self) {
        self.bill_text.clear();
        self.recompute();
    }

    /// Whether the "done" action on the bill field is accepted.
    pub fn bill_submittable(&self) -> bool {
        !self.bill_text.trim().is_empty()
    }

    /// Trimmed bill text, if it can be submitted.
    pub fn submitted_bill(&self) -> Option<&str> {
        self.bill_submittable().then(|| self.bill_text.trim())
    }

    /// Detail rows (split, tip, slider) are shown only once something is typed.
    pub fn detail_visible(&self) -> bool {
        self.bill_submittable()
    }

    // ------------------------------------------------------------------------
    // Split
    // ------------------------------------------------------------------------

    pub fn decrement_split(&mut self) {
        self.split = self.split.decrement(&self.config);
        self.recompute();
    }

    pub fn increment_split(&mut self) {
        self.split = self.split.increment(&self.config);
        self.recompute();
    }

    /// Set the split directly. Out-of-range counts are rejected and leave
    /// the session untouched.
    pub fn set_split(&mut self, count: u32) -> Result<(), String> {
        self.split = SplitCount::new(count, &self.config)?;
        self.recompute();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Slider
    // ------------------------------------------------------------------------

    /// Move the slider. The position is clamped to `[0.0, 1.0]` and the
    /// percentage is its truncated hundredfold.
    pub fn set_slider(&mut self, position: f64) {
        self.slider = clamp_slider(position);
        self.tip_percentage = TipPercentage::from_slider(self.slider);
        self.recompute();
    }

    /// Move the slider by `steps` increments of the configured tip step.
    pub fn nudge_slider(&mut self, steps: i32) {
        let delta = steps.saturating_mul(i32::from(self.config.tip_step_percent));
        let target = self
            .tip_percentage
            .as_percent()
            .saturating_add(delta)
            .clamp(0, i32::from(MAX_TIP_PERCENT));
        let tip = TipPercentage::new(target as u8).unwrap_or_default();
        self.set_slider(tip.slider_position());
    }

    // ------------------------------------------------------------------------
    // Recompute
    // ------------------------------------------------------------------------

    /// Re-derive the bill and both outputs from the current inputs.
    ///
    /// Without a usable bill both outputs are 0.0.
    pub fn recompute(&mut self) {
        self.bill = BillAmount::parse(&self.bill_text);
        match self.bill {
            Some(bill) => {
                let pct = self.tip_percentage.as_percent();
                self.tip_amount = compute_tip(bill.value(), pct);
                self.total_per_person =
                    compute_total_per_person(bill.value(), self.split.as_divisor(), pct);
            }
            None => {
                self.tip_amount = 0.0;
                self.total_per_person = 0.0;
            }
        }
        debug!(
            bill = ?self.bill.map(BillAmount::value),
            split = self.split.get(),
            tip_percentage = self.tip_percentage.get(),
            tip_amount = self.tip_amount,
            total_per_person = self.total_per_person,
            "recomputed"
        );
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn bill_text(&self) -> &str {
        &self.bill_text
    }

    pub fn bill(&self) -> Option<BillAmount> {
        self.bill
    }

    pub fn split(&self) -> SplitCount {
        self.split
    }

    pub fn slider(&self) -> f64 {
        self.slider
    }

    pub fn tip_percentage(&self) -> TipPercentage {
        self.tip_percentage
    }

    pub fn tip_amount(&self) -> f64 {
        self.tip_amount
    }

    pub fn total_per_person(&self) -> f64 {
        self.total_per_person
    }

    pub fn breakdown(&self) -> Breakdown {
        Breakdown {
            bill: self.bill.map(BillAmount::value),
            split: self.split.get(),
            tip_percentage: self.tip_percentage.get(),
            tip_amount: self.tip_amount,
            total_per_person: self.total_per_person,
        }
    }
}

impl Default for BillSession {
    fn default() -> Self {
        BillSession::new(CalculatorConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
