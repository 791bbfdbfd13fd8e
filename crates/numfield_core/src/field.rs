//! The numeric field itself: held text plus the reactive rules that keep
//! it a bounded signed integer.
//!
//! The field is driven by three host notifications (text changing, length
//! changed, scroll); each handler runs to completion synchronously and
//! mutates the held text through a single transition path, so no rule ever
//! re-raises a notification recursively. Termination is structural:
//! validation only ever reverts to previously accepted text and truncation
//! only ever shortens.

use crate::config::{FieldConfig, StepSizes};
use crate::error::ConfigError;
use crate::event::ScrollEvent;
use crate::text::{digit_bound, is_numeric_text, truncate_to};

/// A text-entry control restricted to a signed integer in `[min, max]`.
///
/// The held text is the sole mutable state; `min`, `max` and the default
/// value are fixed at construction. The maximum permitted text length (the
/// digit bound) is derived from the longer decimal representation of the
/// two bounds.
///
/// # Example
///
/// ```
/// use numfield_core::{FieldConfig, NumericField, ScrollEvent};
///
/// let mut field = NumericField::new(FieldConfig::new().initial_text("")).unwrap();
/// let value = field.on_scroll(ScrollEvent::vertical(1.0));
/// assert_eq!(value, 1);
/// assert_eq!(field.text(), "1");
/// ```
#[derive(Clone, Debug)]
pub struct NumericField {
    text: String,
    min: i64,
    max: i64,
    default_value: i64,
    digit_bound: usize,
    steps: StepSizes,
}

impl NumericField {
    /// Construct a field from a validated configuration.
    ///
    /// Fails when `min > max`, when the default value falls outside the
    /// range, or when the initial text is not numeric. The initial text
    /// runs through the same accept pipeline as a host edit, so an
    /// over-long initial value is truncated to the digit bound.
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            text: String::new(),
            min: config.min,
            max: config.max,
            default_value: config.default_value,
            digit_bound: digit_bound(config.min, config.max),
            steps: StepSizes::default(),
        };
        field.set_text(&config.initial_text);
        Ok(field)
    }

    /// Construct a field over `[min, max]` with the default initial text
    /// and default value.
    pub fn with_range(min: i64, max: i64) -> Result<Self, ConfigError> {
        Self::new(FieldConfig::new().min(min).max(max))
    }

    // =========================================================================
    // Notification handlers
    // =========================================================================

    /// Validator hook: the host proposes a replacement for the held text.
    ///
    /// A proposal that is not an optional minus sign followed by digits is
    /// rejected and the previously accepted text is kept; there is no
    /// error path. Returns the text the field holds afterwards, which the
    /// host should display.
    ///
    /// This runs before any other rule observes the new text; the
    /// truncator and stepper assume the pattern already holds.
    pub fn on_text_changing(&mut self, proposed: &str) -> &str {
        self.accept_text(proposed);
        &self.text
    }

    /// Truncator hook: fired after an accepted change grew the text.
    ///
    /// A shrinking change never truncates further. Truncation keeps the
    /// left-to-right prefix up to the digit bound; it is textual only and
    /// does not re-check that the prefix parses inside `[min, max]`.
    pub fn on_length_changed(&mut self, old_len: usize, new_len: usize) {
        if new_len <= old_len {
            return;
        }
        let kept = truncate_to(&self.text, self.digit_bound).len();
        if kept < self.text.len() {
            log::trace!(
                target: "numfield.truncate",
                "truncating {:?} to {} chars",
                self.text,
                self.digit_bound
            );
            self.text.truncate(kept);
        }
    }

    /// Stepper hook: a scroll notification changes the held value.
    ///
    /// Fills the default value first if the text is empty, parses the held
    /// text, applies the modifier-selected step from
    /// [`ScrollEvent::step_delta`], clamps to `[min, max]` (upper bound
    /// first, then lower), and writes the result back as decimal text.
    /// Returns the new value.
    ///
    /// # Panics
    ///
    /// Panics if the held text does not parse as an integer. The validator
    /// makes that unreachable for any complete number; the one held state
    /// that trips it is a lone minus sign, which the original control also
    /// treated as a programming error rather than a value.
    pub fn on_scroll(&mut self, event: ScrollEvent) -> i64 {
        self.fill_default_if_empty();
        let value = self.parse_held();
        let delta = event.step_delta(self.steps);
        let next = value.saturating_add(delta);
        // Upper bound first, then lower; the order only matters for a
        // misconfigured range, which construction already rejects.
        let next = next.min(self.max);
        let next = next.max(self.min);
        log::trace!(
            target: "numfield.step",
            "scroll {value} -> {next} (delta {delta})"
        );
        self.set_text(&next.to_string());
        next
    }

    /// The host set-text mechanism: validation, then truncation when the
    /// accepted text grew, as one synchronous transition.
    ///
    /// Returns the text the field holds afterwards.
    pub fn set_text(&mut self, proposed: &str) -> &str {
        let old_len = self.text.chars().count();
        if self.accept_text(proposed) {
            let new_len = self.text.chars().count();
            self.on_length_changed(old_len, new_len);
        }
        &self.text
    }

    // =========================================================================
    // Query surface
    // =========================================================================

    /// The held numeric value.
    ///
    /// Fills the default value first if the text is empty; that fill is
    /// observable through [`text`](Self::text).
    ///
    /// # Panics
    ///
    /// Same invariant as [`on_scroll`](Self::on_scroll): held text that
    /// cannot be parsed is a broken validator invariant.
    pub fn number(&mut self) -> i64 {
        self.fill_default_if_empty();
        self.parse_held()
    }

    /// The currently held text, as the host should render it.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    #[inline]
    pub fn default_value(&self) -> i64 {
        self.default_value
    }

    /// Maximum permitted character length of the held text.
    #[inline]
    pub fn digit_bound(&self) -> usize {
        self.digit_bound
    }

    #[inline]
    pub fn steps(&self) -> StepSizes {
        self.steps
    }

    /// Set the ctrl-modified step size. Not validated; a zero or negative
    /// step is taken at face value.
    pub fn set_variation_step(&mut self, step: i64) {
        self.steps.variation = step;
    }

    /// Set the shift-modified step size. Not validated.
    pub fn set_large_variation_step(&mut self, step: i64) {
        self.steps.large_variation = step;
    }

    // =========================================================================
    // Internal transitions
    // =========================================================================

    /// Replace the held text if the proposal matches the numeric pattern.
    /// Returns whether the proposal was accepted.
    fn accept_text(&mut self, proposed: &str) -> bool {
        if !is_numeric_text(proposed) {
            log::trace!(
                target: "numfield.validate",
                "rejected {proposed:?}, keeping {:?}",
                self.text
            );
            return false;
        }
        self.text.clear();
        self.text.push_str(proposed);
        true
    }

    /// Substitute the default value when the held text is empty.
    ///
    /// Routed through [`set_text`](Self::set_text) so the validator and
    /// truncator observe the substitution like any other change; both are
    /// no-ops on a well-formed default.
    fn fill_default_if_empty(&mut self) {
        if !self.text.is_empty() {
            return;
        }
        let filled = self.default_value.to_string();
        self.set_text(&filled);
    }

    fn parse_held(&self) -> i64 {
        match self.text.parse() {
            Ok(value) => value,
            Err(_) => panic!(
                "held text {:?} is not a parseable integer; the numeric-pattern invariant was broken",
                self.text
            ),
        }
    }
}

impl Default for NumericField {
    /// The original control's defaults: text `"0"`, range `[0, 100]`,
    /// default value 0.
    fn default() -> Self {
        Self {
            text: "0".to_string(),
            min: 0,
            max: 100,
            default_value: 0,
            digit_bound: digit_bound(0, 100),
            steps: StepSizes::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(min: i64, max: i64) -> NumericField {
        NumericField::with_range(min, max).unwrap()
    }

    #[test]
    fn rejected_text_keeps_previous_value() {
        let mut f = field(0, 100);
        f.set_text("12");
        assert_eq!(f.on_text_changing("12a"), "12");
        assert_eq!(f.text(), "12");
    }

    #[test]
    fn accepted_text_replaces_previous_value() {
        let mut f = field(0, 100);
        assert_eq!(f.on_text_changing("42"), "42");
        assert_eq!(f.on_text_changing("-"), "-");
        assert_eq!(f.on_text_changing(""), "");
    }

    #[test]
    fn growth_past_digit_bound_is_truncated() {
        let mut f = field(0, 9999);
        assert_eq!(f.digit_bound(), 4);
        assert_eq!(f.set_text("12345"), "1234");
    }

    #[test]
    fn shrinking_never_truncates() {
        let mut f = field(0, 9999);
        f.set_text("1234");
        // A direct length notification for a deletion must not touch text.
        f.on_length_changed(4, 2);
        assert_eq!(f.text(), "1234");
    }

    #[test]
    fn truncation_is_textual_not_numeric() {
        // "999" fits the 3-char bound of [0, 100] even though it exceeds
        // max; only length is bounded on edits.
        let mut f = field(0, 100);
        assert_eq!(f.set_text("999"), "999");
        assert_eq!(f.set_text("9999"), "999");
    }

    #[test]
    fn negative_bound_counts_the_minus_sign() {
        let mut f = field(-50, 50);
        assert_eq!(f.digit_bound(), 3);
        assert_eq!(f.set_text("-123"), "-12");
    }

    #[test]
    fn number_fills_default_when_empty() {
        let mut f = NumericField::new(
            FieldConfig::new().initial_text("").default_value(7).max(100),
        )
        .unwrap();
        assert_eq!(f.text(), "");
        assert_eq!(f.number(), 7);
        assert_eq!(f.text(), "7");
    }

    #[test]
    fn scroll_up_from_empty_fills_then_steps() {
        // min=0 max=100 default=0, empty text; one unmodified scroll up.
        let mut f = NumericField::new(FieldConfig::new().initial_text("")).unwrap();
        assert_eq!(f.on_scroll(ScrollEvent::vertical(1.0)), 1);
        assert_eq!(f.text(), "1");
    }

    #[test]
    fn scroll_clamps_at_max() {
        let mut f = field(-50, 50);
        f.set_text("50");
        assert_eq!(f.on_scroll(ScrollEvent::vertical(1.0)), 50);
        assert_eq!(f.text(), "50");
    }

    #[test]
    fn scroll_clamps_at_min() {
        let mut f = field(-50, 50);
        f.set_text("-50");
        assert_eq!(f.on_scroll(ScrollEvent::vertical(-1.0)), -50);
        assert_eq!(f.text(), "-50");
    }

    #[test]
    fn modifier_steps_apply_and_clamp() {
        let mut f = field(0, 100);
        f.set_text("10");
        assert_eq!(f.on_scroll(ScrollEvent::vertical(1.0).with_ctrl()), 15);
        assert_eq!(f.on_scroll(ScrollEvent::horizontal(1.0).with_shift()), 25);
        assert_eq!(f.on_scroll(ScrollEvent::horizontal(-1.0).with_shift()), 15);

        f.set_text("98");
        assert_eq!(f.on_scroll(ScrollEvent::vertical(1.0).with_ctrl()), 100);
    }

    #[test]
    fn step_setters_take_effect() {
        let mut f = field(0, 1000);
        f.set_text("0");
        f.set_variation_step(25);
        f.set_large_variation_step(100);
        assert_eq!(f.on_scroll(ScrollEvent::vertical(1.0).with_ctrl()), 25);
        assert_eq!(f.on_scroll(ScrollEvent::horizontal(1.0).with_shift()), 125);
    }

    #[test]
    fn stepped_value_never_leaves_range() {
        let mut f = field(-3, 3);
        f.set_text("");
        for i in 0..20 {
            let up = i % 3 != 0;
            let v = f.on_scroll(ScrollEvent::vertical(if up { 1.0 } else { -1.0 }));
            assert!((-3..=3).contains(&v), "value {v} escaped range");
            assert_eq!(f.text(), v.to_string());
        }
    }

    #[test]
    fn initial_text_runs_through_the_accept_pipeline() {
        let f = NumericField::new(FieldConfig::new().initial_text("0000")).unwrap();
        assert_eq!(f.text(), "000");
    }

    #[test]
    fn construction_rejects_inverted_range() {
        assert!(NumericField::with_range(1, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "numeric-pattern invariant")]
    fn lone_minus_sign_at_the_stepper_is_a_logic_error() {
        let mut f = field(-50, 50);
        f.set_text("-");
        f.on_scroll(ScrollEvent::vertical(1.0));
    }
}
