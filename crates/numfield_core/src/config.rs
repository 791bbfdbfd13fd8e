//! Field construction configuration.

use crate::error::ConfigError;
use crate::text::is_numeric_text;

/// Construction-time configuration for a numeric field.
///
/// All values are optional; the defaults are initial text `"0"` with a
/// range of `[0, 100]` and a default value of `0`.
///
/// ```
/// use numfield_core::FieldConfig;
///
/// let config = FieldConfig::new().min(-50).max(50).default_value(0);
/// assert_eq!(config.min, -50);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Text the field holds before any edit.
    pub initial_text: String,
    /// Lower bound of the accepted value range (inclusive).
    pub min: i64,
    /// Upper bound of the accepted value range (inclusive).
    pub max: i64,
    /// Value substituted when the held text is empty.
    pub default_value: i64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            initial_text: "0".to_string(),
            min: 0,
            max: 100,
            default_value: 0,
        }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    pub fn default_value(mut self, value: i64) -> Self {
        self.default_value = value;
        self
    }

    /// Check the configuration for contract violations.
    ///
    /// An inverted range or a default value outside it would otherwise
    /// propagate silently through the clamping logic, so construction
    /// rejects both up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::MinExceedsMax {
                min: self.min,
                max: self.max,
            });
        }
        if self.default_value < self.min || self.default_value > self.max {
            return Err(ConfigError::DefaultOutOfRange {
                value: self.default_value,
                min: self.min,
                max: self.max,
            });
        }
        if !is_numeric_text(&self.initial_text) {
            return Err(ConfigError::InitialTextNotNumeric {
                text: self.initial_text.clone(),
            });
        }
        Ok(())
    }
}

/// The magnitudes by which a scroll notification changes the held value,
/// selected by modifier-key state.
///
/// The unmodified single-notch amount is always 1; only the two
/// modifier-selected sizes are configurable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepSizes {
    /// Step taken while ctrl is held.
    pub variation: i64,
    /// Step taken while shift is held.
    pub large_variation: i64,
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            variation: 5,
            large_variation: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = FieldConfig::new().min(10).max(5).validate().unwrap_err();
        assert!(matches!(err, ConfigError::MinExceedsMax { min: 10, max: 5 }));
    }

    #[test]
    fn default_value_outside_range_is_rejected() {
        let err = FieldConfig::new()
            .min(1)
            .max(10)
            .default_value(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DefaultOutOfRange { value: 0, .. }));
    }

    #[test]
    fn non_numeric_initial_text_is_rejected() {
        let err = FieldConfig::new()
            .initial_text("abc")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InitialTextNotNumeric { .. }));
    }

    #[test]
    fn empty_initial_text_is_allowed() {
        // Empty text is a valid held state; the default fill kicks in on
        // the first read or step.
        assert!(FieldConfig::new().initial_text("").validate().is_ok());
    }
}
