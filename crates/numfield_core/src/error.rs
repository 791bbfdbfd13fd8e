//! Construction-time configuration errors.

use std::fmt;

/// A field configuration the core refuses to construct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The lower bound exceeds the upper bound.
    MinExceedsMax { min: i64, max: i64 },
    /// The default value falls outside `[min, max]`.
    DefaultOutOfRange { value: i64, min: i64, max: i64 },
    /// The initial text does not match the numeric pattern.
    InitialTextNotNumeric { text: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MinExceedsMax { min, max } => {
                write!(f, "min {min} exceeds max {max}")
            }
            ConfigError::DefaultOutOfRange { value, min, max } => {
                write!(f, "default value {value} is outside [{min}, {max}]")
            }
            ConfigError::InitialTextNotNumeric { text } => {
                write!(f, "initial text {text:?} is not an optional minus sign followed by digits")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_violation() {
        let err = ConfigError::MinExceedsMax { min: 5, max: 1 };
        assert_eq!(err.to_string(), "min 5 exceeds max 1");

        let err = ConfigError::DefaultOutOfRange {
            value: -1,
            min: 0,
            max: 9,
        };
        assert_eq!(err.to_string(), "default value -1 is outside [0, 9]");
    }
}
