//! Crate-wide error type.

use std::error::Error;
use std::fmt;

/// Errors produced by wheel generation, projection, and rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A structural parameter is out of range (e.g. zero wheel resolution).
    InvalidParameter { what: &'static str, value: i64 },
    /// A LAB component is out of its documented range, or numeric text
    /// at the input boundary failed to parse.
    InvalidInput { what: String },
    /// A rendering-surface failure. Never raised by the pure core.
    Render(String),
}

impl ChartError {
    pub(crate) fn component_out_of_range(component: &str, value: f64, min: f64, max: f64) -> Self {
        ChartError::InvalidInput {
            what: format!("{component} = {value} outside [{min}, {max}]"),
        }
    }

    pub(crate) fn unparseable(component: &str, raw: &str) -> Self {
        ChartError::InvalidInput {
            what: format!("{component} = {raw:?} is not a number"),
        }
    }
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::InvalidParameter { what, value } => {
                write!(f, "invalid parameter: {what} = {value}")
            }
            ChartError::InvalidInput { what } => write!(f, "invalid input: {what}"),
            ChartError::Render(msg) => write!(f, "render failed: {msg}"),
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offender() {
        let err = ChartError::component_out_of_range("L*", 150.0, 0.0, 100.0);
        assert_eq!(err.to_string(), "invalid input: L* = 150 outside [0, 100]");

        let err = ChartError::unparseable("a*", "abc");
        assert_eq!(err.to_string(), "invalid input: a* = \"abc\" is not a number");

        let err = ChartError::InvalidParameter {
            what: "resolution",
            value: 0,
        };
        assert_eq!(err.to_string(), "invalid parameter: resolution = 0");
    }
}
