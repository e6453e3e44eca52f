//! Utility module with prettypaint's errors.
//!
//! Rendering styles never fails. The errors below only arise from the opt-in
//! checked constructors and conversions.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates a value that is out of bounds for some range. The
/// ranges used by this crate include:
///
///   * `0..=15` for index values of [`AnsiColour`](crate::colour::AnsiColour);
///   * `0..=255` for the index of
///     [`Colour::try_fixed`](crate::colour::Colour::try_fixed) and the
///     coordinates of [`Colour::try_rgb`](crate::colour::Colour::try_rgb).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: i64,
    pub expected: std::ops::RangeInclusive<i64>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<i64>>(value: V, expected: std::ops::RangeInclusive<i64>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An unknown colour name.
///
/// [`Colour`](crate::colour::Colour)'s implementation of
/// [`FromStr`](std::str::FromStr) recognizes the names of the sixteen ANSI
/// colours, `purple` and `bright purple` as aliases for magenta, as well as
/// `default` and `reset`. It returns this error for all other strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColourNameError {
    name: String,
}

impl ColourNameError {
    /// Create a new colour name error.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// Get the unrecognized name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for ColourNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` should be the name of an ANSI colour but is not", self.name)
    }
}

impl std::error::Error for ColourNameError {}

#[cfg(feature = "pyffi")]
impl From<ColourNameError> for PyErr {
    fn from(value: ColourNameError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColourNameError, OutOfBoundsError};

    #[test]
    fn test_messages() {
        let error = OutOfBoundsError::new(256, 0..=255);
        assert_eq!(error.to_string(), "256 does not fit into range 0..=255");

        let error = OutOfBoundsError::new(-1_i32, 0..=15);
        assert_eq!(error.value, -1);
        assert_eq!(error.to_string(), "-1 does not fit into range 0..=15");

        let error = ColourNameError::new("mauve");
        assert_eq!(error.name(), "mauve");
        assert_eq!(
            error.to_string(),
            "`mauve` should be the name of an ANSI colour but is not"
        );
    }
}
