use super::{Difference, Style};

/// The code to send to reset all styles and return to the default appearance.
pub const RESET: &str = "\x1b[0m";

/// A displayable style prefix, i.e., the sequence turning a style on.
///
/// It writes nothing for a plain style. See [`Style::prefix`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefix(pub(crate) Style);

/// A displayable transition between two styles.
///
/// Depending on the [`Difference`] between the two styles, it writes nothing,
/// only the newly added attributes, or a full reset followed by the next
/// style's prefix. See [`Style::infix`].
///
/// ```
/// # use prettypaint::colour::Colour;
/// # use prettypaint::style::Style;
/// let bold = Style::new().bold();
/// let bold_red = bold.fg(Colour::red());
///
/// assert_eq!(bold.infix(bold).to_string(), "");
/// assert_eq!(bold.infix(bold.italic()).to_string(), "\x1b[3m");
/// assert_eq!(bold_red.infix(bold).to_string(), "\x1b[0m\x1b[1m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Infix(pub(crate) Style, pub(crate) Style);

/// A displayable style suffix, i.e., the sequence turning a style off again.
///
/// It writes nothing for a plain style. See [`Style::suffix`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suffix(pub(crate) Style);

impl Infix {
    /// Get the difference underlying this transition.
    pub fn difference(&self) -> Difference {
        Difference::between(&self.0, &self.1)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.write_prefix(f)
    }
}

impl std::fmt::Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.difference() {
            Difference::ExtraStyles(extra) => extra.write_prefix(f),
            Difference::Reset => {
                f.write_str(RESET)?;
                self.1.write_prefix(f)
            }
            Difference::NoDifference => Ok(()),
        }
    }
}

impl std::fmt::Display for Suffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.write_suffix(f)
    }
}
