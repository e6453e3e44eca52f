use std::borrow::Cow;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{Attribute, Format, Infix, Layer, Prefix, Suffix, RESET};
use crate::colour::Colour;
use crate::paint::Painted;

/// A terminal style.
///
/// A terminal style comprises text formatting, a foreground colour, and a
/// background colour. All three are optional. If none are provided, the style
/// is *plain* and denotes the default appearance. Since instances are
/// immutable, terminal styles can be arbitrarily reused: every builder method
/// returns a new style and leaves the receiver untouched.
///
/// ```
/// # use prettypaint::colour::Colour;
/// # use prettypaint::style::Style;
/// let base = Style::new().bold();
/// let alert = base.underline().fg(Colour::red()).on(Colour::blue());
///
/// assert_eq!(base.prefix().to_string(), "\x1b[1m");
/// assert_eq!(alert.prefix().to_string(), "\x1b[1;4;44;31m");
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettypaint.paint.style")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    format: Format,
    foreground: Option<Colour>,
    background: Option<Colour>,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Style {
    /// Create a new plain style. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new() -> Self {
        Self::default()
    }

    /// Create a new style with added bold formatting.
    pub fn bold(&self) -> Self {
        self.with(Attribute::Bold)
    }

    /// Create a new style with added dim formatting.
    pub fn dim(&self) -> Self {
        self.with(Attribute::Dim)
    }

    /// Create a new style with added italic formatting.
    pub fn italic(&self) -> Self {
        self.with(Attribute::Italic)
    }

    /// Create a new style with added underline formatting.
    pub fn underline(&self) -> Self {
        self.with(Attribute::Underline)
    }

    /// Create a new style with added blink formatting.
    pub fn blink(&self) -> Self {
        self.with(Attribute::Blink)
    }

    /// Create a new style with added reverse formatting.
    pub fn reverse(&self) -> Self {
        self.with(Attribute::Reverse)
    }

    /// Create a new style with added hidden formatting.
    pub fn hidden(&self) -> Self {
        self.with(Attribute::Hidden)
    }

    /// Create a new style with added strikethrough formatting.
    pub fn strikethrough(&self) -> Self {
        self.with(Attribute::Strikethrough)
    }

    /// Create a new style with the given attribute added.
    ///
    /// There is no way to remove an attribute from a style. Start over with
    /// [`Style::default`] instead.
    pub fn with(&self, attribute: Attribute) -> Self {
        Self {
            format: self.format.with(attribute),
            ..*self
        }
    }

    // Create a new style with the given foreground colour or none.
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "fg", signature = (colour=None))]
    pub fn py_fg(&self, colour: Option<Colour>) -> Self {
        self.fg(colour)
    }

    // Create a new style with the given background colour or none.
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "on", signature = (colour=None))]
    pub fn py_on(&self, colour: Option<Colour>) -> Self {
        self.on(colour)
    }

    /// Determine whether this style is plain, i.e., has no attributes and no
    /// colours.
    pub fn is_plain(&self) -> bool {
        self.format.is_empty() && self.foreground.is_none() && self.background.is_none()
    }

    /// Determine whether this style includes the attribute.
    pub fn has(&self, attribute: Attribute) -> bool {
        self.format.contains(attribute)
    }

    /// Get this style's formatting.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Get this style's foreground colour. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "foreground")]
    pub fn py_foreground(&self) -> Option<Colour> {
        self.foreground
    }

    /// Get this style's background colour. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "background")]
    pub fn py_background(&self) -> Option<Colour> {
        self.background
    }

    /// Get the escape sequence turning this style on. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "prefix")]
    pub fn py_prefix(&self) -> String {
        self.prefix().to_string()
    }

    /// Get the escape sequence turning this style off again. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "suffix")]
    pub fn py_suffix(&self) -> String {
        self.suffix().to_string()
    }

    /// Get the escape sequence switching from this style to the next one. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "infix")]
    pub fn py_infix(&self, next: &Style) -> String {
        self.infix(*next).to_string()
    }

    /// Paint the text with this style. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "paint")]
    pub fn py_paint(&self, text: &str) -> String {
        self.paint(text).to_string()
    }

    /// Get this style's debug representation. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Get this style's string representation. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Style {
    /// Create a new plain style.
    pub const fn new() -> Self {
        Self {
            format: Format::empty(),
            foreground: None,
            background: None,
        }
    }

    /// Create a new style with the given foreground colour.
    ///
    /// Passing `None` clears the foreground colour.
    pub fn fg<C: Into<Option<Colour>>>(&self, colour: C) -> Self {
        Self {
            foreground: colour.into(),
            ..*self
        }
    }

    /// Create a new style with the given background colour.
    ///
    /// Passing `None` clears the background colour.
    pub fn on<C: Into<Option<Colour>>>(&self, colour: C) -> Self {
        Self {
            background: colour.into(),
            ..*self
        }
    }

    /// Create a new style with the given background colour. This method is
    /// an alias for [`Style::on`].
    pub fn bg<C: Into<Option<Colour>>>(&self, colour: C) -> Self {
        self.on(colour)
    }

    /// Get this style's foreground colour.
    pub fn foreground(&self) -> Option<&Colour> {
        self.foreground.as_ref()
    }

    /// Get this style's background colour.
    pub fn background(&self) -> Option<&Colour> {
        self.background.as_ref()
    }

    /// Write the escape sequence turning this style on.
    ///
    /// This method writes nothing at all for a plain style. Otherwise, it
    /// writes a single SGR sequence with the attribute parameters in order,
    /// followed by the background and then the foreground colour.
    pub fn write_prefix<W: std::fmt::Write>(&self, f: &mut W) -> std::fmt::Result {
        if self.is_plain() {
            return Ok(());
        }

        let mut first = true;
        macro_rules! maybe_emit_semicolon {
            () => {
                if first {
                    #[allow(unused_assignments)]
                    {
                        first = false;
                    }
                } else {
                    f.write_str(";")?;
                }
            };
        }

        f.write_str("\x1b[")?;
        for attr in self.format.attributes() {
            maybe_emit_semicolon!();
            write!(f, "{}", attr.sgr())?;
        }
        if let Some(ref colour) = self.background {
            maybe_emit_semicolon!();
            colour.write_sgr_params(Layer::Background, f)?;
        }
        if let Some(ref colour) = self.foreground {
            maybe_emit_semicolon!();
            colour.write_sgr_params(Layer::Foreground, f)?;
        }
        f.write_str("m")
    }

    /// Write the escape sequence turning this style off again.
    ///
    /// This method writes the full reset unless this style is plain.
    pub fn write_suffix<W: std::fmt::Write>(&self, f: &mut W) -> std::fmt::Result {
        if self.is_plain() {
            Ok(())
        } else {
            f.write_str(RESET)
        }
    }

    /// Get a displayable prefix for this style.
    pub const fn prefix(self) -> Prefix {
        Prefix(self)
    }

    /// Get a displayable suffix for this style.
    pub const fn suffix(self) -> Suffix {
        Suffix(self)
    }

    /// Get a displayable transition from this style to the next style.
    ///
    /// See [`Difference`](super::Difference) for when the transition resets
    /// the terminal.
    pub const fn infix(self, next: Style) -> Infix {
        Infix(self, next)
    }

    /// Paint the text with this style.
    ///
    /// The result displays as full reset, prefix, text, and full reset, even
    /// when this style is plain. It thereby guarantees that no styling from
    /// earlier output bleeds into the text.
    pub fn paint<'a, S: Into<Cow<'a, str>>>(&self, text: S) -> Painted<'a> {
        Painted::new(*self, text)
    }
}

impl From<Attribute> for Style {
    fn from(value: Attribute) -> Self {
        Style::new().with(value)
    }
}

impl From<Format> for Style {
    fn from(value: Format) -> Self {
        Self {
            format: value,
            ..Style::new()
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_prefix(f)
    }
}

// ----------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_style() {
        use super::Attribute::*;

        let style = Style::default();
        assert!(style.is_plain());
        assert_eq!(style.format(), Format::default());
        assert_eq!(style.foreground(), None);
        assert_eq!(style.background(), None);
        assert_eq!(format!("{}", style), "");
        assert_eq!(style.suffix().to_string(), "");

        let style = style.bold().underline();
        assert!(!style.is_plain());
        assert_eq!(style.format(), Bold + Underline);
        assert!(style.has(Bold));
        assert!(!style.has(Italic));
        assert_eq!(format!("{}", style), "\x1b[1;4m");
        assert_eq!(style.suffix().to_string(), "\x1b[0m");

        let style = style.fg(Colour::red()).on(Colour::blue());
        assert_eq!(style.foreground(), Some(&Colour::red()));
        assert_eq!(style.background(), Some(&Colour::blue()));
        assert_eq!(format!("{}", style), "\x1b[1;4;44;31m");

        let style = style.fg(None).bg(None);
        assert_eq!(style, Style::from(Bold + Underline));
    }

    #[test]
    fn test_every_attribute() {
        let style = Style::new()
            .strikethrough()
            .hidden()
            .reverse()
            .blink()
            .underline()
            .italic()
            .dim()
            .bold()
            .fg(Colour::fixed(214))
            .on(Colour::rgb(1, 2, 3));
        assert_eq!(
            style.prefix().to_string(),
            "\x1b[1;2;3;4;5;7;8;9;48;2;1;2;3;38;5;214m"
        );
    }

    #[test]
    fn test_colours_only() {
        let style = Style::new().fg(Colour::green());
        assert!(!style.is_plain());
        assert_eq!(style.prefix().to_string(), "\x1b[32m");
        assert_eq!(style.suffix().to_string(), "\x1b[0m");

        let style = Style::new().on(Colour::default());
        assert_eq!(style.prefix().to_string(), "\x1b[49m");

        let style = Style::new().fg(Colour::bright_white()).on(Colour::black());
        assert_eq!(style.prefix().to_string(), "\x1b[40;97m");
    }

    #[test]
    fn test_immutability() {
        let base = Style::new().italic();
        let derived = base.bold().fg(Colour::cyan());

        assert_eq!(base, Style::from(Attribute::Italic));
        assert_ne!(base, derived);
        assert_eq!(derived.format(), Attribute::Italic + Attribute::Bold);

        // Setting an attribute twice has no further effect.
        assert_eq!(base.italic(), base);
    }

    #[test]
    fn test_paint() {
        let style = Style::new().bold().fg(Colour::red());
        assert_eq!(style.paint("x").to_string(), "\x1b[0m\x1b[1;31mx\x1b[0m");
        assert_eq!(style.paint("").to_string(), "\x1b[0m\x1b[1;31m\x1b[0m");
        assert_eq!(Style::new().paint("x").to_string(), "\x1b[0mx\x1b[0m");
    }

    #[test]
    fn test_write_into_string() -> std::fmt::Result {
        let style = Style::new().underline().fg(Colour::yellow());
        let mut buffer = String::new();
        style.write_prefix(&mut buffer)?;
        buffer.push_str("text");
        style.write_suffix(&mut buffer)?;
        assert_eq!(buffer, "\x1b[4;33mtext\x1b[0m");
        Ok(())
    }
}

#[cfg(test)]
mod proptests {
    use crate::style::RESET;
    use crate::test_util::arb_style;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn plain_iff_no_codes(style in arb_style()) {
            let prefix = style.prefix().to_string();
            let suffix = style.suffix().to_string();
            prop_assert_eq!(style.is_plain(), prefix.is_empty());
            prop_assert_eq!(style.is_plain(), suffix.is_empty());
        }

        #[test]
        fn prefix_is_a_single_sequence(style in arb_style()) {
            prop_assume!(!style.is_plain());
            let prefix = style.prefix().to_string();
            prop_assert!(prefix.starts_with("\x1b["));
            prop_assert!(prefix.ends_with('m'));
            prop_assert_eq!(prefix.matches('\x1b').count(), 1);
            prop_assert!(!prefix.contains("[;"));
            prop_assert!(!prefix.contains(";;"));
            prop_assert!(!prefix.contains(";m"));
        }

        #[test]
        fn painting_brackets_with_resets(style in arb_style(), text in "[a-z ]{0,12}") {
            let expected = format!("{}{}{}{}", RESET, style.prefix(), text, RESET);
            prop_assert_eq!(style.paint(text.as_str()).to_string(), expected);
        }
    }
}
