//! Painted text and runs of painted spans.
//!
//! A [`Painted`] value is a span of text together with its [`Style`]. On its
//! own, it displays bracketed by full resets. [`Spans`] displays a whole run
//! of painted spans, writing only the transitions between adjacent styles:
//!
//! ```
//! # use prettypaint::colour::Colour;
//! # use prettypaint::paint::Spans;
//! # use prettypaint::style::Style;
//! let bold = Style::new().bold();
//! let spans = [
//!     bold.paint("one "),
//!     bold.underline().paint("two "),
//!     bold.paint("three"),
//! ];
//!
//! assert_eq!(
//!     Spans(&spans).to_string(),
//!     "\x1b[0m\x1b[1mone \x1b[4mtwo \x1b[0m\x1b[1mthree\x1b[0m"
//! );
//! ```
//!
//! Since [`Difference`](crate::style::Difference) ignores colour changes that
//! remove no colour, a run only switches colours when the boundary also
//! resets.
use std::borrow::Cow;

use crate::style::{Style, RESET};

/// A span of text painted with a style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Painted<'a> {
    style: Style,
    text: Cow<'a, str>,
}

impl<'a> Painted<'a> {
    /// Create a new painted span.
    pub fn new<S: Into<Cow<'a, str>>>(style: Style, text: S) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// Get the style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Get the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume this span and return the text.
    pub fn into_text(self) -> Cow<'a, str> {
        self.text
    }
}

impl std::fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(RESET)?;
        self.style.write_prefix(f)?;
        f.write_str(&self.text)?;
        f.write_str(RESET)
    }
}

/// A displayable run of painted spans.
///
/// The run starts with a full reset and the first span's prefix. Each
/// following span is preceded by the [`Infix`](crate::style::Infix) from the
/// previous span's style. The run ends with a full reset. An empty run
/// displays as the empty string.
#[derive(Clone, Copy, Debug)]
pub struct Spans<'a, 'b>(pub &'a [Painted<'b>]);

impl std::fmt::Display for Spans<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some((first, rest)) = self.0.split_first() else {
            return Ok(());
        };

        f.write_str(RESET)?;
        first.style.write_prefix(f)?;
        f.write_str(&first.text)?;

        let mut previous = first.style;
        for span in rest {
            write!(f, "{}", previous.infix(span.style))?;
            f.write_str(&span.text)?;
            previous = span.style;
        }

        f.write_str(RESET)
    }
}

/// Concatenate the text of all spans without any styling.
pub fn unstyle(spans: &[Painted<'_>]) -> String {
    let mut text = String::with_capacity(unstyled_len(spans));
    for span in spans {
        text.push_str(&span.text);
    }
    text
}

/// Determine the length in bytes of all spans' text without any styling.
pub fn unstyled_len(spans: &[Painted<'_>]) -> usize {
    spans.iter().map(|span| span.text.len()).sum()
}

#[cfg(test)]
mod test {
    use super::{unstyle, unstyled_len, Painted, Spans};
    use crate::colour::Colour;
    use crate::style::Style;

    #[test]
    fn test_painted() {
        let style = Style::new().bold().fg(Colour::red());
        let painted = style.paint("x");
        assert_eq!(painted.style(), &style);
        assert_eq!(painted.text(), "x");
        assert_eq!(painted.to_string(), "\x1b[0m\x1b[1;31mx\x1b[0m");

        let owned = Style::new().paint(String::from("owned"));
        assert_eq!(owned.to_string(), "\x1b[0mowned\x1b[0m");
        assert_eq!(owned.into_text(), "owned");
    }

    #[test]
    fn test_empty_run() {
        assert_eq!(Spans(&[]).to_string(), "");
        assert_eq!(unstyle(&[]), "");
        assert_eq!(unstyled_len(&[]), 0);
    }

    #[test]
    fn test_single_span() {
        let spans = [Colour::green().paint("go")];
        assert_eq!(Spans(&spans).to_string(), spans[0].to_string());
    }

    #[test]
    fn test_run() {
        let plain = Style::new();
        let bold = plain.bold();
        let spans = [
            plain.paint("a"),
            bold.paint("b"),
            bold.paint("c"),
            bold.italic().paint("d"),
            plain.paint("e"),
        ];

        assert_eq!(
            Spans(&spans).to_string(),
            "\x1b[0ma\x1b[1mbc\x1b[3md\x1b[0me\x1b[0m"
        );
        assert_eq!(unstyle(&spans), "abcde");
        assert_eq!(unstyled_len(&spans), 5);
    }

    #[test]
    fn test_run_with_reset_reapplies_colour() {
        let spans = [
            Colour::red().foreground().underline().paint("one"),
            Colour::blue().foreground().paint("two"),
        ];

        assert_eq!(
            Spans(&spans).to_string(),
            "\x1b[0m\x1b[4;31mone\x1b[0m\x1b[34mtwo\x1b[0m"
        );
    }

    #[test]
    fn test_run_with_colour_only_change() {
        let spans = [
            Colour::red().paint("one"),
            Colour::blue().paint("two"),
        ];

        assert_eq!(
            Spans(&spans).to_string(),
            "\x1b[0m\x1b[31monetwo\x1b[0m"
        );
    }
}
