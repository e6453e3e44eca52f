//! Terminal-specific text formatting and styles.
//!
//! This module supports styling terminal appearance with ANSI SGR escape
//! sequences through [`Style`]s, which combine a [`Format`] of zero or more
//! [`Attribute`]s with an optional foreground
//! [`Colour`](crate::colour::Colour) and an optional background
//! [`Colour`](crate::colour::Colour).
//!
//! It also defines [`Layer`] to distinguish between foreground and background
//! colours as well as [`Difference`] to classify the transition between two
//! adjacent styles.
//!
//!
//! # The One-Two-Three of Styles
//!
//! The three steps for using styles are:
//!
//!  1. Fluently assemble a style by modifying the plain [`Style::default`].
//!  2. Apply the style to text with [`Style::paint`] or write its
//!     [`Style::prefix`] and [`Style::suffix`] yourself.
//!  3. When styles change from one span of text to the next, write only the
//!     [`Style::infix`] between them.
//!
//! The examples cover the same three steps.
//!
//!
//! # Examples
//!
//! ## Fluently Assemble Style
//!
//! Fluently assemble a style for bold, underlined red text:
//! ```
//! # use prettypaint::colour::Colour;
//! # use prettypaint::style::{Attribute, Style};
//! let style = Style::default()
//!     .bold()
//!     .fg(Colour::rgb(215, 40, 39))
//!     .underline();
//!
//! assert_eq!(style.format(), Attribute::Bold + Attribute::Underline);
//! assert_eq!(style.foreground(), Some(&Colour::rgb(215, 40, 39)));
//! assert_eq!(style.background(), None);
//! ```
//!
//! As demonstrated above, the order of method invocations does not matter when
//! assembling styles. If you set a colour more than once, the most recent
//! invocation wins.
//!
//!
//! ## Apply Style to Text
//!
//! Painting text brackets it with full resets, so that no earlier styling
//! bleeds into it:
//! ```
//! # use prettypaint::colour::Colour;
//! # use prettypaint::style::Style;
//! let style = Style::default().bold().fg(Colour::red());
//!
//! assert_eq!(style.paint("Wow!").to_string(), "\x1b[0m\x1b[1;31mWow!\x1b[0m");
//! assert_eq!(format!("{}Wow!{}", style.prefix(), style.suffix()), "\x1b[1;31mWow!\x1b[0m");
//! ```
//!
//!
//! ## Switch Between Styles
//!
//! Adding attributes only requires the new attributes. Removing one requires
//! a reset:
//! ```
//! # use prettypaint::style::Style;
//! let bold = Style::default().bold();
//! let bold_italic = bold.italic();
//!
//! assert_eq!(bold.infix(bold_italic).to_string(), "\x1b[3m");
//! assert_eq!(bold_italic.infix(bold).to_string(), "\x1b[0m\x1b[1m");
//! ```

mod context;
mod difference;
mod format;
mod fragment;
mod styling;

pub use context::Layer;
pub use difference::Difference;
pub use format::{Attribute, AttributeIter, Format};
pub use fragment::{Infix, Prefix, Suffix, RESET};
pub use styling::Style;
