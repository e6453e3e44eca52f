//! # Pretty 🖌️ Paint
//!
//! Prettypaint writes the ANSI escape sequences for styled terminal text, and
//! it writes as few of them as possible.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Prettypaint's main abstractions are:
//!
//!   * [`Colour`](colour::Colour) is an immutable **colour descriptor**. It
//!     covers the sixteen [`AnsiColour`](colour::AnsiColour)s, the terminal's
//!     default colour, 256-colour indices, and 24-bit RGB colours.
//!   * [`Style`](style::Style) is an immutable **terminal style** that
//!     combines a text [`Format`](style::Format) of zero or more
//!     [`Attribute`](style::Attribute)s with optional foreground and
//!     background colours.
//!   * [`Difference`](style::Difference) classifies the **transition between
//!     two styles** as no change, a few added attributes, or a full reset.
//!   * [`Painted`](paint::Painted) and [`Spans`](paint::Spans) display
//!     **styled text**, with [`Spans`](paint::Spans) emitting only the
//!     transitions between adjacent spans.
//!
//! Everything is a pure value-to-text mapping. Prettypaint never writes to
//! the terminal and never queries it, so it is the caller's job to decide
//! whether a terminal supports the colours it asks for.
//!
//!
//! ## 2. One-Two-Three: Styles!
//!
//! ### i. Assemble Your Styles
//!
//! First, assemble your application's styles by modifying the plain
//! [`Style::default()`](style::Style::default).
//!
//! ```
//! # use prettypaint::colour::Colour;
//! # use prettypaint::style::Style;
//! // 1. Assemble application styles
//! let chic = Style::default()
//!     .bold()
//!     .underline()
//!     .fg(Colour::rgb(215, 40, 39));
//! ```
//!
//! ### ii. Paint Your Text
//!
//! Second, paint text with a style. The result displays as a full reset, the
//! style's prefix, the text, and another full reset.
//!
//! ```
//! # use prettypaint::colour::Colour;
//! # use prettypaint::style::Style;
//! # let chic = Style::default().bold().underline().fg(Colour::rgb(215, 40, 39));
//! // 2. Paint text
//! assert_eq!(
//!     chic.paint("Wow!").to_string(),
//!     "\x1b[0m\x1b[1;4;38;2;215;40;39mWow!\x1b[0m"
//! );
//! ```
//!
//! ### iii. Switch Styles Cheaply
//!
//! Third, when one span of text follows another, write only the
//! [`Infix`](style::Infix) between their styles. Adding attributes costs only
//! the added attributes, while removing attributes or colours costs a reset.
//!
//! ```
//! # use prettypaint::colour::Colour;
//! # use prettypaint::paint::Spans;
//! # use prettypaint::style::Style;
//! # let chic = Style::default().bold().underline().fg(Colour::rgb(215, 40, 39));
//! // 3. Render a run of spans
//! let spans = [chic.paint("Wow"), chic.italic().paint("!")];
//! assert_eq!(
//!     Spans(&spans).to_string(),
//!     "\x1b[0m\x1b[1;4;38;2;215;40;39mWow\x1b[3m!\x1b[0m"
//! );
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Prettypaint supports one feature flag:
//!
//!   - **`pyffi`** controls prettypaint's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

pub mod colour;
pub mod error;
pub mod paint;
pub mod style;

#[cfg(test)]
mod test_util;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "pyffi")]
use pyo3::types::PyDict;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
#[pyo3(name = "paint")]
pub fn paint_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let modpaint_name = m.name()?;
    let modpaint_name = modpaint_name.to_str()?;
    let modcolour_name = format!("{}.colour", modpaint_name);
    let modstyle_name = format!("{}.style", modpaint_name);

    // ------------------------------------------------------------------- paint.colour
    let modcolour = PyModule::new(m.py(), "colour")?;
    modcolour.add("__package__", modpaint_name)?;
    modcolour.add_class::<colour::AnsiColour>()?;
    modcolour.add_class::<colour::Colour>()?;
    m.add_submodule(&modcolour)?;

    // Only change __name__ attribute after submodule has been added.
    modcolour.setattr("__name__", &modcolour_name)?;

    // -------------------------------------------------------------------- paint.style
    let modstyle = PyModule::new(m.py(), "style")?;
    modstyle.add("__package__", modpaint_name)?;
    modstyle.add_class::<style::Attribute>()?;
    modstyle.add_class::<style::AttributeIter>()?;
    modstyle.add_class::<style::Format>()?;
    modstyle.add_class::<style::Layer>()?;
    modstyle.add_class::<style::Style>()?;
    modstyle.add("RESET", style::RESET)?;
    m.add_submodule(&modstyle)?;

    // Only change __name__ attribute after submodule has been added.
    modstyle.setattr("__name__", &modstyle_name)?;

    // -------------------------------------------------------------------- sys.modules
    let py_modules: Bound<'_, PyDict> = PyModule::import(m.py(), "sys")?
        .getattr("modules")?
        .downcast_into()?;
    py_modules.set_item(&modcolour_name, modcolour)?;
    py_modules.set_item(&modstyle_name, modstyle)?;

    Ok(())
}
