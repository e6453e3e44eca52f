//! Terminal colour representations.
//!
//! This module offers [`AnsiColour`] as the catalog of the sixteen named
//! terminal colours and [`Colour`] as the opaque colour descriptor used by
//! [`Style`](crate::style::Style). A colour descriptor is nothing more than the
//! pair of SGR parameters that select it as foreground or background colour:
//!
//! ```
//! # use prettypaint::colour::Colour;
//! assert_eq!(Colour::red().foreground_code(), "31");
//! assert_eq!(Colour::bright_red().background_code(), "101");
//! assert_eq!(Colour::fixed(214).foreground_code(), "38;5;214");
//! assert_eq!(Colour::rgb(1, 2, 3).background_code(), "48;2;1;2;3");
//! ```
//!
//! The numeric constructors [`Colour::fixed`] and [`Colour::rgb`] do not
//! validate their arguments. Whether a terminal can display a colour is up to
//! the terminal. [`Colour::try_fixed`] and [`Colour::try_rgb`] are the checked
//! alternatives.
use std::borrow::Cow;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::{ColourNameError, OutOfBoundsError};
use crate::paint::Painted;
use crate::style::{Layer, Style};

// ====================================================================================================================
// Ansi Colour
// ====================================================================================================================

/// The 16 extended ANSI colours.
///
/// Rust code converts between 4-bit indices and enumeration variants with
/// [`AnsiColour as
/// TryFrom<u8>`](enum.AnsiColour.html#impl-TryFrom%3Cu8%3E-for-AnsiColour)
/// and `as u8`. The colours are ordered by index.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "prettypaint.paint.colour")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColour {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColour {
    const ALL: [AnsiColour; 16] = {
        use AnsiColour::*;
        [
            Black,
            Red,
            Green,
            Yellow,
            Blue,
            Magenta,
            Cyan,
            White,
            BrightBlack,
            BrightRed,
            BrightGreen,
            BrightYellow,
            BrightBlue,
            BrightMagenta,
            BrightCyan,
            BrightWhite,
        ]
    };

    /// Get an iterator over all ANSI colours in order.
    pub fn all() -> std::array::IntoIter<AnsiColour, 16> {
        Self::ALL.into_iter()
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl AnsiColour {
    /// Get a list with all ANSI colours in order. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "all")]
    #[staticmethod]
    pub fn py_all() -> Vec<AnsiColour> {
        Self::ALL.to_vec()
    }

    /// Instantiate an ANSI colour from its index. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn try_from_index(value: u8) -> Result<Self, OutOfBoundsError> {
        Self::try_from(value)
    }

    /// Determine whether this ANSI colour is bright.
    pub const fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Get the base version of this ANSI colour.
    ///
    /// If this colour is bright, this method returns its non-bright version.
    /// Otherwise, it returns the same colour.
    pub const fn to_base(&self) -> AnsiColour {
        Self::ALL[(*self as usize) % 8]
    }

    /// Get the bright version of this ANSI colour.
    ///
    /// If the colour is not bright, this method returns its bright version.
    /// Otherwise, it returns the same colour.
    pub const fn to_bright(&self) -> AnsiColour {
        Self::ALL[(*self as usize) % 8 + 8]
    }

    /// Get this ANSI colour's name.
    ///
    /// This method returns the human-readable name, e.g., `"bright green"` for
    /// [`AnsiColour::BrightGreen`].
    pub const fn name(&self) -> &'static str {
        use AnsiColour::*;

        match self {
            Black => "black",
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            Magenta => "magenta",
            Cyan => "cyan",
            White => "white",
            BrightBlack => "bright black",
            BrightRed => "bright red",
            BrightGreen => "bright green",
            BrightYellow => "bright yellow",
            BrightBlue => "bright blue",
            BrightMagenta => "bright magenta",
            BrightCyan => "bright cyan",
            BrightWhite => "bright white",
        }
    }
}

impl TryFrom<u8> for AnsiColour {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| OutOfBoundsError::new(value, 0..=15))
    }
}

// ====================================================================================================================
// Colour
// ====================================================================================================================

// Derived equality on this representation coincides with equality of the
// generated codes: no two variants ever produce the same pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Kind {
    Default,
    Reset,
    Ansi(AnsiColour),
    Fixed(i32),
    Rgb([i32; 3]),
}

/// A terminal colour descriptor.
///
/// A colour descriptor is an immutable value that knows the SGR parameters for
/// selecting it as foreground and as background colour. The named
/// constructors cover the sixteen ANSI colours, the terminal's default colour,
/// and the reset sentinel, whose parameter `0` resets all attributes. The
/// numeric constructors cover 256-colour indices and 24-bit RGB colours.
///
/// Colour descriptors are `Copy`, compare equal exactly when their codes are
/// equal, and can be freely shared between styles.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettypaint.paint.colour")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Colour(Kind);

macro_rules! ansi_constructors {
    ($($(#[$attr:meta])* $name:ident => $variant:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            pub const fn $name() -> Self {
                Self(Kind::Ansi(AnsiColour::$variant))
            }
        )*
    };
}

impl Colour {
    ansi_constructors! {
        /// Black: foreground code `30`, background code `40`.
        black => Black,
        /// Red: foreground code `31`, background code `41`.
        red => Red,
        /// Green: foreground code `32`, background code `42`.
        green => Green,
        /// Yellow: foreground code `33`, background code `43`.
        yellow => Yellow,
        /// Blue: foreground code `34`, background code `44`.
        blue => Blue,
        /// Magenta: foreground code `35`, background code `45`.
        magenta => Magenta,
        /// Purple, an alias for magenta.
        purple => Magenta,
        /// Cyan: foreground code `36`, background code `46`.
        cyan => Cyan,
        /// White: foreground code `37`, background code `47`.
        white => White,
        /// Bright black: foreground code `90`, background code `100`.
        bright_black => BrightBlack,
        /// Bright red: foreground code `91`, background code `101`.
        bright_red => BrightRed,
        /// Bright green: foreground code `92`, background code `102`.
        bright_green => BrightGreen,
        /// Bright yellow: foreground code `93`, background code `103`.
        bright_yellow => BrightYellow,
        /// Bright blue: foreground code `94`, background code `104`.
        bright_blue => BrightBlue,
        /// Bright magenta: foreground code `95`, background code `105`.
        bright_magenta => BrightMagenta,
        /// Bright purple, an alias for bright magenta.
        bright_purple => BrightMagenta,
        /// Bright cyan: foreground code `96`, background code `106`.
        bright_cyan => BrightCyan,
        /// Bright white: foreground code `97`, background code `107`.
        bright_white => BrightWhite,
    }

    /// The reset sentinel: foreground code `0`, background code `0`.
    pub const fn reset() -> Self {
        Self(Kind::Reset)
    }

    /// Create a new colour from the given ANSI colour.
    pub const fn ansi(colour: AnsiColour) -> Self {
        Self(Kind::Ansi(colour))
    }

    /// Create a new 256-colour: foreground code `38;5;<n>`, background code
    /// `48;5;<n>`.
    ///
    /// The index is written as is, even if it falls outside `0..=255`.
    pub const fn fixed(n: i32) -> Self {
        Self(Kind::Fixed(n))
    }

    /// Create a new 24-bit colour: foreground code `38;2;<r>;<g>;<b>`,
    /// background code `48;2;<r>;<g>;<b>`.
    ///
    /// The coordinates are written as is, even if they fall outside
    /// `0..=255`.
    pub const fn rgb(r: i32, g: i32, b: i32) -> Self {
        Self(Kind::Rgb([r, g, b]))
    }

    /// Create a new 256-colour after checking that the index is in range.
    pub fn try_fixed(n: i32) -> Result<Self, OutOfBoundsError> {
        check_byte(n)?;
        Ok(Self::fixed(n))
    }

    /// Create a new 24-bit colour after checking that all three coordinates
    /// are in range.
    pub fn try_rgb(r: i32, g: i32, b: i32) -> Result<Self, OutOfBoundsError> {
        check_byte(r)?;
        check_byte(g)?;
        check_byte(b)?;
        Ok(Self::rgb(r, g, b))
    }
}

fn check_byte(value: i32) -> Result<(), OutOfBoundsError> {
    if (0..=255).contains(&value) {
        Ok(())
    } else {
        Err(OutOfBoundsError::new(value, 0..=255))
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Colour {
    /// Create the terminal's default colour. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "default")]
    #[staticmethod]
    pub fn py_default() -> Self {
        Self::default()
    }

    /// Create the reset sentinel. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "reset")]
    #[staticmethod]
    pub fn py_reset() -> Self {
        Self::reset()
    }

    /// Create a new colour from the ANSI colour. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "ansi")]
    #[staticmethod]
    pub fn py_ansi(colour: AnsiColour) -> Self {
        Self::ansi(colour)
    }

    /// Create a new 256-colour. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "fixed")]
    #[staticmethod]
    pub fn py_fixed(n: i32) -> Self {
        Self::fixed(n)
    }

    /// Create a new 24-bit colour. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "rgb")]
    #[staticmethod]
    pub fn py_rgb(r: i32, g: i32, b: i32) -> Self {
        Self::rgb(r, g, b)
    }

    /// Look up a colour by name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_name(name: &str) -> Result<Self, ColourNameError> {
        name.parse()
    }

    /// Determine whether this colour is the terminal's default colour.
    pub fn is_default(&self) -> bool {
        matches!(self.0, Kind::Default)
    }

    /// Determine whether this colour is the reset sentinel.
    pub fn is_reset(&self) -> bool {
        matches!(self.0, Kind::Reset)
    }

    /// Get the SGR parameters selecting this colour for the given layer.
    pub fn code(&self, layer: Layer) -> String {
        SgrParams {
            colour: *self,
            layer,
        }
        .to_string()
    }

    /// Get the SGR parameters selecting this colour as foreground colour.
    pub fn foreground_code(&self) -> String {
        self.code(Layer::Foreground)
    }

    /// Get the SGR parameters selecting this colour as background colour.
    pub fn background_code(&self) -> String {
        self.code(Layer::Background)
    }

    /// Create a new style with this colour as foreground colour.
    pub fn foreground(&self) -> Style {
        Style::default().fg(*self)
    }

    /// Create a new style with this colour as background colour.
    pub fn background(&self) -> Style {
        Style::default().on(*self)
    }

    /// Create a new style with this colour as foreground and the given colour
    /// as background colour.
    pub fn on(&self, background: Colour) -> Style {
        Style::default().fg(*self).on(background)
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Display this colour as a complete escape sequence for the given layer.
    /// <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "display")]
    pub fn py_display(&self, layer: Layer) -> String {
        self.display(layer).to_string()
    }
}

impl Colour {
    /// Write the colour's SGR parameters for the given layer with the given
    /// writer. <i class=rust-only>Rust only!</i>
    pub fn write_sgr_params<W: std::fmt::Write>(&self, layer: Layer, f: &mut W) -> std::fmt::Result {
        match self.0 {
            Kind::Default => write!(f, "{}", 39 + layer.offset()),
            Kind::Reset => f.write_str("0"),
            Kind::Ansi(c) => {
                let base = if c.is_bright() { 90 } else { 30 } + layer.offset();
                write!(f, "{}", base + c.to_base() as u8)
            }
            Kind::Fixed(n) => write!(f, "{};5;{}", 38 + layer.offset(), n),
            Kind::Rgb([r, g, b]) => write!(f, "{};2;{};{};{}", 38 + layer.offset(), r, g, b),
        }
    }

    /// Provide a layer to make this colour displayable as a standalone escape
    /// sequence.
    ///
    /// ```
    /// # use prettypaint::colour::Colour;
    /// # use prettypaint::style::Layer;
    /// assert_eq!(Colour::green().display(Layer::Foreground).to_string(), "\x1b[32m");
    /// assert_eq!(Colour::green().display(Layer::Background).to_string(), "\x1b[42m");
    /// ```
    pub fn display(&self, layer: Layer) -> impl std::fmt::Display {
        LayeredColour {
            layer,
            colour: *self,
        }
    }

    /// Paint the text with this colour as foreground colour.
    pub fn paint<'a, S: Into<Cow<'a, str>>>(&self, text: S) -> Painted<'a> {
        self.foreground().paint(text)
    }

    /// Paint the text with this colour as background colour.
    pub fn paint_background<'a, S: Into<Cow<'a, str>>>(&self, text: S) -> Painted<'a> {
        self.background().paint(text)
    }
}

impl Default for Colour {
    /// The terminal's default colour: foreground code `39`, background code
    /// `49`.
    fn default() -> Self {
        Self(Kind::Default)
    }
}

impl From<AnsiColour> for Colour {
    fn from(value: AnsiColour) -> Self {
        Self::ansi(value)
    }
}

impl From<u8> for Colour {
    fn from(value: u8) -> Self {
        Self::fixed(i32::from(value))
    }
}

impl From<[u8; 3]> for Colour {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = value;
        Self::rgb(i32::from(r), i32::from(g), i32::from(b))
    }
}

impl std::str::FromStr for Colour {
    type Err = ColourNameError;

    /// Look up a colour by name.
    ///
    /// Names are case-insensitive and words may be separated by spaces,
    /// hyphens, or underscores. So `bright blue`, `Bright-Blue`, and
    /// `bright_blue` all name the same colour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .to_ascii_lowercase()
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "default" => return Ok(Self::default()),
            "reset" => return Ok(Self::reset()),
            "purple" => return Ok(Self::purple()),
            "bright purple" => return Ok(Self::bright_purple()),
            _ => (),
        }

        AnsiColour::all()
            .find(|c| c.name() == normalized)
            .map(Self::ansi)
            .ok_or_else(|| ColourNameError::new(s))
    }
}

struct SgrParams {
    colour: Colour,
    layer: Layer,
}

impl std::fmt::Display for SgrParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.colour.write_sgr_params(self.layer, f)
    }
}

struct LayeredColour {
    layer: Layer,
    colour: Colour,
}

impl std::fmt::Display for LayeredColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\x1b[")?;
        self.colour.write_sgr_params(self.layer, f)?;
        f.write_str("m")
    }
}
