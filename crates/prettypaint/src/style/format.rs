#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// A text attribute other than regular.
///
/// This enumeration models attributes that differ from the default appearance.
/// Discriminants are powers of two and hence can be combined into a bit vector.
/// Unlike colours, attributes are independent of each other: enabling one
/// never cancels another.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettypaint.paint.style")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold = 0x1,
    Dim = 0x2,
    Italic = 0x4,
    Underline = 0x8,
    Blink = 0x10,
    Reverse = 0x20,
    Hidden = 0x40,
    Strikethrough = 0x80,
}

impl Attribute {
    #[inline]
    const fn bits(&self) -> u8 {
        *self as u8
    }

    const fn successor(&self) -> Option<Self> {
        use self::Attribute::*;

        Some(match self {
            Bold => Dim,
            Dim => Italic,
            Italic => Underline,
            Underline => Blink,
            Blink => Reverse,
            Reverse => Hidden,
            Hidden => Strikethrough,
            Strikethrough => return None,
        })
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Attribute {
    /// Get the SGR parameter for enabling this attribute.
    ///
    /// Parameter 6 has no assigned attribute and is never produced.
    pub const fn sgr(&self) -> u8 {
        use self::Attribute::*;

        match self {
            Bold => 1,
            Dim => 2,
            Italic => 3,
            Underline => 4,
            Blink => 5,
            Reverse => 7,
            Hidden => 8,
            Strikethrough => 9,
        }
    }

    /// Add this text attribute to another attribute or format. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __add__(&self, other: &Bound<'_, PyAny>) -> Result<Format, PyErr> {
        other
            .extract::<Attribute>()
            .map(|o| *self + o)
            .or_else(|_| other.extract::<Format>().map(|o| *self + o))
    }

    /// Get a debug representation.  <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A text format combining zero or more text attributes.
///
/// A format captures the *formatting state*, i.e., the attributes that differ
/// from the terminal's default appearance. Iteration, equality, and SGR
/// serialization all follow the fixed attribute order bold, dim, italic,
/// underline, blink, reverse, hidden, strikethrough.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettypaint.paint.style")
)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Format(u8);

impl Format {
    #[inline]
    pub(crate) const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    const fn bits(&self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) const fn and_not(&self, other: Self) -> Self {
        Self(self.bits() & !other.bits())
    }

    #[inline]
    pub(crate) const fn with(&self, attribute: Attribute) -> Self {
        Self(self.bits() | attribute.bits())
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Format {
    /// Get the empty, default format. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new() -> Self {
        Self::default()
    }

    /// Determine whether this format is the default format.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Get the number of format attributes that diverge from the default
    /// formatting. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Get the number of format attributes that diverge from the default
    /// formatting.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Determine whether this format includes the attribute.
    #[inline]
    pub const fn contains(&self, attribute: Attribute) -> bool {
        self.0 & attribute.bits() != 0
    }

    /// Get an iterator over the non-default text attributes.
    #[inline]
    pub const fn attributes(&self) -> AttributeIter {
        AttributeIter {
            format: *self,
            cursor: None,
            remaining: self.len(),
        }
    }

    /// Add this formatting to the other value. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __add__(&self, other: &Bound<'_, PyAny>) -> Result<Format, PyErr> {
        other
            .extract::<Attribute>()
            .map(|o| *self + o)
            .or_else(|_| other.extract::<Format>().map(|o| *self + o))
    }

    /// Remove the other value's attributes from this formatting. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __sub__(&self, other: &Bound<'_, PyAny>) -> Result<Format, PyErr> {
        other
            .extract::<Attribute>()
            .map(|o| *self - o)
            .or_else(|_| other.extract::<Format>().map(|o| *self - o))
    }

    /// Generate a debug representation for this text format. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl std::fmt::Debug for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.attributes()).finish()
    }
}

// ----------------------------------------------------------------------------------------------------------

/// An iterator over text attributes.
#[cfg_attr(feature = "pyffi", pyclass(module = "prettypaint.paint.style"))]
#[derive(Debug)]
pub struct AttributeIter {
    format: Format,
    cursor: Option<Attribute>,
    remaining: usize,
}

impl std::iter::Iterator for AttributeIter {
    type Item = Attribute;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let attribute = match self.cursor {
                None => Attribute::Bold,
                Some(attribute) => attribute.successor()?,
            };
            self.cursor = Some(attribute);

            if self.format.contains(attribute) {
                self.remaining -= 1;
                return Some(attribute);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AttributeIter {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl std::iter::FusedIterator for AttributeIter {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl AttributeIter {
    /// Get the number of outstanding attributes. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Access this iterator. <i class=python-only>Python only!</i>
    pub fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Get the next attribute. <i class=python-only>Python only!</i>
    pub fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<Attribute> {
        slf.next()
    }
}

// ----------------------------------------------------------------------------------------------------------
// From

impl From<Attribute> for Format {
    fn from(value: Attribute) -> Self {
        Self(value.bits())
    }
}

impl FromIterator<Attribute> for Format {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Format::empty(), |format, attribute| format.with(attribute))
    }
}

// ----------------------------------------------------------------------------------------------------------
// Add

impl std::ops::Add for Attribute {
    type Output = Format;

    fn add(self, other: Self) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

impl std::ops::Add<Format> for Attribute {
    type Output = Format;

    fn add(self, other: Format) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

impl std::ops::Add<Attribute> for Format {
    type Output = Format;

    fn add(self, other: Attribute) -> Self::Output {
        self.with(other)
    }
}

impl std::ops::Add for Format {
    type Output = Format;

    fn add(self, other: Self) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

// ----------------------------------------------------------------------------------------------------------
// Sub

impl std::ops::Sub<Attribute> for Format {
    type Output = Format;

    fn sub(self, other: Attribute) -> Self::Output {
        self.and_not(other.into())
    }
}

impl std::ops::Sub for Format {
    type Output = Format;

    fn sub(self, other: Self) -> Self::Output {
        self.and_not(other)
    }
}
