#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The targeted display layer: Foreground or background.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettypaint.paint.style")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Layer {
    /// Determine whether this layer is the foreground.
    pub fn is_foreground(&self) -> bool {
        matches!(self, Self::Foreground)
    }

    /// Determine whether this layer is the background.
    pub fn is_background(&self) -> bool {
        matches!(self, Self::Background)
    }

    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colours
    /// and therefore zero for [`Layer::Foreground`].
    pub fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Layer;

    #[test]
    fn test_layer() {
        assert!(Layer::Foreground.is_foreground());
        assert!(!Layer::Foreground.is_background());
        assert!(Layer::Background.is_background());
        assert_eq!(Layer::Foreground.offset(), 0);
        assert_eq!(Layer::Background.offset(), 10);
    }
}
