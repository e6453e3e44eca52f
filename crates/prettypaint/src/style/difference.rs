use super::{Format, Style};

/// The transition between two adjacent styles.
///
/// When rendering a run of differently styled spans, the terminal is already
/// in the state left behind by the previous span. [`Difference::between`]
/// determines how little needs to be written to get from there to the next
/// span's style.
///
/// SGR has dedicated parameters for turning attributes and colours on, but
/// this crate only ever uses the full reset for turning them off. Hence any
/// attribute or colour that is present before but absent after the boundary
/// forces a [`Difference::Reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difference {
    /// Only attributes need to be added. The style carries exactly those
    /// attributes and no colours, so its prefix is the transition.
    ExtraStyles(Style),

    /// The terminal must be reset before the next style is applied in full.
    Reset,

    /// The two styles are the same and nothing needs to be written.
    NoDifference,
}

impl Difference {
    /// Classify the transition from the first to the next style.
    ///
    /// ```
    /// # use prettypaint::colour::Colour;
    /// # use prettypaint::style::{Difference, Style};
    /// let plain = Style::new();
    /// let bold = plain.bold();
    ///
    /// assert_eq!(Difference::between(&bold, &bold), Difference::NoDifference);
    /// assert_eq!(Difference::between(&bold, &plain), Difference::Reset);
    /// assert_eq!(
    ///     Difference::between(&plain, &bold.fg(Colour::red())),
    ///     Difference::ExtraStyles(bold)
    /// );
    /// ```
    ///
    /// Colours are only considered for detecting a reset. If only the colours
    /// change and none disappears, the extra style is plain and the transition
    /// writes nothing.
    pub fn between(first: &Style, next: &Style) -> Difference {
        if first == next {
            return Difference::NoDifference;
        }

        let removed = first.format() - next.format();
        if !removed.is_empty()
            || first.foreground().is_some() && next.foreground().is_none()
            || first.background().is_some() && next.background().is_none()
        {
            return Difference::Reset;
        }

        // No attribute was removed, so the differing attributes are the added ones.
        let added: Format = next.format() - first.format();
        Difference::ExtraStyles(Style::from(added))
    }

    /// Determine whether this transition resets the terminal.
    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Reset)
    }
}

#[cfg(test)]
mod test {
    use super::Difference::{self, *};
    use crate::colour::Colour;
    use crate::style::{Attribute, Style};

    fn style() -> Style {
        Style::default()
    }

    macro_rules! test {
        ($name: ident: $first: expr; $next: expr => $result: expr) => {
            #[test]
            fn $name() {
                assert_eq!($result, Difference::between(&$first, &$next));
            }
        };
    }

    test!(nothing:           Colour::green().foreground(); Colour::green().foreground() => NoDifference);
    test!(plain:             style(); style() => NoDifference);
    test!(bold_on_green:     Colour::green().foreground(); Colour::green().foreground().bold() => ExtraStyles(style().bold()));
    test!(bold_off_green:    Colour::green().foreground().bold(); Colour::green().foreground() => Reset);

    test!(colour_change: Colour::red().foreground(); Colour::blue().foreground() => ExtraStyles(style()));
    test!(background_change: Colour::red().background(); Colour::blue().background() => ExtraStyles(style()));

    test!(addition_of_bold:          style(); style().bold()          => ExtraStyles(style().bold()));
    test!(addition_of_dim:           style(); style().dim()           => ExtraStyles(style().dim()));
    test!(addition_of_italic:        style(); style().italic()        => ExtraStyles(style().italic()));
    test!(addition_of_underline:     style(); style().underline()     => ExtraStyles(style().underline()));
    test!(addition_of_blink:         style(); style().blink()         => ExtraStyles(style().blink()));
    test!(addition_of_reverse:       style(); style().reverse()       => ExtraStyles(style().reverse()));
    test!(addition_of_hidden:        style(); style().hidden()        => ExtraStyles(style().hidden()));
    test!(addition_of_strikethrough: style(); style().strikethrough() => ExtraStyles(style().strikethrough()));

    test!(removal_of_bold:          style().bold();          style() => Reset);
    test!(removal_of_dim:           style().dim();           style() => Reset);
    test!(removal_of_italic:        style().italic();        style() => Reset);
    test!(removal_of_underline:     style().underline();     style() => Reset);
    test!(removal_of_blink:         style().blink();         style() => Reset);
    test!(removal_of_reverse:       style().reverse();       style() => Reset);
    test!(removal_of_hidden:        style().hidden();        style() => Reset);
    test!(removal_of_strikethrough: style().strikethrough(); style() => Reset);

    test!(removal_of_foreground: Colour::red().foreground(); style() => Reset);
    test!(removal_of_background: Colour::red().background(); style() => Reset);
    test!(swap_for_dim: style().bold(); style().dim() => Reset);

    test!(addition_of_colour: style().bold(); style().bold().fg(Colour::red()) => ExtraStyles(style()));
    test!(added_attribute_ignores_colour:
        Colour::red().foreground().italic();
        Colour::blue().on(Colour::white()).italic().underline()
        => ExtraStyles(style().underline()));

    #[test]
    fn test_is_reset() {
        let bold = Style::from(Attribute::Bold);
        assert!(Difference::between(&bold, &Style::new()).is_reset());
        assert!(!Difference::between(&Style::new(), &bold).is_reset());
        assert!(!Difference::between(&bold, &bold).is_reset());
    }
}
