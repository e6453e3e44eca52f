//! Strategies for property tests.

use proptest::prelude::*;

use crate::colour::{AnsiColour, Colour};
use crate::style::{Attribute, Format, Style};

const ATTRIBUTES: [Attribute; 8] = [
    Attribute::Bold,
    Attribute::Dim,
    Attribute::Italic,
    Attribute::Underline,
    Attribute::Blink,
    Attribute::Reverse,
    Attribute::Hidden,
    Attribute::Strikethrough,
];

pub(crate) fn arb_format() -> impl Strategy<Value = Format> {
    prop::array::uniform8(any::<bool>()).prop_map(|flags| {
        ATTRIBUTES
            .iter()
            .zip(flags)
            .filter(|(_, on)| *on)
            .map(|(attribute, _)| *attribute)
            .collect::<Format>()
    })
}

pub(crate) fn arb_colour() -> impl Strategy<Value = Colour> {
    prop_oneof![
        Just(Colour::default()),
        Just(Colour::reset()),
        (0_u8..16).prop_map(|index| Colour::ansi(
            AnsiColour::all().nth(index as usize).unwrap_or_default()
        )),
        any::<i32>().prop_map(Colour::fixed),
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Colour::from([r, g, b])),
    ]
}

pub(crate) fn arb_style() -> impl Strategy<Value = Style> {
    (
        arb_format(),
        prop::option::of(arb_colour()),
        prop::option::of(arb_colour()),
    )
        .prop_map(|(format, foreground, background)| {
            Style::from(format).fg(foreground).on(background)
        })
}
