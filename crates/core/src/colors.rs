//! Type badge colors
//!
//! A closed, read-only table from type label to hex color. Labels outside
//! the table have no color and render without a background.

use serde::Serialize;

pub const TYPE_COLORS: [(&str, &str); 18] = [
    ("grass", "#78C850"),
    ("poison", "#A040A0"),
    ("fire", "#F08030"),
    ("water", "#6890F0"),
    ("bug", "#A8B820"),
    ("normal", "#A8A878"),
    ("electric", "#F8D030"),
    ("ground", "#E0C068"),
    ("fairy", "#EE99AC"),
    ("fighting", "#C03028"),
    ("psychic", "#F85888"),
    ("rock", "#B8A038"),
    ("ghost", "#705898"),
    ("ice", "#98D8D8"),
    ("dragon", "#7038F8"),
    ("dark", "#705848"),
    ("steel", "#B8B8D0"),
    ("flying", "#A890F0"),
];

/// A rendered type tag: uppercased label plus its background color, if any
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub color: Option<&'static str>,
}

/// Look up the color for a type label. Lookup is exact (upstream labels are lowercase).
pub fn type_color(label: &str) -> Option<&'static str> {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
}

pub fn badge_for(label: &str) -> Badge {
    Badge {
        label: label.to_uppercase(),
        color: type_color(label),
    }
}

/// Parse `#RRGGBB` into its components
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();

    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
