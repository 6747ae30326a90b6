//! Type code → fill color mapping.
//!
//! The five defined codes mirror the host-parasite cell states written by the simulation. Every
//! other integer resolves to [`ColorPalette::fallback`], so lookup never fails.

use crate::foundation::core::Rgb8;
use serde::{Deserialize, Serialize};

/// The categories a point record can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeCode {
    /// Code 0.
    Empty,
    /// Code 1.
    UninfectedSusceptible,
    /// Code 2.
    UninfectedResistant,
    /// Code 3.
    InfectedSensitive,
    /// Code 4.
    InfectedInsensitive,
}

impl TypeCode {
    /// All defined codes in ascending code order.
    pub const ALL: [TypeCode; 5] = [
        TypeCode::Empty,
        TypeCode::UninfectedSusceptible,
        TypeCode::UninfectedResistant,
        TypeCode::InfectedSensitive,
        TypeCode::InfectedInsensitive,
    ];

    /// Decode a raw integer; `None` for codes outside `0..=4`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::UninfectedSusceptible),
            2 => Some(Self::UninfectedResistant),
            3 => Some(Self::InfectedSensitive),
            4 => Some(Self::InfectedInsensitive),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::UninfectedSusceptible => "uninfected-susceptible",
            Self::UninfectedResistant => "uninfected-resistant",
            Self::InfectedSensitive => "infected-sensitive",
            Self::InfectedInsensitive => "infected-insensitive",
        }
    }
}

/// Total mapping from type code to fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPalette {
    /// Colors for codes `0..=4`, indexed by [`TypeCode::index`].
    pub entries: [Rgb8; 5],
    /// Color for every code without an entry.
    pub fallback: Rgb8,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            entries: [
                // Light gray rather than the simulation's white, which would vanish into the
                // canvas background.
                Rgb8::new(200, 200, 200),
                Rgb8::new(0, 0, 255),
                Rgb8::new(0, 160, 0),
                Rgb8::new(230, 200, 0),
                Rgb8::new(220, 0, 0),
            ],
            fallback: Rgb8::new(64, 64, 64),
        }
    }
}

impl ColorPalette {
    pub fn color_for(&self, ty: Option<TypeCode>) -> Rgb8 {
        match ty {
            Some(t) => self.entries[t.index()],
            None => self.fallback,
        }
    }

    /// Resolve a raw code; never fails.
    pub fn resolve(&self, code: i64) -> Rgb8 {
        self.color_for(TypeCode::from_code(code))
    }
}

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
