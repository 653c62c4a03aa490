//! Kurvenfarbe als RGB-Tripel mit Hex-Konvertierung (`#rrggbb`).

use anyhow::{bail, Context};
use std::fmt;

/// Deckende RGB-Farbe einer Kurve und ihres Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CurveColor {
    /// Erstellt eine Farbe aus RGB-Komponenten.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parst `#rrggbb` oder `rrggbb`.
    pub fn from_hex(hex: &str) -> anyhow::Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            bail!("Ungültige Hex-Farbe '{}': erwartet #rrggbb", hex);
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .with_context(|| format!("Ungültige Hex-Farbe '{}'", hex))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formatiert als `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CurveColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
