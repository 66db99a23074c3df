//! Cell color - the cosmetic tag carried through save/load/reset
//!
//! The engine does not interpret the color beyond validity: it is parsed
//! from and formatted as a `#rrggbb` hex string at the snapshot boundary,
//! and an unparseable value in a loaded snapshot is a corrupt-state error.

use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB cell color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    /// Create a color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a `#rrggbb` hex string
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for CellColor {
    fn default() -> Self {
        // Deep blue, the colony's traditional color
        Self::rgb(0x00, 0x2a, 0x77)
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for CellColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color() {
        assert_eq!(CellColor::default(), CellColor::rgb(0x00, 0x2a, 0x77));
        assert_eq!(CellColor::default().to_hex(), "#002a77");
    }

    #[test]
    fn test_hex_roundtrip() {
        let color = CellColor::rgb(255, 128, 64);
        assert_eq!(color.to_hex(), "#ff8040");
        assert_eq!(CellColor::from_hex("#ff8040"), Some(color));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(CellColor::from_hex(""), None);
        assert_eq!(CellColor::from_hex("002a77"), None);
        assert_eq!(CellColor::from_hex("#02a77"), None);
        assert_eq!(CellColor::from_hex("#002a779"), None);
        assert_eq!(CellColor::from_hex("#00zz77"), None);
        assert_eq!(CellColor::from_hex("not a color"), None);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        assert_eq!(
            CellColor::from_hex("#FF8040"),
            Some(CellColor::rgb(255, 128, 64))
        );
    }
}
