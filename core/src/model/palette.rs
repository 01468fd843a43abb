use serde::{Deserialize, Serialize};

/// 8-bit RGB color shared by every front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Swatch {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const GREEN: Swatch = Swatch::rgb(0x05, 0x96, 0x69);
pub const AMBER: Swatch = Swatch::rgb(0xF5, 0x9E, 0x0B);
pub const RED: Swatch = Swatch::rgb(0xDC, 0x26, 0x26);
pub const VIOLET: Swatch = Swatch::rgb(0x7C, 0x3A, 0xED);
pub const BLUE: Swatch = Swatch::rgb(0x3B, 0x82, 0xF6);
pub const GRAY: Swatch = Swatch::rgb(0x6B, 0x72, 0x80);
pub const MUTED: Swatch = Swatch::rgb(0x9C, 0xA3, 0xAF);
pub const INK: Swatch = Swatch::rgb(0x11, 0x18, 0x27);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase_with_hash() {
        assert_eq!(GREEN.hex(), "#059669");
        assert_eq!(RED.hex(), "#DC2626");
    }
}
