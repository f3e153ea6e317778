use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::MarkerError;

/// 24-bit marker color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(0xef, 0x44, 0x44);
    pub const AMBER: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
    pub const BLUE: Rgb = Rgb::new(0x3b, 0x82, 0xf6);
    pub const GREEN: Rgb = Rgb::new(0x10, 0xb9, 0x81);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MarkerError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = MarkerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
