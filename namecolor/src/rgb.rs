use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::NameColorError;

/// Number of hex digits in an encoded color.
pub const HEX_LEN: usize = 6;

/// A plain 8-bit RGB triple.
#[derive(
    Debug, Eq, PartialEq, Copy, Clone, Default, Hash, Serialize, Deserialize,
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the triple as `r * 65536 + g * 256 + b`.
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Lowercase, zero-padded, six digit hex code without a prefix.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

/// Encodes a channel triple as a six digit lowercase hex code.
pub fn encode(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = NameColorError;

    /// Accepts `rrggbb`, `#rrggbb` and `0xrrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            debug!("[rejected hex color] input: {s:?}");
            NameColorError::InvalidHex(s.to_owned())
        };

        let chars = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix('#'))
            .unwrap_or(s);

        if chars.len() != HEX_LEN
            || !chars.bytes().all(|byte| byte.is_ascii_hexdigit())
        {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&chars[range], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_pads_every_channel() {
        assert_eq!(encode(253, 41, 67), "fd2943");
        assert_eq!(encode(1, 162, 255), "01a2ff");
        assert_eq!(encode(0, 0, 0), "000000");
        assert_eq!(encode(0, 0, 1), "000001");
        assert_eq!(encode(255, 255, 255), "ffffff");
    }

    #[test]
    fn encode_matches_packed_value() {
        for (r, g, b) in [(0, 0, 0), (18, 52, 86), (0, 15, 240), (255, 0, 255)] {
            let rgb = Rgb::new(r, g, b);
            assert_eq!(rgb.to_hex(), format!("{:06x}", rgb.packed()));
        }
    }

    #[test]
    fn parse_valid_hex_colors() {
        let expected = Rgb::new(0xfd, 0x29, 0x43);
        assert_eq!("fd2943".parse::<Rgb>(), Ok(expected));
        assert_eq!("#fd2943".parse::<Rgb>(), Ok(expected));
        assert_eq!("0xFD2943".parse::<Rgb>(), Ok(expected));
    }

    #[test]
    fn parse_invalid_hex_colors() {
        for input in ["", "#", "fd294", "fd29433", "gg0000", "+d2943", "#é1234"]
        {
            assert_eq!(
                input.parse::<Rgb>(),
                Err(NameColorError::InvalidHex(input.to_owned())),
                "{input:?}"
            );
        }
    }
}
