//! The two fixed name color palettes.
//!
//! Both palettes hold three era specific entries followed by the same five
//! shared entries. Entry order matters: the checksum selects by index.

use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
    slice,
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::NameColorError, rgb::Rgb};

/// Number of entries in every palette.
pub const PALETTE_LEN: usize = 8;

/// A single palette color with its short lowercase description tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorEntry {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub describer: &'static str,
}

impl ColorEntry {
    pub const fn new(
        red: u8,
        green: u8,
        blue: u8,
        describer: &'static str,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            describer,
        }
    }

    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    pub fn to_hex(&self) -> String {
        self.rgb().to_hex()
    }
}

impl From<&ColorEntry> for Rgb {
    fn from(entry: &ColorEntry) -> Self {
        entry.rgb()
    }
}

/// Palette era.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    /// 2014 onwards.
    #[default]
    Modern,
    /// 2006 to 2014.
    Old,
}

impl Era {
    pub fn palette(self) -> &'static Palette {
        Palette::for_era(self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Old => "old",
        }
    }
}

impl Display for Era {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Era {
    type Err = NameColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(Self::Modern),
            "old" => Ok(Self::Old),
            _ => {
                debug!("[rejected era] input: {s:?}");
                Err(NameColorError::UnknownEra(s.to_owned()))
            },
        }
    }
}

/// An ordered, fixed-length color table.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette([ColorEntry; PALETTE_LEN]);

impl Palette {
    pub const fn new(entries: [ColorEntry; PALETTE_LEN]) -> Self {
        Self(entries)
    }

    pub fn for_era(era: Era) -> &'static Palette {
        match era {
            Era::Modern => &MODERN_PALETTE,
            Era::Old => &OLD_PALETTE,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        PALETTE_LEN
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&ColorEntry> {
        self.0.get(index)
    }

    pub fn entries(&self) -> &[ColorEntry; PALETTE_LEN] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, ColorEntry> {
        self.0.iter()
    }

    /// Selects the entry at `value` modulo the palette length.
    ///
    /// Negative values wrap around from the end, so every `value` maps to
    /// an entry.
    pub fn pick(&self, value: i64) -> &ColorEntry {
        &self.0[crate::checksum::floor_mod(value, PALETTE_LEN as i64) as usize]
    }
}

impl Index<usize> for Palette {
    type Output = ColorEntry;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorEntry;
    type IntoIter = slice::Iter<'a, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Entries shared by both eras, in palette order.
pub const SHARED: [ColorEntry; 5] = [
    ColorEntry::new(107, 50, 124, "purple"),
    ColorEntry::new(218, 133, 65, "orange"),
    ColorEntry::new(245, 205, 48, "yellow"),
    ColorEntry::new(232, 186, 200, "purple"),
    ColorEntry::new(215, 197, 154, "tan"),
];

/// The modern name color palette (2014+).
pub static MODERN_PALETTE: Palette = Palette::new([
    ColorEntry::new(253, 41, 67, "red"),
    ColorEntry::new(1, 162, 255, "blue"),
    ColorEntry::new(2, 184, 87, "green"),
    SHARED[0],
    SHARED[1],
    SHARED[2],
    SHARED[3],
    SHARED[4],
]);

/// The old name color palette (2006-2014).
pub static OLD_PALETTE: Palette = Palette::new([
    ColorEntry::new(196, 40, 28, "red"),
    ColorEntry::new(13, 105, 172, "blue"),
    ColorEntry::new(39, 70, 45, "green"),
    SHARED[0],
    SHARED[1],
    SHARED[2],
    SHARED[3],
    SHARED[4],
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_palettes_end_with_shared_entries() {
        let expected: [(u8, u8, u8, &str); 5] = [
            (107, 50, 124, "purple"),
            (218, 133, 65, "orange"),
            (245, 205, 48, "yellow"),
            (232, 186, 200, "purple"),
            (215, 197, 154, "tan"),
        ];

        for palette in [&MODERN_PALETTE, &OLD_PALETTE] {
            let tail: Vec<_> = palette
                .iter()
                .skip(3)
                .map(|e| (e.red, e.green, e.blue, e.describer))
                .collect();
            assert_eq!(tail, expected);
        }
    }

    #[test]
    fn era_specific_heads() {
        let heads = |palette: &Palette| {
            palette.iter().take(3).map(|e| e.rgb()).collect::<Vec<_>>()
        };

        assert_eq!(
            heads(&MODERN_PALETTE),
            vec![
                Rgb::new(253, 41, 67),
                Rgb::new(1, 162, 255),
                Rgb::new(2, 184, 87)
            ]
        );
        assert_eq!(
            heads(&OLD_PALETTE),
            vec![
                Rgb::new(196, 40, 28),
                Rgb::new(13, 105, 172),
                Rgb::new(39, 70, 45)
            ]
        );
        for palette in [&MODERN_PALETTE, &OLD_PALETTE] {
            let tags: Vec<_> =
                palette.iter().take(3).map(|e| e.describer).collect();
            assert_eq!(tags, ["red", "blue", "green"]);
        }
    }

    #[test]
    fn every_entry_survives_hex_encoding() {
        for entry in MODERN_PALETTE.iter().chain(OLD_PALETTE.iter()) {
            let hex = entry.to_hex();
            assert_eq!(hex.len(), 6);
            assert!(!hex.starts_with('#'));
            assert_eq!(hex, hex.to_ascii_lowercase());
            assert_eq!(hex.parse::<Rgb>(), Ok(entry.rgb()));
        }
    }

    #[test]
    fn pick_wraps_negative_values() {
        assert_eq!(MODERN_PALETTE.pick(0).describer, "red");
        assert_eq!(MODERN_PALETTE.pick(-1).describer, "tan");
        assert_eq!(MODERN_PALETTE.pick(-8), &MODERN_PALETTE[0]);
        assert_eq!(OLD_PALETTE.pick(9), &OLD_PALETTE[1]);
    }

    #[test]
    fn era_parsing() {
        assert_eq!("modern".parse::<Era>(), Ok(Era::Modern));
        assert_eq!(" OLD ".parse::<Era>(), Ok(Era::Old));
        assert_eq!(
            "classic".parse::<Era>(),
            Err(NameColorError::UnknownEra("classic".into()))
        );
        assert_eq!(Era::Old.palette(), &OLD_PALETTE);
        assert_eq!(Era::default(), Era::Modern);
    }
}
