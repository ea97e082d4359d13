//! Legacy username colors.
//!
//! Any text maps to one of eight palette colors through a small checksum
//! over its UTF-16 code units, and a palette entry can be found back from
//! a short description such as `"old bright red"`.
//!
//! ```
//! use namecolor::{ComputeOptions, DescribeOptions, NameColor, compute, described_by};
//!
//! let color = compute("Roblox", &ComputeOptions::default());
//! assert_eq!(color.entry().map(|e| e.describer), Some("orange"));
//!
//! let hex = described_by("old bright red", &DescribeOptions::hex());
//! assert_eq!(hex, Some(NameColor::Hex("c4281c".into())));
//! ```

mod checksum;
mod describe;
mod error;
mod options;
mod palette;
mod rgb;

use serde::Serialize;

pub use checksum::{checksum, floor_mod, palette_index};
pub use describe::{EraSelection, find_described, find_in, tokens};
pub use error::{NameColorError, Result};
pub use options::{ComputeOptions, DescribeOptions, OutputFormat};
pub use palette::{
    ColorEntry, Era, MODERN_PALETTE, OLD_PALETTE, PALETTE_LEN, Palette, SHARED,
};
pub use rgb::{HEX_LEN, Rgb, encode};

/// A resolved name color in the requested [`OutputFormat`].
///
/// Serializes as the bare entry object or the bare hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum NameColor {
    Rgb(ColorEntry),
    Hex(String),
}

impl NameColor {
    pub fn new(entry: &ColorEntry, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Rgb => Self::Rgb(*entry),
            OutputFormat::Hex => Self::Hex(entry.to_hex()),
        }
    }

    /// The palette entry, if this color was requested as RGB.
    pub fn entry(&self) -> Option<&ColorEntry> {
        match self {
            Self::Rgb(entry) => Some(entry),
            Self::Hex(_) => None,
        }
    }

    /// The channel triple, decoding the hex form when needed.
    pub fn rgb(&self) -> Result<Rgb> {
        match self {
            Self::Rgb(entry) => Ok(entry.rgb()),
            Self::Hex(hex) => hex.parse(),
        }
    }

    pub fn to_hex(&self) -> String {
        match self {
            Self::Rgb(entry) => entry.to_hex(),
            Self::Hex(hex) => hex.clone(),
        }
    }
}

/// Palette entry that `text` hashes to in the given era.
pub fn compute_entry(text: &str, era: Era) -> &'static ColorEntry {
    &era.palette()[palette_index(text)]
}

/// Computes the name color of `text`.
///
/// Total over all inputs; the empty string selects the first palette entry.
pub fn compute(text: &str, options: &ComputeOptions) -> NameColor {
    NameColor::new(compute_entry(text, options.era), options.format)
}

/// Finds the palette color named by a short description.
///
/// Returns `None` when no palette entry matches.
pub fn described_by(
    describer: &str,
    options: &DescribeOptions,
) -> Option<NameColor> {
    find_described(describer, options.era)
        .map(|entry| NameColor::new(entry, options.format))
}
