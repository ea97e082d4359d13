use serde::{Deserialize, Serialize};

use crate::{describe::EraSelection, palette::Era};

/// Shape of a returned color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The full palette entry.
    #[default]
    Rgb,
    /// Six digit lowercase hex code without a prefix.
    Hex,
}

/// Knobs for [`crate::compute`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(default)]
pub struct ComputeOptions {
    pub format: OutputFormat,
    pub era: Era,
}

impl ComputeOptions {
    pub fn hex() -> Self {
        Self {
            format: OutputFormat::Hex,
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_era(mut self, era: Era) -> Self {
        self.era = era;
        self
    }
}

/// Knobs for [`crate::described_by`].
///
/// The era defaults to [`EraSelection::Auto`], which picks the old palette
/// when the description mentions "old".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(default)]
pub struct DescribeOptions {
    pub format: OutputFormat,
    pub era: EraSelection,
}

impl DescribeOptions {
    pub fn hex() -> Self {
        Self {
            format: OutputFormat::Hex,
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_era(mut self, era: EraSelection) -> Self {
        self.era = era;
        self
    }
}
