//! Palette lookup by a short free-text description such as
//! `"old bright red"`.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    error::NameColorError,
    palette::{ColorEntry, Era, Palette},
};

/// Word that switches [`EraSelection::Auto`] to the old palette.
const OLD_MARKER: &str = "old";

/// Which palette a description is matched against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EraSelection {
    Modern,
    Old,
    /// Old palette if the description contains "old", modern otherwise.
    #[default]
    Auto,
}

impl EraSelection {
    /// Resolves the selection for an already lowercased description.
    pub fn resolve(self, describer: &str) -> Era {
        match self {
            Self::Modern => Era::Modern,
            Self::Old => Era::Old,
            Self::Auto if describer.contains(OLD_MARKER) => Era::Old,
            Self::Auto => Era::Modern,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Old => "old",
            Self::Auto => "auto",
        }
    }
}

impl From<Era> for EraSelection {
    fn from(era: Era) -> Self {
        match era {
            Era::Modern => Self::Modern,
            Era::Old => Self::Old,
        }
    }
}

impl From<Option<Era>> for EraSelection {
    fn from(era: Option<Era>) -> Self {
        era.map_or(Self::Auto, Self::from)
    }
}

impl Display for EraSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EraSelection {
    type Err = NameColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            _ => s.parse::<Era>().map(Self::from),
        }
    }
}

/// Splits a lowercased description on single spaces.
///
/// Runs of spaces yield empty tokens, and an empty token matches every
/// tag.
pub fn tokens(describer: &str) -> impl Iterator<Item = &str> {
    describer.split(' ')
}

/// First entry of `palette` whose tag contains any token of `describer`.
pub fn find_in<'p>(
    palette: &'p Palette,
    describer: &str,
) -> Option<&'p ColorEntry> {
    palette.iter().find(|entry| {
        tokens(describer).any(|token| entry.describer.contains(token))
    })
}

/// Looks up a palette entry by description.
///
/// Matching is case-insensitive. Returns `None` when no entry tag contains
/// any word of the description.
pub fn find_described(
    describer: &str,
    era: EraSelection,
) -> Option<&'static ColorEntry> {
    let describer = describer.to_lowercase();
    let resolved = era.resolve(&describer);
    let found = find_in(resolved.palette(), &describer);

    match found {
        Some(entry) => trace!(
            "[described] {describer:?} -> {} ({resolved})",
            entry.describer
        ),
        None => debug!("[no color described] {describer:?} ({resolved})"),
    }

    found
}
