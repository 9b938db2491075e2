//! User preferences

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Smallest selectable result count.
pub const MIN_LIMIT: u32 = 1;
/// Largest selectable result count.
pub const MAX_LIMIT: u32 = 100;
/// Result count used when nothing is stored.
pub const DEFAULT_LIMIT: u32 = 10;

/// Clamps a requested result count into `[MIN_LIMIT, MAX_LIMIT]`.
#[must_use]
pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

/// Drink category, serialized with the catalog's own spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Ordinary Drink")]
    OrdinaryDrink,
    #[serde(rename = "Cocktail")]
    Cocktail,
    #[serde(rename = "Milk / Float / Shake")]
    MilkFloatShake,
    #[serde(rename = "Other/Unknown")]
    OtherUnknown,
    #[serde(rename = "Cocoa")]
    Cocoa,
    #[serde(rename = "Shot")]
    Shot,
    #[serde(rename = "Coffee / Tea")]
    CoffeeTea,
    #[serde(rename = "Homemade Liqueur")]
    HomemadeLiqueur,
    #[serde(rename = "Punch / Party Drink")]
    PunchPartyDrink,
    #[serde(rename = "Beer")]
    Beer,
    #[serde(rename = "Soft Drink / Soda")]
    SoftDrinkSoda,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Self; 11] = [
        Self::OrdinaryDrink,
        Self::Cocktail,
        Self::MilkFloatShake,
        Self::OtherUnknown,
        Self::Cocoa,
        Self::Shot,
        Self::CoffeeTea,
        Self::HomemadeLiqueur,
        Self::PunchPartyDrink,
        Self::Beer,
        Self::SoftDrinkSoda,
    ];

    /// Catalog spelling, used verbatim in list queries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OrdinaryDrink => "Ordinary Drink",
            Self::Cocktail => "Cocktail",
            Self::MilkFloatShake => "Milk / Float / Shake",
            Self::OtherUnknown => "Other/Unknown",
            Self::Cocoa => "Cocoa",
            Self::Shot => "Shot",
            Self::CoffeeTea => "Coffee / Tea",
            Self::HomemadeLiqueur => "Homemade Liqueur",
            Self::PunchPartyDrink => "Punch / Party Drink",
            Self::Beer => "Beer",
            Self::SoftDrinkSoda => "Soft Drink / Soda",
        }
    }

    /// Position in [`Category::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next category, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::ValidationError(format!("Unknown category: {s}")))
    }
}

/// Category and result count used for catalog queries.
///
/// Stored values are trusted as-is; only the preferences form clamps `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub category: Category,
    pub limit: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            category: Category::Beer,
            limit: DEFAULT_LIMIT,
        }
    }
}
