//! Entity categories and their lookup strategies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of EVE Online entity a name or ID refers to.
///
/// Determines which ESI endpoint resolves it and which matching rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Map region, e.g. "The Forge".
    Region,
    /// NPC station.
    Station,
    /// Player-owned Upwell structure.
    Structure,
    /// Solar system.
    SolarSystem,
    /// Item type from the static data export.
    InventoryType,
    /// Player or NPC character.
    Character,
    /// Player or NPC corporation.
    Corporation,
}

/// How a display name is turned into an ID for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Exact, case-insensitive match through `/universe/ids`.
    ExactMatch,
    /// Substring search, first candidate wins.
    ClosestMatch,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Region,
        Category::Station,
        Category::Structure,
        Category::SolarSystem,
        Category::InventoryType,
        Category::Character,
        Category::Corporation,
    ];

    /// Category key used by ESI search parameters and response objects.
    pub fn search_key(self) -> &'static str {
        match self {
            Category::Region => "region",
            Category::Station => "station",
            Category::Structure => "structure",
            Category::SolarSystem => "solar_system",
            Category::InventoryType => "inventory_type",
            Category::Character => "character",
            Category::Corporation => "corporation",
        }
    }

    /// Name lookup strategy for this category.
    ///
    /// Inventory type names are unique within the static data so an exact match is both
    /// cheaper and more precise than a search, every other category is searched.
    pub fn strategy(self) -> LookupStrategy {
        match self {
            Category::InventoryType => LookupStrategy::ExactMatch,
            Category::Region
            | Category::Station
            | Category::Structure
            | Category::SolarSystem
            | Category::Character
            | Category::Corporation => LookupStrategy::ClosestMatch,
        }
    }

    /// Whether looking up names in this category needs an authorized character session.
    ///
    /// ESI only searches structures the authorized character has access to.
    pub fn requires_authorization(self) -> bool {
        matches!(self, Category::Structure)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.search_key())
    }
}
