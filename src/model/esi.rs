//! ESI request and response shapes for the endpoints mimir calls directly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{category::Category, id::EveId};

/// Entry of the `/universe/names` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityName {
    /// Entity ID.
    pub id: EveId,
    /// Canonical entity name.
    pub name: String,
    /// ESI category of the entity, e.g. `station` or `inventory_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EntityName {
    /// Creates an entry without category information.
    pub fn new(id: EveId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
        }
    }
}

/// Exact name match reported by `/universe/ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactMatch {
    /// Entity ID.
    pub id: EveId,
    /// Canonical entity name.
    pub name: String,
    /// Category the match was reported under.
    pub category: Category,
}

/// `{ id, name }` pair inside a `/universe/ids` response group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdName {
    /// Entity ID.
    pub id: EveId,
    /// Canonical entity name.
    pub name: String,
}

/// Response of `/universe/ids`, matches grouped by category.
///
/// Groups without matches are omitted by ESI. Groups for entity kinds mimir does not resolve
/// (agents, alliances, constellations, factions) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseIds {
    /// Characters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub characters: Vec<IdName>,
    /// Corporations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub corporations: Vec<IdName>,
    /// Inventory types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inventory_types: Vec<IdName>,
    /// Regions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<IdName>,
    /// NPC stations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stations: Vec<IdName>,
    /// Solar systems.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub systems: Vec<IdName>,
}

impl UniverseIds {
    /// Flattens the grouped response into exact matches tagged with their category.
    pub fn into_matches(self) -> Vec<ExactMatch> {
        let groups = [
            (Category::InventoryType, self.inventory_types),
            (Category::Character, self.characters),
            (Category::Corporation, self.corporations),
            (Category::Region, self.regions),
            (Category::SolarSystem, self.systems),
            (Category::Station, self.stations),
        ];

        groups
            .into_iter()
            .flat_map(|(category, entries)| {
                entries.into_iter().map(move |entry| ExactMatch {
                    id: entry.id,
                    name: entry.name,
                    category,
                })
            })
            .collect()
    }
}

/// Response of the search endpoints: matching IDs keyed by category.
pub type SearchResults = HashMap<String, Vec<EveId>>;

/// Subset of `/universe/structures/{structure_id}` mimir needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureInfo {
    /// Structure name, including the solar system prefix.
    pub name: String,
    /// Corporation owning the structure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<EveId>,
    /// Solar system the structure is anchored in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_system_id: Option<EveId>,
}

impl StructureInfo {
    /// Creates structure information with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner_id: None,
            solar_system_id: None,
        }
    }
}

/// Entry of `/characters/{character_id}/assets/names`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetName {
    /// Asset item ID.
    pub item_id: EveId,
    /// Custom name the owner gave the item.
    pub name: String,
}

/// Position of an asset within its solar system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate in meters.
    pub x: f64,
    /// Y coordinate in meters.
    pub y: f64,
    /// Z coordinate in meters.
    pub z: f64,
}

/// Entry of `/characters/{character_id}/assets/locations`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetLocation {
    /// Asset item ID.
    pub item_id: EveId,
    /// Asset position.
    pub position: Position,
}

impl AssetLocation {
    /// Creates an asset location.
    pub fn new(item_id: EveId, x: f64, y: f64, z: f64) -> Self {
        Self {
            item_id,
            position: Position { x, y, z },
        }
    }
}
