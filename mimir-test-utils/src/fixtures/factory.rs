use chrono::{DateTime, Utc};
use eve_esi::model::corporation::Corporation;
use mimir::{
    model::esi::{AssetLocation, AssetName, EntityName, StructureInfo},
    EveId,
};

/// Create a mock corporation with default test values and the given name.
///
/// # Arguments
/// - `name` - Corporation name ESI reports
///
/// # Returns
/// - `Corporation` - A corporation object with test data
pub fn mock_corporation(name: &str) -> Corporation {
    Corporation {
        alliance_id: Some(99013534),
        ceo_id: 2114794365,
        creator_id: 2114794365,
        date_founded: Some(
            DateTime::parse_from_rfc3339("2024-10-07T21:43:09Z")
                .unwrap()
                .with_timezone(&Utc),
        ),
        description: None,
        home_station_id: Some(60003760),
        member_count: 21,
        name: name.to_string(),
        shares: Some(1000),
        tax_rate: 0.0,
        ticker: "F4LL.".to_string(),
        url: Some("https://autumn-order.com".to_string()),
        war_eligible: Some(true),
        faction_id: None,
    }
}

/// Create a mock structure anchored in Jita.
pub fn mock_structure(name: &str) -> StructureInfo {
    StructureInfo {
        name: name.to_string(),
        owner_id: Some(98785281),
        solar_system_id: Some(30000142),
    }
}

/// Create a `/universe/names` entry with its category.
pub fn mock_entity_name(id: EveId, name: &str, category: &str) -> EntityName {
    EntityName {
        id,
        name: name.to_string(),
        category: Some(category.to_string()),
    }
}

/// Create an asset custom name entry.
pub fn mock_asset_name(item_id: EveId, name: &str) -> AssetName {
    AssetName {
        item_id,
        name: name.to_string(),
    }
}

/// Create an asset location entry.
pub fn mock_asset_location(item_id: EveId, x: f64, y: f64, z: f64) -> AssetLocation {
    AssetLocation::new(item_id, x, y, z)
}
