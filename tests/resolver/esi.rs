//! End-to-end resolver tests against a mock ESI server.

use mimir::{model::esi::EntityName, Category, Lookup};
use mimir_test_utils::{prelude::*, setup::TEST_MAX_ATTEMPTS};
use mockito::Matcher;

/// Expect a station and a player structure to resolve in one batch
#[tokio::test]
async fn resolves_station_and_structure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session()
        .with_universe_names_endpoint(
            vec![2001],
            vec![EntityName::new(2001, "Jita IV - Moon 4")],
            1,
        )
        .with_structure_endpoint(9000000000001, factory::mock_structure("Player Citadel"), 1)
        .build()
        .await?;
    let resolver = test.resolver();

    let names = resolver.id_to_name_batch(&[2001, 9000000000001]).await;

    assert_eq!(names[&2001], "Jita IV - Moon 4");
    assert_eq!(names[&9000000000001], "Player Citadel");
    test.assert_mocks();

    Ok(())
}

/// Expect a station search to cache the station's canonical name
#[tokio::test]
async fn resolves_station_name_through_search() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_search_endpoint(Category::Station, "Jita IV", vec![60003760], 1)
        .with_universe_names_endpoint(
            vec![60003760],
            vec![factory::mock_entity_name(
                60003760,
                "Jita IV - Moon 4 - Caldari Navy Assembly Plant",
                "station",
            )],
            1,
        )
        .build()
        .await?;
    let resolver = test.resolver();

    let lookup = resolver.name_to_id("Jita IV", Category::Station).await;
    let again = resolver.name_to_id("Jita IV", Category::Station).await;

    assert_eq!(lookup, Lookup::Found(60003760));
    assert_eq!(again, lookup);
    assert_eq!(
        resolver
            .cache()
            .get_by_name("Jita IV - Moon 4 - Caldari Navy Assembly Plant"),
        Some(60003760)
    );
    test.assert_mocks();

    Ok(())
}

/// Expect an unreachable search to be reported as unavailable
#[tokio::test]
async fn failing_search_is_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/search")
                .match_query(Matcher::Any)
                .with_status(502)
                .expect(TEST_MAX_ATTEMPTS as usize)
                .create()
        })
        .build()
        .await?;
    let resolver = test.resolver();

    let lookup = resolver.name_to_id("Jita", Category::SolarSystem).await;

    assert_eq!(lookup, Lookup::Unavailable);
    assert_eq!(lookup.id_or_sentinel(), -1);
    assert_eq!(resolver.cache().get_by_name("Jita"), None);
    test.assert_mocks();

    Ok(())
}

/// Expect a rejected token to be reported as unauthorized
#[tokio::test]
async fn rejected_token_is_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/characters/2114794365/search")
                .match_query(Matcher::Any)
                .with_status(401)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let resolver = test.resolver();

    let lookup = resolver
        .name_to_id("Player Citadel", Category::Structure)
        .await;

    assert_eq!(lookup, Lookup::Unauthorized);
    test.assert_mocks();

    Ok(())
}

/// Expect an asset's position when ESI knows no structure or custom name for it
#[tokio::test]
async fn falls_back_to_asset_location() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_session()
        .with_asset_locations_endpoint(
            vec![1035466617946],
            vec![factory::mock_asset_location(1035466617946, 0.0, 0.0, 0.0)],
            1,
        )
        .build()
        .await?;
    let structure = test
        .esi()
        .create_structure_error_endpoint(1035466617946, 404, 1);
    let asset_names = test
        .server
        .mock("POST", "/characters/2114794365/assets/names")
        .with_status(404)
        .expect(1)
        .create();
    let resolver = test.resolver();

    let name = resolver.id_to_name(1035466617946).await;

    assert_eq!(name, "In hangar or station");
    structure.assert();
    asset_names.assert();
    test.assert_mocks();

    Ok(())
}

/// Expect corporations of a contract field to resolve through corporation information
#[tokio::test]
async fn resolves_corporation_field() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_corporation_endpoint(98785281, factory::mock_corporation("The Order of Autumn"), 1)
        .build()
        .await?;
    let resolver = test.resolver();

    resolver
        .resolve_field_ids(&[98785281], "issuer_corporation_id")
        .await?;

    assert_eq!(
        resolver.cache().get_by_id(98785281).as_deref(),
        Some("The Order of Autumn")
    );
    test.assert_mocks();

    Ok(())
}
