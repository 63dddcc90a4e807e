//! Tests for EsiDirectoryClient asset name and location lookups.

use mimir::{DirectoryClient, Error};
use mimir_test_utils::prelude::*;

/// Expect custom names of the session character's assets
#[tokio::test]
async fn resolves_asset_names() -> Result<(), TestError> {
    let names = vec![factory::mock_asset_name(1035466617946, "Autumn's Freighter")];
    let test = TestBuilder::new()
        .with_session()
        .with_asset_names_endpoint(vec![1035466617946], names.clone(), 1)
        .build()
        .await?;

    let result = test
        .directory
        .asset_custom_names_by_ids(&[1035466617946])
        .await?;

    assert_eq!(result, Some(names));
    test.assert_mocks();

    Ok(())
}

/// Expect positions of the session character's assets
#[tokio::test]
async fn resolves_asset_locations() -> Result<(), TestError> {
    let locations = vec![
        factory::mock_asset_location(1035466617946, 0.0, 0.0, 0.0),
        factory::mock_asset_location(1035466617947, 1.5, -2.0, 3.0),
    ];
    let test = TestBuilder::new()
        .with_session()
        .with_asset_locations_endpoint(
            vec![1035466617946, 1035466617947],
            locations.clone(),
            1,
        )
        .build()
        .await?;

    let result = test
        .directory
        .asset_locations_by_ids(&[1035466617946, 1035466617947])
        .await?;

    assert_eq!(result, Some(locations));
    test.assert_mocks();

    Ok(())
}

/// Expect Unauthorized without a request when no session was installed
#[tokio::test]
async fn asset_lookups_require_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let names = test
        .directory
        .asset_custom_names_by_ids(&[1035466617946])
        .await;
    let locations = test.directory.asset_locations_by_ids(&[1035466617946]).await;

    assert!(matches!(names, Err(Error::Unauthorized(_))));
    assert!(matches!(locations, Err(Error::Unauthorized(_))));

    Ok(())
}

/// Expect clearing the session to revoke authorization
#[tokio::test]
async fn clearing_session_revokes_authorization() -> Result<(), TestError> {
    let test = TestBuilder::new().with_session().build().await?;
    assert!(test.directory.is_authorized());

    test.directory.set_session(None);

    assert!(!test.directory.is_authorized());

    Ok(())
}
