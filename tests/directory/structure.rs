//! Tests for EsiDirectoryClient structure lookups.

use mimir::{DirectoryClient, Error};
use mimir_test_utils::prelude::*;

/// Expect structure information when the session's token is accepted
#[tokio::test]
async fn resolves_structure_with_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session()
        .with_structure_endpoint(
            1035466617946,
            factory::mock_structure("Jita - Player Citadel"),
            1,
        )
        .build()
        .await?;

    let structure = test.directory.structure_by_id(1035466617946, true).await?;

    assert_eq!(
        structure.map(|s| s.name),
        Some("Jita - Player Citadel".to_string())
    );
    test.assert_mocks();

    Ok(())
}

/// Expect None for a structure ESI does not know
#[tokio::test]
async fn unknown_structure_is_none() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_session().build().await?;
    let mock = test
        .esi()
        .create_structure_error_endpoint(1035466617946, 404, 1);

    let structure = test.directory.structure_by_id(1035466617946, true).await?;

    assert_eq!(structure, None);
    mock.assert();

    Ok(())
}

/// Expect Unauthorized when the character has no docking access
#[tokio::test]
async fn forbidden_structure_is_unauthorized() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_session().build().await?;
    let mock = test
        .esi()
        .create_structure_error_endpoint(1035466617946, 403, 1);

    let result = test.directory.structure_by_id(1035466617946, true).await;

    assert!(matches!(result, Err(Error::Unauthorized(_))));
    mock.assert();

    Ok(())
}

/// Expect Unauthorized without a request when no session was installed
#[tokio::test]
async fn authorized_lookup_without_session_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = test.directory.structure_by_id(1035466617946, true).await;

    assert!(matches!(result, Err(Error::Unauthorized(_))));
    assert!(!test.directory.is_authorized());

    Ok(())
}
