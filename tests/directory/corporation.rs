//! Tests for EsiDirectoryClient corporation lookups through the eve_esi client.

use mimir::DirectoryClient;
use mimir_test_utils::prelude::*;

/// Expect the corporation's name from its public information
#[tokio::test]
async fn resolves_corporation_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_corporation_endpoint(98785281, factory::mock_corporation("The Order of Autumn"), 1)
        .build()
        .await?;

    let name = test.directory.corporation_info(98785281).await?;

    assert_eq!(name, "The Order of Autumn");
    test.assert_mocks();

    Ok(())
}

/// Expect an error for a corporation ESI does not know
#[tokio::test]
async fn unknown_corporation_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/corporations/1")
                .with_status(404)
                .with_header("content-type", "application/json")
                .with_body(r#"{"error":"Corporation not found"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test.directory.corporation_info(1).await;

    assert!(result.is_err());
    test.assert_mocks();

    Ok(())
}
