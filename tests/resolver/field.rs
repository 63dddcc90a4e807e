//! Tests for Resolver::resolve_field_ids and Resolver::resolve_record_fields.

use std::sync::Arc;

use mimir::Error;
use mimir_test_utils::prelude::*;
use serde_json::json;

use super::{resolver, DYNAMIC_ID};

/// Expect an unmapped field to be rejected before any remote call
#[tokio::test]
async fn unmapped_field_is_rejected() {
    let stub = Arc::new(StubDirectory::new());
    let resolver = resolver(&stub);

    let result = resolver.resolve_field_ids(&[34], "price").await;

    assert!(matches!(result, Err(Error::InvalidField(field)) if field == "price"));
    assert_eq!(stub.call_count(), 0);
}

/// Expect character fields to resolve through universe names
#[tokio::test]
async fn character_fields_use_universe_names() -> Result<(), Error> {
    let stub = Arc::new(StubDirectory::new().with_name(2114794365, "Hyziri"));
    let resolver = resolver(&stub);

    resolver
        .resolve_field_ids(&[2114794365, 0], "issuer_id")
        .await?;

    assert_eq!(
        stub.calls(),
        vec![DirectoryCall::NamesByIds(vec![2114794365])]
    );
    assert_eq!(
        resolver.cache().get_by_id(2114794365).as_deref(),
        Some("Hyziri")
    );

    Ok(())
}

/// Expect an unset ID to read as "None" from the cache without a remote call
#[tokio::test]
async fn unset_id_reads_as_none_from_cache() -> Result<(), Error> {
    let stub = Arc::new(StubDirectory::new().with_name(90000001, "Zoe Ferris"));
    let resolver = resolver(&stub);

    resolver.resolve_field_ids(&[0], "acceptor_id").await?;

    assert_eq!(resolver.cache().get_by_id(0).as_deref(), Some("None"));
    assert_eq!(stub.call_count(), 0);

    resolver
        .resolve_field_ids(&[0, 90000001], "acceptor_id")
        .await?;

    assert_eq!(resolver.cache().get_by_id(0).as_deref(), Some("None"));
    assert_eq!(
        resolver.cache().get_by_id(90000001).as_deref(),
        Some("Zoe Ferris")
    );
    assert_eq!(stub.calls(), vec![DirectoryCall::NamesByIds(vec![90000001])]);

    Ok(())
}

/// Expect corporation fields to resolve through corporation information
#[tokio::test]
async fn corporation_fields_use_corporation_info() -> Result<(), Error> {
    let stub = Arc::new(
        StubDirectory::new()
            .with_corporation(98785281, "The Order of Autumn")
            .with_name(98785281, "Wrong Source"),
    );
    let resolver = resolver(&stub);

    resolver
        .resolve_field_ids(&[98785281, 1], "issuer_corporation_id")
        .await?;

    let mut calls = stub.calls();
    calls.sort_by_key(|call| format!("{:?}", call));
    assert_eq!(
        calls,
        vec![
            DirectoryCall::CorporationInfo(1),
            DirectoryCall::CorporationInfo(98785281),
        ]
    );
    assert_eq!(
        resolver.cache().get_by_id(98785281).as_deref(),
        Some("The Order of Autumn")
    );
    // Failed corporation lookups are absorbed as unknown
    assert!(resolver.cache().contains_id(1));
    assert!(!resolver.cache().is_resolved(1));

    Ok(())
}

/// Expect location fields to probe stations and structures
#[tokio::test]
async fn location_fields_probe_stations_and_structures() -> Result<(), Error> {
    let stub = Arc::new(
        StubDirectory::new()
            .authorized()
            .with_name(60003760, "Jita IV - Moon 4 - Caldari Navy Assembly Plant")
            .with_structures(&[(DYNAMIC_ID, "Jita - Player Citadel")]),
    );
    let resolver = resolver(&stub);

    resolver
        .resolve_field_ids(&[DYNAMIC_ID, 60003760], "start_location_id")
        .await?;

    assert_eq!(
        stub.calls(),
        vec![
            DirectoryCall::NamesByIds(vec![60003760]),
            DirectoryCall::StructureById(DYNAMIC_ID),
        ]
    );
    assert_eq!(
        resolver.cache().get_by_id(DYNAMIC_ID).as_deref(),
        Some("Jita - Player Citadel")
    );

    Ok(())
}

/// Expect every listed ID field of every record to be resolved once
#[tokio::test]
async fn resolves_record_fields() -> Result<(), Error> {
    let stub = Arc::new(
        StubDirectory::new()
            .with_name(2114794365, "Hyziri")
            .with_name(60003760, "Jita IV - Moon 4 - Caldari Navy Assembly Plant")
            .with_name(34, "Tritanium")
            .with_corporation(98785281, "The Order of Autumn"),
    );
    let resolver = resolver(&stub);
    let contracts = vec![
        json!({
            "contract_id": 1,
            "issuer_id": 2114794365,
            "issuer_corporation_id": 98785281,
            "start_location_id": 60003760,
            "type_id": 34,
            "price": 1000000.0
        }),
        json!({
            "contract_id": 2,
            "issuer_id": 2114794365,
            "issuer_corporation_id": 98785281,
            "start_location_id": 60003760,
            "price": 25000.0
        }),
    ];

    resolver
        .resolve_record_fields(
            &contracts,
            &["issuer_id", "issuer_corporation_id", "start_location_id", "price"],
        )
        .await?;

    let cache = resolver.cache();
    assert_eq!(cache.get_by_id(2114794365).as_deref(), Some("Hyziri"));
    assert_eq!(
        cache.get_by_id(98785281).as_deref(),
        Some("The Order of Autumn")
    );
    assert_eq!(
        cache.get_by_id(60003760).as_deref(),
        Some("Jita IV - Moon 4 - Caldari Navy Assembly Plant")
    );
    // type_id was not listed
    assert_eq!(cache.get_by_id(34), None);

    let calls = stub.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.contains(&DirectoryCall::NamesByIds(vec![2114794365])));
    assert!(calls.contains(&DirectoryCall::NamesByIds(vec![60003760])));
    assert!(calls.contains(&DirectoryCall::CorporationInfo(98785281)));

    Ok(())
}

/// Expect renderers to be able to tell ID columns apart
#[test]
fn id_fields_are_recognized() {
    assert!(mimir::resolver::is_id_field("issuer_corporation_id"));
    assert!(mimir::resolver::is_id_field("location_id"));
    assert!(!mimir::resolver::is_id_field("price"));
}
