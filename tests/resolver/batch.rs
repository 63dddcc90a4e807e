//! Tests for Resolver::id_to_name_batch and Resolver::id_to_name on static IDs.

use std::sync::Arc;

use mimir_test_utils::prelude::*;

use super::resolver;

/// Expect ID 0 to render as "None" without a remote call
#[tokio::test]
async fn id_zero_is_none() {
    let stub = Arc::new(StubDirectory::new());
    let resolver = resolver(&stub);

    assert_eq!(resolver.id_to_name(0).await, "None");
    assert_eq!(resolver.id_to_name_batch(&[0]).await[&0], "None");
    assert_eq!(stub.call_count(), 0);
}

/// Expect the single and batch forms to agree for every ID
#[tokio::test]
async fn batch_agrees_with_single_lookup() {
    let ids = [34, 30000142, 0, 99];
    let stub = Arc::new(
        StubDirectory::new()
            .with_name(34, "Tritanium")
            .with_name(30000142, "Jita"),
    );

    let batch = resolver(&stub).id_to_name_batch(&ids).await;

    for id in ids {
        let single = resolver(&stub).id_to_name(id).await;
        assert_eq!(batch[&id], single);
    }
    assert_eq!(batch[&34], "Tritanium");
    assert_eq!(batch[&99], "Unknown");
}

/// Expect one entry per distinct input ID
#[tokio::test]
async fn one_entry_per_input_id() {
    let stub = Arc::new(StubDirectory::new().with_name(34, "Tritanium"));
    let resolver = resolver(&stub);

    let names = resolver.id_to_name_batch(&[34, 34, 0, 35]).await;

    assert_eq!(names.len(), 3);
    assert_eq!(
        stub.calls(),
        vec![DirectoryCall::NamesByIds(vec![34, 35])]
    );
}

/// Expect a resolved ID to never be requested twice
#[tokio::test]
async fn resolved_ids_are_not_requested_again() {
    let stub = Arc::new(StubDirectory::new().with_name(34, "Tritanium"));
    let resolver = resolver(&stub);

    assert_eq!(resolver.id_to_name(34).await, "Tritanium");
    assert_eq!(resolver.id_to_name(34).await, "Tritanium");
    resolver.id_to_name_batch(&[34, 0]).await;

    assert_eq!(stub.call_count(), 1);
    assert_eq!(resolver.cache().get_by_name("Tritanium"), Some(34));
}

/// Expect unresolved IDs to be cached as "Unknown" and probed again later
#[tokio::test]
async fn unknown_ids_are_probed_again() {
    let stub = Arc::new(StubDirectory::new());
    let resolver = resolver(&stub);

    assert_eq!(resolver.id_to_name(99).await, "Unknown");
    assert!(resolver.cache().contains_id(99));
    assert!(!resolver.cache().is_resolved(99));
    assert_eq!(resolver.cache().get_by_name("Unknown"), None);

    assert_eq!(resolver.id_to_name(99).await, "Unknown");
    assert_eq!(stub.call_count(), 2);
}

/// Expect a chunk rejected over one invalid ID to be retried ID by ID
#[tokio::test]
async fn rejected_chunk_is_retried_individually() {
    let stub = Arc::new(
        StubDirectory::new()
            .with_name(34, "Tritanium")
            .with_name(35, "Pyerite")
            .with_invalid_id(36),
    );
    let resolver = resolver(&stub);

    let names = resolver.id_to_name_batch(&[36, 35, 34]).await;

    assert_eq!(names[&34], "Tritanium");
    assert_eq!(names[&35], "Pyerite");
    assert_eq!(names[&36], "Unknown");
    assert_eq!(
        stub.calls(),
        vec![
            DirectoryCall::NamesByIds(vec![34, 35, 36]),
            DirectoryCall::NamesByIds(vec![34]),
            DirectoryCall::NamesByIds(vec![35]),
            DirectoryCall::NamesByIds(vec![36]),
        ]
    );
}

/// Expect a chunk whose request failed to settle as unknown without being split
#[tokio::test]
async fn failed_chunk_is_not_split() {
    let stub = Arc::new(
        StubDirectory::new()
            .with_name(34, "Tritanium")
            .with_failing_names(),
    );
    let resolver = resolver(&stub);

    let names = resolver.id_to_name_batch(&[36, 35, 34]).await;

    assert_eq!(names[&34], "Unknown");
    assert_eq!(names[&35], "Unknown");
    assert_eq!(names[&36], "Unknown");
    assert_eq!(
        stub.calls(),
        vec![DirectoryCall::NamesByIds(vec![34, 35, 36])]
    );
}

/// Expect static IDs to be requested in chunks of at most 1000
#[tokio::test]
async fn static_ids_are_chunked() {
    let ids: Vec<i64> = (1..=1500).collect();
    let stub = Arc::new(
        ids.iter()
            .fold(StubDirectory::new(), |stub, &id| {
                stub.with_name(id, &format!("Entity {}", id))
            }),
    );
    let resolver = resolver(&stub);

    let names = resolver.id_to_name_batch(&ids).await;

    assert_eq!(names.len(), 1500);
    assert_eq!(names[&1500], "Entity 1500");
    let chunk_sizes: Vec<usize> = stub
        .calls()
        .into_iter()
        .map(|call| match call {
            DirectoryCall::NamesByIds(ids) => ids.len(),
            other => panic!("unexpected call {:?}", other),
        })
        .collect();
    assert_eq!(chunk_sizes, vec![1000, 500]);
}

/// Expect a station and a player structure to both resolve in one batch
#[tokio::test]
async fn resolves_static_and_dynamic_ids_together() {
    let stub = Arc::new(
        StubDirectory::new()
            .authorized()
            .with_name(2001, "Jita IV - Moon 4")
            .with_structures(&[(9000000000001, "Player Citadel")]),
    );
    let resolver = resolver(&stub);

    let names = resolver.id_to_name_batch(&[2001, 9000000000001]).await;

    assert_eq!(names[&2001], "Jita IV - Moon 4");
    assert_eq!(names[&9000000000001], "Player Citadel");
    assert_eq!(
        stub.calls(),
        vec![
            DirectoryCall::NamesByIds(vec![2001]),
            DirectoryCall::StructureById(9000000000001),
        ]
    );
    assert_eq!(resolver.cache().get_by_name("Player Citadel"), Some(9000000000001));
    assert_eq!(resolver.cache().get_by_name("Jita IV - Moon 4"), Some(2001));
}
