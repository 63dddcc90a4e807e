use std::collections::HashMap;

use serde_json::Value;

use crate::{
    error::Error,
    model::{category::Category, id::EveId},
    resolver::{batch::IdSource, Resolver},
};

/// What the IDs of a record field refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    /// IDs of a single category.
    Entity(Category),
    /// Station or structure IDs, probed as both.
    Location,
}

const FIELD_TARGETS: [(&str, FieldTarget); 8] = [
    ("acceptor_id", FieldTarget::Entity(Category::Character)),
    ("assignee_id", FieldTarget::Entity(Category::Character)),
    ("issuer_id", FieldTarget::Entity(Category::Character)),
    (
        "issuer_corporation_id",
        FieldTarget::Entity(Category::Corporation),
    ),
    ("start_location_id", FieldTarget::Location),
    ("end_location_id", FieldTarget::Location),
    ("location_id", FieldTarget::Location),
    ("type_id", FieldTarget::Entity(Category::InventoryType)),
];

/// Target of a record field, [`Error::InvalidField`] for fields that hold no resolvable IDs.
pub fn target_for_field(field: &str) -> Result<FieldTarget, Error> {
    FIELD_TARGETS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, target)| *target)
        .ok_or_else(|| Error::InvalidField(field.to_string()))
}

/// Whether a record field holds IDs that render through the cache.
pub fn is_id_field(field: &str) -> bool {
    target_for_field(field).is_ok()
}

impl FieldTarget {
    fn source(self) -> IdSource {
        match self {
            FieldTarget::Entity(Category::Corporation) => IdSource::Corporation,
            // Static IDs resolve through universe names, dynamic locations take the chain
            FieldTarget::Entity(_) | FieldTarget::Location => IdSource::Directory,
        }
    }
}

impl Resolver {
    /// Resolves and caches the IDs found in one record field.
    ///
    /// Returns [`Error::InvalidField`] without touching ESI when the field has no mapping.
    /// Individual IDs that cannot be resolved are cached as "Unknown" rather than failing.
    pub async fn resolve_field_ids(&self, ids: &[EveId], field: &str) -> Result<(), Error> {
        let target = target_for_field(field)?;

        self.resolve_ids(ids, target.source()).await;

        Ok(())
    }

    /// Gathers the IDs of every listed ID field across `records` and resolves them.
    ///
    /// Records are ESI JSON objects. Listed fields that are not ID fields are skipped, distinct
    /// fields resolve concurrently.
    pub async fn resolve_record_fields(
        &self,
        records: &[Value],
        fields: &[&str],
    ) -> Result<(), Error> {
        let mut ids_by_field: HashMap<&str, Vec<EveId>> = HashMap::new();

        for &field in fields.iter().filter(|field| is_id_field(field)) {
            let ids = ids_by_field.entry(field).or_default();
            ids.extend(
                records
                    .iter()
                    .filter_map(|record| record.get(field).and_then(Value::as_i64)),
            );
        }

        let resolutions = ids_by_field
            .iter()
            .map(|(field, ids)| self.resolve_field_ids(ids, field));
        futures::future::try_join_all(resolutions).await?;

        Ok(())
    }
}
