//! EVE IDs and their static/dynamic classification.

use crate::config::DEFAULT_DYNAMIC_ID_THRESHOLD;

/// EVE Online entity identifier.
pub type EveId = i64;

/// Reserved ID that always renders as "None", ESI uses it for absent references.
pub const NONE_ID: EveId = 0;

/// Which family of ESI endpoints can resolve an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdClass {
    /// Static data or account entities: types, characters, corporations, NPC stations.
    Static,
    /// Player structures and individual asset instances.
    Dynamic,
}

/// Classifies IDs as static or dynamic by magnitude.
///
/// CCP allocates player structure and item instance IDs above the 32-bit range, so the
/// magnitude is a cheap discriminator. It is a property of ESI's ID allocation rather
/// than a documented guarantee, hence the configurable threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdClassifier {
    dynamic_threshold: EveId,
}

impl IdClassifier {
    /// Creates a classifier treating IDs strictly above `dynamic_threshold` as dynamic.
    pub fn new(dynamic_threshold: EveId) -> Self {
        Self { dynamic_threshold }
    }

    /// Classify a single ID.
    pub fn classify(&self, id: EveId) -> IdClass {
        if id > self.dynamic_threshold {
            IdClass::Dynamic
        } else {
            IdClass::Static
        }
    }

    /// Split IDs into `(static, dynamic)` keeping their relative order.
    pub fn partition(&self, ids: &[EveId]) -> (Vec<EveId>, Vec<EveId>) {
        ids.iter()
            .partition(|&&id| self.classify(id) == IdClass::Static)
    }
}

impl Default for IdClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_DYNAMIC_ID_THRESHOLD)
    }
}
