//! Applies a reconciliation to locale catalogs.
//!
//! Per catalog the order is updates, additions, removals, so a renamed key is
//! never treated as both removed and updated. Non-reference catalogs are then
//! pruned against the already updated reference catalog.

use std::collections::BTreeMap;

use crate::input::catalog::{
    Catalog,
    TranslationRecord,
};
use crate::reconcile::disambiguation::Reconciliation;

/// Whether a catalog belongs to the reference locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleRole {
    /// Translation always equals the identifier.
    Reference,
    /// Carries translated text that must survive renames.
    Translated,
}

/// Identifiers changed in one catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogChanges {
    /// `(old, new)` pairs
    pub updated: Vec<(String, String)>,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    /// Keys dropped because the reference catalog no longer has them.
    pub pruned: Vec<String>,
}

impl CatalogChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updated.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
            && self.pruned.is_empty()
    }
}

/// Inserts a placeholder record for each identifier the catalog lacks.
///
/// Existing records are left untouched. Returns the inserted identifiers.
pub fn apply_additions(catalog: &mut Catalog, additions: &[String]) -> Vec<String> {
    let mut added = Vec::new();
    for id in additions {
        if catalog.contains(id) {
            continue;
        }
        catalog.insert(TranslationRecord::placeholder(id.as_str()));
        added.push(id.clone());
    }
    added
}

/// Deletes each identifier present in the catalog. Returns the deleted identifiers.
pub fn apply_removals(catalog: &mut Catalog, removals: &[String]) -> Vec<String> {
    removals.iter().filter(|id| catalog.remove(id).is_some()).cloned().collect()
}

/// Moves each `old → new` entry to its new identifier.
///
/// The reference catalog gets a clean placeholder. Other catalogs keep the
/// old translation text (or the new identifier when there was none), marked
/// dirty. Returns the applied `(old, new)` pairs.
pub fn apply_updates(
    catalog: &mut Catalog,
    updates: &BTreeMap<String, String>,
    role: LocaleRole,
) -> Vec<(String, String)> {
    let mut applied = Vec::with_capacity(updates.len());
    for (old_id, new_id) in updates {
        let previous = catalog.remove(old_id);

        let record = match role {
            LocaleRole::Reference => TranslationRecord::placeholder(new_id.as_str()),
            LocaleRole::Translated => match previous {
                Some(previous) => TranslationRecord {
                    id: new_id.clone(),
                    translation: previous.translation,
                    dirty: true,
                    extra: previous.extra,
                },
                None => TranslationRecord::new(new_id.as_str(), new_id.as_str(), true),
            },
        };
        catalog.insert(record);
        applied.push((old_id.clone(), new_id.clone()));
    }
    applied
}

/// Drops every key the reference catalog does not have. Returns the dropped identifiers.
pub fn prune_orphans(catalog: &mut Catalog, reference: &Catalog) -> Vec<String> {
    let orphans: Vec<String> =
        catalog.ids().filter(|id| !reference.contains(id)).map(ToString::to_string).collect();
    catalog.retain(|id| reference.contains(id));
    orphans
}

/// Applies updates, additions and removals in that order.
///
/// With `reference` given, the catalog is a non-reference one and is pruned
/// against it afterwards.
pub fn apply_reconciliation(
    catalog: &mut Catalog,
    state: &Reconciliation,
    reference: Option<&Catalog>,
) -> CatalogChanges {
    let role = if reference.is_some() { LocaleRole::Translated } else { LocaleRole::Reference };

    let updated = apply_updates(catalog, state.updates(), role);
    let added = apply_additions(catalog, state.additions());
    let removed = apply_removals(catalog, state.removals());
    let pruned = reference.map(|reference| prune_orphans(catalog, reference)).unwrap_or_default();

    CatalogChanges { updated, added, removed, pruned }
}
