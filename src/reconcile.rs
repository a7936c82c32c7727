//! Reconciliation of source usage with the translation catalogs.
//!
//! [`diff`] computes which identifiers were added to or removed from the
//! sources, [`disambiguation`] lets an operator turn add/remove pairs into
//! renames, and [`updater`] applies the outcome to each locale catalog.
pub mod diff;
pub mod disambiguation;
pub mod updater;

pub use diff::{
    compute_additions,
    compute_removals,
};
pub use disambiguation::{
    Classification,
    DisambiguationOutcome,
    DisambiguationSession,
    Reconciliation,
};
pub use updater::{
    CatalogChanges,
    LocaleRole,
    apply_additions,
    apply_reconciliation,
    apply_removals,
    apply_updates,
    prune_orphans,
};
