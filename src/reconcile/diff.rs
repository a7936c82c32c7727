//! Set difference between source usage and the reference catalog.

use crate::input::catalog::Catalog;
use crate::input::source::SourceUsage;

/// Identifiers used in the sources but missing from the reference catalog.
///
/// Ordered like the source usage (sorted by identifier).
#[must_use]
pub fn compute_additions(source: &SourceUsage, reference: &Catalog) -> Vec<String> {
    source.keys().filter(|id| !reference.contains(id)).map(ToString::to_string).collect()
}

/// Identifiers in the reference catalog that no source references any more.
///
/// Ordered like the catalog (sorted by identifier).
#[must_use]
pub fn compute_removals(source: &SourceUsage, reference: &Catalog) -> Vec<String> {
    reference.ids().filter(|id| !source.contains(id)).map(ToString::to_string).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::input::catalog::TranslationRecord;

    fn catalog(ids: &[&str]) -> Catalog {
        Catalog::from_records(ids.iter().map(|id| TranslationRecord::placeholder(*id))).unwrap()
    }

    fn usage(ids: &[&str]) -> SourceUsage {
        ids.iter().copied().collect()
    }

    #[rstest]
    fn additions_and_removals() {
        let source = usage(&["kept", "new.b", "new.a", "kept"]);
        let reference = catalog(&["kept", "gone"]);

        assert_eq!(compute_additions(&source, &reference), vec!["new.a", "new.b"]);
        assert_eq!(compute_removals(&source, &reference), vec!["gone"]);
    }

    #[rstest]
    #[case::both_empty(&[], &[])]
    #[case::empty_source(&[], &["a", "b"])]
    #[case::empty_reference(&["a", "b"], &[])]
    #[case::identical(&["a", "b"], &["b", "a"])]
    #[case::disjoint(&["a", "b"], &["c"])]
    #[case::overlapping(&["a", "b", "c"], &["b", "c", "d", "e"])]
    fn additions_and_removals_partition_the_symmetric_difference(
        #[case] source_ids: &[&str],
        #[case] reference_ids: &[&str],
    ) {
        let source = usage(source_ids);
        let reference = catalog(reference_ids);

        let additions = compute_additions(&source, &reference);
        let removals = compute_removals(&source, &reference);

        let source_set: BTreeSet<&str> = source_ids.iter().copied().collect();
        let reference_set: BTreeSet<&str> = reference_ids.iter().copied().collect();
        let expected: BTreeSet<&str> =
            source_set.symmetric_difference(&reference_set).copied().collect();

        assert_that!(additions.iter().filter(|id| reference.contains(id)).count(), eq(0));
        assert_that!(removals.iter().filter(|id| source.contains(id)).count(), eq(0));
        assert_that!(additions.iter().filter(|id| removals.contains(id)).count(), eq(0));

        let actual: BTreeSet<&str> =
            additions.iter().chain(removals.iter()).map(String::as_str).collect();
        assert_eq!(actual, expected);
        assert_eq!(additions.len() + removals.len(), expected.len());
    }
}
