//! Orders gathered groups into the final candidate list.

use std::collections::HashSet;

use super::items::Gathered;

/// Extra group (sorted) followed by the found group (sorted).
///
/// A name present in both groups is kept once, in the extra group.
pub(crate) fn assemble(gathered: Gathered) -> Vec<String> {
    let mut extra = gathered.extra.into_items();
    let mut found = gathered.found.into_items();
    extra.sort();
    found.sort();

    let in_extra: HashSet<&str> = extra.iter().map(String::as_str).collect();
    let found: Vec<String> = found
        .into_iter()
        .filter(|candidate| !in_extra.contains(candidate.as_str()))
        .collect();

    extra.extend(found);
    extra
}

/// Appends a blank entry to a single-candidate list so the editor shows a
/// dropdown instead of inserting the only match directly.
pub(crate) fn pad_single_candidate(candidates: &mut Vec<String>) {
    if candidates.len() == 1 {
        candidates.push(String::new());
    }
}
