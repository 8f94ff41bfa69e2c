//! Case-insensitive exact-text deduplication within one batch

use std::collections::HashSet;

use crate::core::models::CandidateDraft;

/// Drop drafts whose text repeats an earlier draft, ignoring case
///
/// First occurrence wins and relative order is preserved. Paraphrases are
/// not detected here.
#[must_use]
pub fn dedup_drafts(drafts: Vec<CandidateDraft>) -> Vec<CandidateDraft> {
    let mut seen = HashSet::new();
    drafts
        .into_iter()
        .filter(|draft| seen.insert(draft.text.to_lowercase()))
        .collect()
}
