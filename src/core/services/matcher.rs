//! Pattern matcher service - turns sentences into raw candidates
//!
//! Pure matching logic with no I/O dependencies.

use crate::core::models::CandidateDraft;

use super::patterns::PatternTable;

/// Apply a trigger table to sentences
///
/// Output order is sentence order, then table order, then match order
/// within the sentence. Every match yields one draft; matches whose
/// captured text is blank after trimming are skipped.
///
/// # Arguments
///
/// * `table` - The trigger table to apply
/// * `sentences` - Segmented sentences, in text order
#[must_use]
pub fn match_sentences(table: &PatternTable, sentences: &[String]) -> Vec<CandidateDraft> {
    let mut drafts = Vec::new();

    for sentence in sentences {
        for pattern in table.patterns() {
            for captured in pattern.captures(sentence) {
                let text = captured.trim();
                if text.is_empty() {
                    continue;
                }
                drafts.push(CandidateDraft::new(table.kind(), text, sentence.as_str(), pattern.id));
            }
        }
    }

    drafts
}
