//! Stage 4 (Replacements): literal swaps declared in the brand profile.

use bv_core::types::Replacement;

use crate::phrase::{MatchMode, PhraseRule};

/// Apply profile-supplied replacements in declaration order, whole-word and
/// case-insensitive. Entries with an empty `from` are ignored.
pub fn apply(text: &str, replacements: &[Replacement]) -> String {
    let mut result = text.to_string();
    for r in replacements.iter().filter(|r| !r.from.trim().is_empty()) {
        match PhraseRule::new(&r.from, &r.to, MatchMode::WholeWord) {
            Ok(rule) => result = rule.apply(&result),
            Err(err) => tracing::warn!(from = %r.from, error = %err, "skipping brand replacement"),
        }
    }
    result
}
