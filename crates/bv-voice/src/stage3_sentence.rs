//! Stage 3 (Sentence style): split compound sentences or trim wordy constructions.

use bv_core::types::SentenceStyle;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::phrase::{apply_rules, compile_table, MatchMode, PhraseRule};

const CONCISE: &[(&str, &str)] = &[
    ("in order to", "to"),
    ("for the purpose of", "to"),
    ("due to the fact that", "because"),
    ("in spite of the fact that", "although"),
    ("at this point in time", "now"),
    ("in the near future", "soon"),
    ("a large number of", "many"),
    ("a great deal of", "much"),
];

static CONCISE_RULES: LazyLock<Vec<PhraseRule>> = LazyLock::new(|| compile_table(CONCISE, MatchMode::Literal));
static RE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(, and |, but |;)(\s*)(\p{L})?").expect("valid split pattern"));

/// Split compound sentences at `, and`, `, but` and `;`.
///
/// Only the letter that starts a sentence created here is uppercased;
/// after `, but` the new sentence opens with `However, ` and the word keeps its case.
pub fn split_compound(text: &str) -> String {
    RE_SPLIT
        .replace_all(text, |caps: &Captures| {
            let letter = caps.get(3).map_or("", |m| m.as_str());
            if caps[1].eq_ignore_ascii_case(", but ") {
                format!(". However, {}{letter}", &caps[2])
            } else {
                format!(". {}{}", &caps[2], letter.to_uppercase())
            }
        })
        .into_owned()
}

/// Apply the sentence-style pass. `Detailed` and `Standard` leave the text alone.
pub fn apply(text: &str, style: SentenceStyle) -> String {
    match style {
        SentenceStyle::Short => split_compound(text),
        SentenceStyle::Concise => apply_rules(text, &CONCISE_RULES),
        SentenceStyle::Detailed | SentenceStyle::Standard => text.to_string(),
    }
}

pub fn is_active(style: SentenceStyle) -> bool {
    matches!(style, SentenceStyle::Short | SentenceStyle::Concise)
}
