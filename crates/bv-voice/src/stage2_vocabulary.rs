//! Stage 2 (Vocabulary): whole-word plain-language and de-jargon tables.

use bv_core::types::Vocabulary;
use std::sync::LazyLock;

use crate::phrase::{apply_rules, compile_table, MatchMode, PhraseRule};

const SIMPLE: &[(&str, &str)] = &[
    ("comprehensive", "complete"),
    ("utilize", "use"),
    ("facilitate", "help"),
    ("innovative", "new"),
    ("cutting-edge", "modern"),
    ("revolutionary", "new"),
    ("exceptional", "great"),
    ("outstanding", "great"),
    ("leverage", "use"),
    ("implement", "use"),
    ("optimize", "improve"),
    ("enhance", "improve"),
    ("accommodate", "help"),
    ("demonstrate", "show"),
    ("collaborate", "work with"),
    ("communicate", "talk"),
];

const NO_JARGON: &[(&str, &str)] = &[
    ("solutions", "options"),
    ("paradigm", "approach"),
    ("synergy", "teamwork"),
    ("leverage", "use"),
    ("robust", "strong"),
    ("scalable", "flexible"),
    ("seamless", "smooth"),
    ("cutting-edge", "modern"),
    ("state-of-the-art", "modern"),
    ("best-in-class", "top"),
    ("world-class", "quality"),
    ("industry-leading", "leading"),
];

static SIMPLE_RULES: LazyLock<Vec<PhraseRule>> = LazyLock::new(|| compile_table(SIMPLE, MatchMode::WholeWord));
static NO_JARGON_RULES: LazyLock<Vec<PhraseRule>> =
    LazyLock::new(|| compile_table(NO_JARGON, MatchMode::WholeWord));

/// Apply the vocabulary table. `Technical` and `Standard` leave the text alone.
pub fn apply(text: &str, vocabulary: Vocabulary) -> String {
    match vocabulary {
        Vocabulary::Simple => apply_rules(text, &SIMPLE_RULES),
        Vocabulary::NoJargon => apply_rules(text, &NO_JARGON_RULES),
        Vocabulary::Technical | Vocabulary::Standard => text.to_string(),
    }
}

pub fn is_active(vocabulary: Vocabulary) -> bool {
    matches!(vocabulary, Vocabulary::Simple | Vocabulary::NoJargon)
}
