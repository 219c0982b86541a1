//! Stage 1 (Tone): literal stock-phrase swaps selected by the brand's tone.

use bv_core::types::Tone;
use std::sync::LazyLock;

use crate::phrase::{apply_rules, compile_table, MatchMode, PhraseRule};

/// Throat-clearing openers and hedges removed for a direct voice.
const DIRECT: &[(&str, &str)] = &[
    ("we are excited to announce", ""),
    ("we're excited to announce", ""),
    ("we are pleased to inform you", ""),
    ("we're pleased to inform you", ""),
    ("it gives us great pleasure", ""),
    ("we would like to", "we'll"),
    ("in order to", "to"),
    ("for the purpose of", "to"),
    ("might be able to", "can"),
    ("we believe that", ""),
];

const FRIENDLY: &[(&str, &str)] = &[
    ("dear sir/madam", "Hi there"),
    ("we are writing to inform", "we wanted to let you know"),
    ("do not hesitate to", "feel free to"),
    ("we apologize for any inconvenience", "sorry for any hassle"),
    ("sincerely", "thanks"),
    ("kind regards", "cheers"),
];

const PROFESSIONAL: &[(&str, &str)] = &[
    ("hi there", "Dear"),
    ("thanks", "Thank you"),
    ("can't", "cannot"),
    ("won't", "will not"),
    ("we'll", "we will"),
];

const PREMIUM: &[(&str, &str)] = &[
    ("cheap", "value-focused"),
    ("basic", "essential"),
    ("standard", "classic"),
    ("good", "excellent"),
    ("nice", "exceptional"),
];

const CASUAL: &[(&str, &str)] = &[
    ("cannot", "can't"),
    ("will not", "won't"),
    ("do not", "don't"),
    ("we will", "we'll"),
    ("you will", "you'll"),
];

static DIRECT_RULES: LazyLock<Vec<PhraseRule>> = LazyLock::new(|| compile_table(DIRECT, MatchMode::Literal));
static FRIENDLY_RULES: LazyLock<Vec<PhraseRule>> = LazyLock::new(|| compile_table(FRIENDLY, MatchMode::Literal));
static PROFESSIONAL_RULES: LazyLock<Vec<PhraseRule>> =
    LazyLock::new(|| compile_table(PROFESSIONAL, MatchMode::Literal));
static PREMIUM_RULES: LazyLock<Vec<PhraseRule>> = LazyLock::new(|| compile_table(PREMIUM, MatchMode::Literal));
static CASUAL_RULES: LazyLock<Vec<PhraseRule>> = LazyLock::new(|| compile_table(CASUAL, MatchMode::Literal));

/// Rule table for a tone; `None` for neutral.
pub fn rules_for(tone: Tone) -> Option<&'static [PhraseRule]> {
    let rules: &'static Vec<PhraseRule> = match tone {
        Tone::Neutral => return None,
        Tone::Direct => &*DIRECT_RULES,
        Tone::Friendly => &*FRIENDLY_RULES,
        Tone::Professional => &*PROFESSIONAL_RULES,
        Tone::Premium => &*PREMIUM_RULES,
        Tone::Casual => &*CASUAL_RULES,
    };
    Some(rules.as_slice())
}

/// Apply the tone table. Neutral is a no-op.
pub fn apply(text: &str, tone: Tone) -> String {
    match rules_for(tone) {
        Some(rules) => apply_rules(text, rules),
        None => text.to_string(),
    }
}
