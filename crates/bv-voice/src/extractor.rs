//! Rule extraction: brand profile free text to [`BrandCharacteristics`].
//!
//! Keyword matching is case-insensitive substring search over the whole
//! profile. Each category picks the first matching rule in its list.

use bv_core::types::{BrandCharacteristics, Replacement, SentenceStyle, Tone, Vocabulary};
use regex::Regex;
use std::sync::LazyLock;

const MAX_HIGHLIGHTS: usize = 5;

/// Tone rules in priority order.
const TONE_RULES: &[(Tone, &[&str])] = &[
    (Tone::Direct, &["straightforward", "direct"]),
    (Tone::Friendly, &["friendly", "warm"]),
    (Tone::Professional, &["professional", "expert"]),
    (Tone::Premium, &["premium", "luxury"]),
    (Tone::Casual, &["casual", "relaxed"]),
];

const WRITE_LIKE: &str = "write like";
const DONT_WRITE: &[&str] = &["don't write", "don\u{2019}t write"];

static RE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\"\u{201C}]([^\"\u{201C}\u{201D}]+)[\"\u{201D}]").expect("valid quote pattern"));
static RE_REPLACEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "^(?:[-*\u{2022}]\\s*)?",
        "[\"\u{201C}]([^\"\u{201C}\u{201D}]+)[\"\u{201D}]",
        "\\s*(?:->|=>|\u{2192})\\s*",
        "[\"\u{201C}]([^\"\u{201C}\u{201D}]*)[\"\u{201D}]$",
    ))
    .expect("valid replacement pattern")
});

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

pub fn detect_tone(lower: &str) -> Tone {
    TONE_RULES
        .iter()
        .find(|(_, keywords)| contains_any(lower, keywords))
        .map(|(tone, _)| *tone)
        .unwrap_or_default()
}

pub fn detect_vocabulary(lower: &str) -> Vocabulary {
    if contains_any(lower, &["simple", "plain english"]) {
        Vocabulary::Simple
    } else if contains_any(lower, &["technical", "expert"]) {
        Vocabulary::Technical
    } else if lower.contains("jargon") && lower.contains("avoid") {
        Vocabulary::NoJargon
    } else {
        Vocabulary::Standard
    }
}

pub fn detect_sentence_style(lower: &str) -> SentenceStyle {
    if lower.contains("short") && lower.contains("sentence") {
        SentenceStyle::Short
    } else if contains_any(lower, &["concise", "brief"]) {
        SentenceStyle::Concise
    } else if contains_any(lower, &["detailed", "comprehensive"]) {
        SentenceStyle::Detailed
    } else {
        SentenceStyle::Standard
    }
}

fn quoted(line: &str) -> impl Iterator<Item = String> + '_ {
    RE_QUOTED.captures_iter(line).map(|caps| caps[1].to_string())
}

/// Quoted examples after "write like" / "don't write" cues, in line order.
///
/// The cues are checked independently, so `Don't write like "x"` lands in both lists.
pub fn extract_example_phrases(profile: &str) -> (Vec<String>, Vec<String>) {
    let mut preferred = Vec::new();
    let mut avoided = Vec::new();
    for line in profile.lines() {
        if !RE_QUOTED.is_match(line) {
            continue;
        }
        let lower = line.to_lowercase();
        if lower.contains(WRITE_LIKE) {
            preferred.extend(quoted(line));
        }
        if contains_any(&lower, DONT_WRITE) {
            avoided.extend(quoted(line));
        }
    }
    (preferred, avoided)
}

fn is_heading(trimmed: &str) -> bool {
    trimmed.starts_with('#')
}

fn opens_replacement_section(trimmed: &str) -> bool {
    let lower = trimmed.to_lowercase();
    lower.starts_with("replacements:") || (is_heading(trimmed) && lower.contains("replacements"))
}

/// Literal swaps from a `Replacements:` section (or a heading naming one).
///
/// Entries look like `"from" -> "to"`; the section ends at a blank line or
/// the next heading.
pub fn extract_replacements(profile: &str) -> Vec<Replacement> {
    let mut out = Vec::new();
    let mut in_section = false;
    for line in profile.lines() {
        let trimmed = line.trim();
        if opens_replacement_section(trimmed) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if trimmed.is_empty() || is_heading(trimmed) {
            in_section = false;
            continue;
        }
        if let Some(caps) = RE_REPLACEMENT.captures(trimmed) {
            out.push(Replacement::new(&caps[1], &caps[2]));
        }
    }
    out
}

/// Bullet lines and `Voice:`/`Tone:`/`Positioning:` lines, first five.
pub fn extract_highlights(profile: &str) -> Vec<String> {
    profile
        .lines()
        .filter(|line| {
            line.contains(['\u{2022}', '-', '*'])
                || (line.contains(':')
                    && ["Positioning", "Voice", "Tone"].iter().any(|k| line.contains(k)))
        })
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .take(MAX_HIGHLIGHTS)
        .collect()
}

/// Derive the rule set for a profile. Pure and total: empty or unrecognised
/// text yields the defaults.
pub fn extract_characteristics(profile: &str) -> BrandCharacteristics {
    let lower = profile.to_lowercase();
    let (preferred_phrases, avoided_phrases) = extract_example_phrases(profile);
    let characteristics = BrandCharacteristics {
        tone: detect_tone(&lower),
        vocabulary: detect_vocabulary(&lower),
        sentence_style: detect_sentence_style(&lower),
        preferred_phrases,
        avoided_phrases,
        replacements: extract_replacements(profile),
        highlights: extract_highlights(profile),
    };
    tracing::debug!(
        tone = %characteristics.tone,
        vocabulary = %characteristics.vocabulary,
        sentence_style = %characteristics.sentence_style,
        replacements = characteristics.replacements.len(),
        "extracted brand characteristics"
    );
    characteristics
}
