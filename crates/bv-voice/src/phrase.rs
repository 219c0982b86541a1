//! Case-insensitive phrase replacement shared by every stage.

use regex::{Captures, Regex};

/// How a phrase is matched against the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Anywhere in the text, including inside longer words.
    Literal,
    /// Only where the phrase is not glued to surrounding word characters.
    WholeWord,
}

/// One compiled `from -> to` rule.
#[derive(Debug, Clone)]
pub struct PhraseRule {
    re: Regex,
    to: String,
}

impl PhraseRule {
    pub fn new(from: &str, to: &str, mode: MatchMode) -> Result<Self, regex::Error> {
        Ok(Self { re: Regex::new(&pattern_for(from, mode))?, to: to.to_string() })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    /// Replace every occurrence, carrying a leading capital over to the replacement.
    pub fn apply(&self, text: &str) -> String {
        self.re
            .replace_all(text, |caps: &Captures| match_case(&caps[0], &self.to))
            .into_owned()
    }
}

/// Compile a static table. Patterns are escaped literals, so compilation cannot fail.
pub fn compile_table(table: &[(&str, &str)], mode: MatchMode) -> Vec<PhraseRule> {
    table
        .iter()
        .map(|(from, to)| PhraseRule::new(from, to, mode).expect("escaped literal is a valid regex"))
        .collect()
}

/// Apply rules in order; each rule sees the previous rule's output.
pub fn apply_rules(text: &str, rules: &[PhraseRule]) -> String {
    let mut result = text.to_string();
    for rule in rules {
        if rule.is_match(&result) {
            result = rule.apply(&result);
        }
    }
    result
}

fn pattern_for(phrase: &str, mode: MatchMode) -> String {
    // Straight and typographic apostrophes are interchangeable.
    let body = regex::escape(phrase).replace('\'', "['\u{2019}]");
    match mode {
        MatchMode::Literal => format!("(?i){body}"),
        MatchMode::WholeWord => {
            let lead = if phrase.chars().next().is_some_and(is_word_char) { r"\b" } else { "" };
            let tail = if phrase.chars().last().is_some_and(is_word_char) { r"\b" } else { "" };
            format!("(?i){lead}{body}{tail}")
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Uppercase the replacement's first letter when the matched text started with one.
pub fn match_case(matched: &str, replacement: &str) -> String {
    if matched.chars().next().is_some_and(char::is_uppercase) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
