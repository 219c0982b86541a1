//! Stage 5 (Whitespace): collapse runs to one space and trim.

use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

pub fn normalize(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").trim().to_string()
}
