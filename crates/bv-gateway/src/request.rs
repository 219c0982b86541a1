//! Rewrite request and the prompts sent to remote models.

/// Borrowed inputs for one rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteRequest<'a> {
    pub text: &'a str,
    pub profile: &'a str,
    pub brand_name: &'a str,
}

impl<'a> RewriteRequest<'a> {
    pub fn new(text: &'a str, profile: &'a str, brand_name: &'a str) -> Self {
        Self { text, profile, brand_name }
    }

    /// Instructions carrying the brand profile.
    pub fn system_prompt(&self) -> String {
        format!(
            concat!(
                "You are a copy editor for the brand \"{}\". ",
                "Rewrite the user's text so it matches the brand voice described in the profile below. ",
                "Keep the original meaning and facts. ",
                "Reply with the rewritten text only, without preamble, labels or surrounding quotes.\n\n",
                "Brand profile:\n{}"
            ),
            self.brand_name,
            self.profile.trim()
        )
    }

    /// Single-string prompt for text-generation endpoints without chat roles.
    pub fn instruction_prompt(&self) -> String {
        format!("<s>[INST] {}\n\nText to rewrite:\n{} [/INST]", self.system_prompt(), self.text)
    }
}

/// Trim model output and drop one pair of wrapping quotes.
pub fn clean_output(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = [('"', '"'), ('\u{201C}', '\u{201D}')]
        .iter()
        .find_map(|(open, close)| {
            trimmed
                .strip_prefix(*open)
                .and_then(|rest| rest.strip_suffix(*close))
        })
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}
