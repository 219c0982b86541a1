use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall tone a brand writes in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Neutral,
    Direct,
    Friendly,
    Professional,
    Premium,
    Casual,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Direct => "direct",
            Self::Friendly => "friendly",
            Self::Professional => "professional",
            Self::Premium => "premium",
            Self::Casual => "casual",
        }
    }
}

/// Word-choice preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vocabulary {
    #[default]
    Standard,
    Simple,
    Technical,
    NoJargon,
}

impl Vocabulary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Simple => "simple",
            Self::Technical => "technical",
            Self::NoJargon => "no-jargon",
        }
    }
}

/// Sentence-length preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentenceStyle {
    #[default]
    Standard,
    Short,
    Concise,
    Detailed,
}

impl SentenceStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Short => "short",
            Self::Concise => "concise",
            Self::Detailed => "detailed",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Tone, Vocabulary, SentenceStyle);

/// A literal phrase swap declared in a brand profile's replacement section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

/// Structured rules derived from a brand profile's free text.
///
/// Always recomputed from the profile; never cached between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandCharacteristics {
    pub tone: Tone,
    pub vocabulary: Vocabulary,
    pub sentence_style: SentenceStyle,
    pub preferred_phrases: Vec<String>,
    pub avoided_phrases: Vec<String>,
    pub replacements: Vec<Replacement>,
    pub highlights: Vec<String>,
}

/// Output of a rewrite, whichever path produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResult {
    pub original_text: String,
    pub rewritten_text: String,
    pub brand_name: String,
}

/// Which path produced the rewritten text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RewriteSource {
    Remote { provider: String },
    Local,
}

impl RewriteSource {
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

/// Brand listing entry with a short preview of the profile text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSummary {
    pub name: String,
    pub preview: String,
}
