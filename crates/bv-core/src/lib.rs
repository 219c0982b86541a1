//! Brand voice core: shared types, configuration, errors and the profile store.

pub mod config;
pub mod error;
pub mod profile;
pub mod types;

pub use config::BrandVoiceConfig;
pub use error::{BvError, Result};
pub use profile::{BrandProfile, ProfileStore};
pub use types::{
    BrandCharacteristics, BrandSummary, Replacement, RewriteResult, RewriteSource, SentenceStyle,
    Tone, Vocabulary,
};
