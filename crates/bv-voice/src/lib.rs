//! Brand voice engine: local, deterministic rewrite driven by a brand profile.
//!
//! Stages:
//! 1. Tone: stock-phrase swaps per tone
//! 2. Vocabulary: plain-word or de-jargon tables
//! 3. Sentence style: split compound sentences or trim wordy constructions
//! 4. Replacements: literal swaps declared in the profile itself
//! 5. Whitespace: collapse runs, trim (always applied)

pub mod extractor;
pub mod phrase;
pub mod pipeline;
pub mod stage1_tone;
pub mod stage2_vocabulary;
pub mod stage3_sentence;
pub mod stage4_replacements;
pub mod stage5_whitespace;

pub use extractor::extract_characteristics;
pub use pipeline::{apply_transforms, local_rewrite, VoicePipeline, VoiceResult};

#[cfg(test)]
mod tests;
