//! Voice pipeline: runs the five stages in order over one input.

use bv_core::types::{BrandCharacteristics, Tone};

use crate::{extractor, stage1_tone, stage2_vocabulary, stage3_sentence, stage4_replacements, stage5_whitespace};

/// Rewrite output with the stages that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceResult {
    pub output: String,
    pub stages_applied: Vec<String>,
}

/// Deterministic local rewriter bound to one set of characteristics.
#[derive(Debug, Clone, Copy)]
pub struct VoicePipeline<'a> {
    pub characteristics: &'a BrandCharacteristics,
}

impl<'a> VoicePipeline<'a> {
    pub fn new(characteristics: &'a BrandCharacteristics) -> Self {
        Self { characteristics }
    }

    /// Run every stage. Each stage feeds the next; only whitespace
    /// normalization runs unconditionally.
    pub fn rewrite(&self, text: &str) -> VoiceResult {
        let c = self.characteristics;
        let mut result = text.to_string();
        let mut stages = Vec::new();

        // Stage 1: Tone
        if c.tone != Tone::Neutral {
            result = stage1_tone::apply(&result, c.tone);
            stages.push(format!("tone:{}", c.tone));
        }

        // Stage 2: Vocabulary
        if stage2_vocabulary::is_active(c.vocabulary) {
            result = stage2_vocabulary::apply(&result, c.vocabulary);
            stages.push(format!("vocabulary:{}", c.vocabulary));
        }

        // Stage 3: Sentence style
        if stage3_sentence::is_active(c.sentence_style) {
            result = stage3_sentence::apply(&result, c.sentence_style);
            stages.push(format!("sentence:{}", c.sentence_style));
        }

        // Stage 4: Profile replacements
        if !c.replacements.is_empty() {
            result = stage4_replacements::apply(&result, &c.replacements);
            stages.push("replacements".into());
        }

        // Stage 5: Whitespace (always)
        result = stage5_whitespace::normalize(&result);
        stages.push("whitespace".into());

        tracing::debug!(stages = ?stages, "voice pipeline finished");
        VoiceResult { output: result, stages_applied: stages }
    }
}

/// Apply the transform stages for `characteristics` to `text`.
pub fn apply_transforms(text: &str, characteristics: &BrandCharacteristics) -> String {
    VoicePipeline::new(characteristics).rewrite(text).output
}

/// Local rewrite path: extract rules from the profile, then transform.
///
/// `brand_name` matches the remote provider signature; the local rules come
/// from the profile text alone.
pub fn local_rewrite(text: &str, profile_text: &str, brand_name: &str) -> String {
    tracing::debug!(brand = brand_name, "local rewrite");
    apply_transforms(text, &extractor::extract_characteristics(profile_text))
}
