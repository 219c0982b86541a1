use crate::*;
use crate::extractor;
use crate::phrase::{match_case, MatchMode, PhraseRule};
use crate::stage3_sentence;
use crate::stage5_whitespace;
use bv_core::types::*;

fn with(tone: Tone, vocabulary: Vocabulary, sentence_style: SentenceStyle) -> BrandCharacteristics {
    BrandCharacteristics { tone, vocabulary, sentence_style, ..Default::default() }
}

fn tone(t: Tone) -> BrandCharacteristics {
    with(t, Vocabulary::Standard, SentenceStyle::Standard)
}

// ========== Extractor: categories ==========

#[test]
fn test_extract_empty_profile() {
    let c = extract_characteristics("");
    assert_eq!(c, BrandCharacteristics::default());
    assert_eq!(c.tone, Tone::Neutral);
    assert_eq!(c.vocabulary, Vocabulary::Standard);
    assert_eq!(c.sentence_style, SentenceStyle::Standard);
}

#[test]
fn test_extract_is_pure() {
    let profile = "Friendly and warm. Write like \"Hey!\" and keep it brief.";
    assert_eq!(extract_characteristics(profile), extract_characteristics(profile));
}

#[test]
fn test_tone_priority_direct_beats_friendly() {
    let c = extract_characteristics("We are friendly but direct.");
    assert_eq!(c.tone, Tone::Direct);
}

#[test]
fn test_tone_keywords() {
    assert_eq!(extractor::detect_tone("straightforward copy"), Tone::Direct);
    assert_eq!(extractor::detect_tone("warm welcome"), Tone::Friendly);
    assert_eq!(extractor::detect_tone("expert voice"), Tone::Professional);
    assert_eq!(extractor::detect_tone("luxury goods"), Tone::Premium);
    assert_eq!(extractor::detect_tone("relaxed vibe"), Tone::Casual);
    assert_eq!(extractor::detect_tone("nothing here"), Tone::Neutral);
}

#[test]
fn test_tone_case_insensitive() {
    assert_eq!(extract_characteristics("PREMIUM BRAND").tone, Tone::Premium);
}

#[test]
fn test_vocabulary_simple_beats_technical() {
    let c = extract_characteristics("Simple words, but technical accuracy.");
    assert_eq!(c.vocabulary, Vocabulary::Simple);
}

#[test]
fn test_vocabulary_variants() {
    assert_eq!(extract_characteristics("Write in plain English.").vocabulary, Vocabulary::Simple);
    assert_eq!(extract_characteristics("An expert audience.").vocabulary, Vocabulary::Technical);
    assert_eq!(extract_characteristics("Avoid corporate jargon.").vocabulary, Vocabulary::NoJargon);
    assert_eq!(extract_characteristics("Jargon is fine.").vocabulary, Vocabulary::Standard);
}

#[test]
fn test_sentence_style_variants() {
    assert_eq!(extract_characteristics("Use short sentences.").sentence_style, SentenceStyle::Short);
    assert_eq!(extract_characteristics("Short words.").sentence_style, SentenceStyle::Standard);
    assert_eq!(extract_characteristics("Be brief.").sentence_style, SentenceStyle::Concise);
    assert_eq!(extract_characteristics("Comprehensive answers.").sentence_style, SentenceStyle::Detailed);
}

// ========== Extractor: phrases, replacements, highlights ==========

#[test]
fn test_extract_example_phrases() {
    let profile = "\
Write like this: \"We fixed it.\" or \"Done.\"
Don't write like this: \"We are pleased to inform you\"
Write like a human, no quotes here.
Other \"quoted\" line without a cue.";
    let c = extract_characteristics(profile);
    assert_eq!(c.preferred_phrases, ["We fixed it.", "Done.", "We are pleased to inform you"]);
    assert_eq!(c.avoided_phrases, ["We are pleased to inform you"]);
}

#[test]
fn test_dont_write_like_feeds_both_lists() {
    let c = extract_characteristics("Don't write like \"We leverage synergy\"");
    assert_eq!(c.preferred_phrases, ["We leverage synergy"]);
    assert_eq!(c.avoided_phrases, ["We leverage synergy"]);

    let c = extract_characteristics("Don't write \"We leverage synergy\"");
    assert!(c.preferred_phrases.is_empty());
    assert_eq!(c.avoided_phrases, ["We leverage synergy"]);
}

#[test]
fn test_extract_phrases_typographic_quotes() {
    let profile = "Don\u{2019}t write \u{201C}synergy\u{201D}\nwrite like \u{201C}thanks!\u{201D}";
    let (preferred, avoided) = extractor::extract_example_phrases(profile);
    assert_eq!(preferred, ["thanks!"]);
    assert_eq!(avoided, ["synergy"]);
}

#[test]
fn test_extract_replacements_section() {
    let profile = "\
Voice: friendly
Replacements:
\"customers\" -> \"members\"
- \"buy\" => \"join\"
not an entry

\"after blank\" -> \"ignored\"";
    let r = extractor::extract_replacements(profile);
    assert_eq!(r, [Replacement::new("customers", "members"), Replacement::new("buy", "join")]);
}

#[test]
fn test_extract_replacements_heading() {
    let profile = "## Word Replacements\n\"cheap\" \u{2192} \"affordable\"\n# Next\n\"x\" -> \"y\"";
    let r = extractor::extract_replacements(profile);
    assert_eq!(r, [Replacement::new("cheap", "affordable")]);
}

#[test]
fn test_no_replacements_without_section() {
    assert!(extractor::extract_replacements("\"a\" -> \"b\"").is_empty());
}

#[test]
fn test_highlights_truncated_to_five() {
    let profile = (1..=7).map(|i| format!("- point {i}")).collect::<Vec<_>>().join("\n");
    let h = extractor::extract_highlights(&profile);
    assert_eq!(h.len(), 5);
    assert_eq!(h[0], "- point 1");
}

#[test]
fn test_highlights_headings() {
    let profile = "Acme\nTone: warm\n  Positioning: value  \nplain line";
    assert_eq!(extractor::extract_highlights(profile), ["Tone: warm", "Positioning: value"]);
}

// ========== Stage 1: Tone ==========

#[test]
fn test_casual_contractions() {
    let out = apply_transforms("We will not be able to do this.", &tone(Tone::Casual));
    assert_eq!(out, "We won't be able to do this.");
}

#[test]
fn test_casual_global() {
    let out = apply_transforms("It will not start and will not stop.", &tone(Tone::Casual));
    assert_eq!(out, "It won't start and won't stop.");
}

#[test]
fn test_casual_you_will() {
    let out = apply_transforms("You will see that we do not stop.", &tone(Tone::Casual));
    assert_eq!(out, "You'll see that we don't stop.");
}

#[test]
fn test_direct_removes_hedges() {
    let out = apply_transforms("We believe that our product might be able to help.", &tone(Tone::Direct));
    assert_eq!(out, "our product can help.");
}

#[test]
fn test_direct_openers() {
    let out = apply_transforms(
        "We are excited to announce that we would like to help in order to grow.",
        &tone(Tone::Direct),
    );
    assert_eq!(out, "that we'll help to grow.");
}

#[test]
fn test_friendly() {
    let out = apply_transforms(
        "Dear Sir/Madam, do not hesitate to call. Sincerely, Acme",
        &tone(Tone::Friendly),
    );
    assert_eq!(out, "Hi there, feel free to call. Thanks, Acme");
}

#[test]
fn test_friendly_apology() {
    let out = apply_transforms("We apologize for any inconvenience. Kind regards", &tone(Tone::Friendly));
    assert_eq!(out, "Sorry for any hassle. Cheers");
}

#[test]
fn test_professional() {
    let out = apply_transforms("hi there, we can't attend. thanks", &tone(Tone::Professional));
    assert_eq!(out, "Dear, we cannot attend. Thank you");
}

#[test]
fn test_professional_expands_contractions() {
    let out = apply_transforms("We'll call. It won't take long.", &tone(Tone::Professional));
    assert_eq!(out, "We will call. It will not take long.");
}

#[test]
fn test_professional_typographic_apostrophe() {
    let out = apply_transforms("we can\u{2019}t", &tone(Tone::Professional));
    assert_eq!(out, "we cannot");
}

#[test]
fn test_premium() {
    let out = apply_transforms("Our basic plan is good and cheap.", &tone(Tone::Premium));
    assert_eq!(out, "Our essential plan is excellent and value-focused.");
}

#[test]
fn test_neutral_noop() {
    let text = "We will not use cheap jargon.";
    assert_eq!(apply_transforms(text, &tone(Tone::Neutral)), text);
}

// ========== Stage 2: Vocabulary ==========

#[test]
fn test_simple_vocabulary() {
    let c = with(Tone::Neutral, Vocabulary::Simple, SentenceStyle::Standard);
    assert_eq!(apply_transforms("We utilize innovative solutions.", &c), "We use new solutions.");
}

#[test]
fn test_no_jargon_vocabulary() {
    let c = with(Tone::Neutral, Vocabulary::NoJargon, SentenceStyle::Standard);
    assert_eq!(apply_transforms("We utilize innovative solutions.", &c), "We utilize innovative options.");
    assert_eq!(
        apply_transforms("A state-of-the-art, seamless and robust paradigm.", &c),
        "A modern, smooth and strong approach."
    );
}

#[test]
fn test_vocabulary_whole_word() {
    let c = with(Tone::Neutral, Vocabulary::Simple, SentenceStyle::Standard);
    assert_eq!(
        apply_transforms("We implement it; implementation follows.", &c),
        "We use it; implementation follows."
    );
}

#[test]
fn test_vocabulary_keeps_capital() {
    let c = with(Tone::Neutral, Vocabulary::Simple, SentenceStyle::Standard);
    assert_eq!(apply_transforms("Collaborate daily.", &c), "Work with daily.");
}

#[test]
fn test_technical_vocabulary_noop() {
    let c = with(Tone::Neutral, Vocabulary::Technical, SentenceStyle::Standard);
    assert_eq!(apply_transforms("We leverage synergy.", &c), "We leverage synergy.");
}

// ========== Stage 3: Sentence style ==========

#[test]
fn test_concise() {
    let c = with(Tone::Neutral, Vocabulary::Standard, SentenceStyle::Concise);
    assert_eq!(
        apply_transforms("In order to help, we will act in the near future.", &c),
        "To help, we will act soon."
    );
}

#[test]
fn test_concise_table() {
    let c = with(Tone::Neutral, Vocabulary::Standard, SentenceStyle::Concise);
    assert_eq!(
        apply_transforms("Due to the fact that a large number of users wait, act at this point in time.", &c),
        "Because many users wait, act now."
    );
}

#[test]
fn test_short_splits_compounds() {
    let c = with(Tone::Neutral, Vocabulary::Standard, SentenceStyle::Short);
    assert_eq!(
        apply_transforms("We tried, and it worked, but it was slow; we fixed it.", &c),
        "We tried. It worked. However, it was slow. We fixed it."
    );
}

#[test]
fn test_split_capitalizes_only_new_sentences() {
    assert_eq!(stage3_sentence::split_compound("Use e.g. apples, and pears."), "Use e.g. apples. Pears.");
    assert_eq!(stage3_sentence::split_compound("one. two; three"), "one. two.  Three");
    assert_eq!(stage3_sentence::split_compound("Fast, but cheap"), "Fast. However, cheap");
}

#[test]
fn test_short_keeps_abbreviations() {
    let c = with(Tone::Neutral, Vocabulary::Standard, SentenceStyle::Short);
    assert_eq!(
        apply_transforms("Ask Dr. smith vs. others, and see i.e. results.", &c),
        "Ask Dr. smith vs. others. See i.e. results."
    );
}

#[test]
fn test_detailed_noop() {
    let c = with(Tone::Neutral, Vocabulary::Standard, SentenceStyle::Detailed);
    assert_eq!(apply_transforms("In order to help, and more.", &c), "In order to help, and more.");
}

// ========== Stage 4 + 5 ==========

#[test]
fn test_profile_replacements_applied() {
    let c = BrandCharacteristics {
        replacements: vec![Replacement::new("customers", "members")],
        ..Default::default()
    };
    assert_eq!(apply_transforms("Customers love it. customers stay.", &c), "Members love it. members stay.");
}

#[test]
fn test_whitespace_normalized() {
    assert_eq!(apply_transforms("  hello \n\t world  ", &BrandCharacteristics::default()), "hello world");
    assert_eq!(apply_transforms("", &BrandCharacteristics::default()), "");
}

#[test]
fn test_whitespace_idempotent() {
    let c = BrandCharacteristics::default();
    let once = apply_transforms(" a  b\n\nc ", &c);
    assert_eq!(apply_transforms(&once, &c), once);
    assert_eq!(stage5_whitespace::normalize(&once), once);
}

// ========== Ordering & pipeline ==========

#[test]
fn test_stage_order_tone_then_vocabulary() {
    // premium turns "nice" into "exceptional", which the simple table then turns into "great"
    let c = with(Tone::Premium, Vocabulary::Simple, SentenceStyle::Standard);
    assert_eq!(apply_transforms("A nice day.", &c), "A great day.");
}

#[test]
fn test_pipeline_stages_applied() {
    let c = with(Tone::Casual, Vocabulary::Standard, SentenceStyle::Short);
    let r = VoicePipeline::new(&c).rewrite("x");
    assert_eq!(r.stages_applied, ["tone:casual", "sentence:short", "whitespace"]);

    let d = BrandCharacteristics::default();
    assert_eq!(VoicePipeline::new(&d).rewrite("x").stages_applied, ["whitespace"]);
}

#[test]
fn test_local_rewrite_end_to_end() {
    let profile = "We are casual and relaxed. Keep it short, one sentence at a time.";
    let out = local_rewrite("We will not wait, and you will love it.", profile, "acme");
    assert_eq!(out, "We won't wait. You'll love it.");
}

#[test]
fn test_local_rewrite_ignores_brand_name() {
    let profile = "Friendly.";
    assert_eq!(local_rewrite("Sincerely", profile, "a"), local_rewrite("Sincerely", profile, "b"));
}

#[test]
fn test_local_rewrite_with_profile_table() {
    let profile = "Voice: neutral\nReplacements:\n\"shop\" -> \"atelier\"\n";
    assert_eq!(local_rewrite("Visit the shop.", profile, "maison"), "Visit the atelier.");
}

// ========== Phrase helpers ==========

#[test]
fn test_match_case() {
    assert_eq!(match_case("In order to", "to"), "To");
    assert_eq!(match_case("in order to", "to"), "to");
    assert_eq!(match_case("hi there", "Dear"), "Dear");
    assert_eq!(match_case("We are", ""), "");
}

#[test]
fn test_literal_vs_whole_word() {
    let literal = PhraseRule::new("good", "excellent", MatchMode::Literal).unwrap();
    let word = PhraseRule::new("good", "excellent", MatchMode::WholeWord).unwrap();
    assert_eq!(literal.apply("goodness"), "excellentness");
    assert_eq!(word.apply("goodness"), "goodness");
}

#[test]
fn test_whole_word_punctuation_edges() {
    let rule = PhraseRule::new("Acme!", "Acme", MatchMode::WholeWord).unwrap();
    assert_eq!(rule.apply("Try Acme! today"), "Try Acme today");
}

// ========== Bundled profiles ==========

#[test]
fn test_northwind_profile() {
    let c = extract_characteristics(include_str!("../../../brand-profiles/northwind.md"));
    assert_eq!(c.tone, Tone::Casual);
    assert_eq!(c.vocabulary, Vocabulary::Simple);
    assert_eq!(c.sentence_style, SentenceStyle::Short);
    assert_eq!(c.preferred_phrases, ["Grab your boots. The trail's waiting."]);
    assert_eq!(c.avoided_phrases, ["We are pleased to inform you", "Dear valued customer"]);
    assert_eq!(c.replacements.len(), 2);
    assert_eq!(
        apply_transforms("Our customers will not regret this purchase.", &c),
        "Our explorers won't regret this pick up."
    );
}

#[test]
fn test_meridian_profile() {
    let c = extract_characteristics(include_str!("../../../brand-profiles/meridian-bank.txt"));
    assert_eq!(c.tone, Tone::Professional);
    assert_eq!(c.vocabulary, Vocabulary::Technical);
    assert_eq!(c.sentence_style, SentenceStyle::Concise);
    assert_eq!(c.highlights[0], "Tone: professional and expert, never stiff.");
    assert_eq!(c.avoided_phrases, ["Leverage our best-in-class synergy"]);
}
