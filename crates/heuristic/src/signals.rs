/// Phrases matched case-insensitively as clickbait markers.
pub const CLICKBAIT_PHRASES: &[&str] = &["shocking", "you won't believe", "exposed", "bombshell"];

/// `!` count must exceed this to flag sensationalism.
pub const EXCLAMATION_LIMIT: usize = 2;

/// Minimum run of consecutive ASCII capitals that counts as shouting.
pub const ALL_CAPS_RUN: usize = 5;

/// Word count must exceed this for the text to count as well structured.
pub const WELL_STRUCTURED_WORDS: usize = 50;

/// Sentence terminator count must exceed this for multiple sentences.
pub const SENTENCE_LIMIT: usize = 2;

/// Boolean text-pattern detectors feeding the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    pub has_exclamation: bool,
    pub has_all_caps: bool,
    pub has_clickbait: bool,
    pub is_well_structured: bool,
    pub has_multiple_sentences: bool,
}

impl Signals {
    pub fn detect(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let word_count = word_count(text);

        let exclamations = text.chars().filter(|&c| c == '!').count();
        let terminators = text
            .chars()
            .filter(|c| matches!(c, '.' | '!' | '?'))
            .count();

        Self {
            has_exclamation: exclamations > EXCLAMATION_LIMIT,
            has_all_caps: longest_caps_run(text) >= ALL_CAPS_RUN,
            has_clickbait: CLICKBAIT_PHRASES.iter().any(|p| lowered.contains(p)),
            is_well_structured: word_count > WELL_STRUCTURED_WORDS,
            has_multiple_sentences: terminators > SENTENCE_LIMIT,
        }
    }
}

/// Pieces left after splitting on whitespace runs, keeping the empty
/// leading and trailing pieces. The empty string is one piece.
fn word_count(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    runs + 1
}

fn longest_caps_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c.is_ascii_uppercase() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
