//! Word-list prompting, normalization, and misspelling synthesis.

use crate::types::Difficulty;
use rand::Rng;

/// Semantic categories the prompt rotates through so repeated requests do
/// not converge on the same vocabulary.
pub const WORD_CATEGORIES: &[&str] = &[
    "animals",
    "food",
    "nature",
    "space",
    "fantasy",
    "school",
    "home",
    "technology",
    "ocean",
    "emotions",
    "colors",
    "clothing",
    "sports",
    "music",
    "art",
    "professions",
];

pub const WORDS_SYSTEM_PROMPT: &str = "You are a helpful assistant that generates word lists \
     for kids learning English. Always respond with only comma-separated words, nothing else.";

/// Length wording for each difficulty tier.
pub fn length_hint(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "STRICTLY 3-letter simple words (e.g., cat, dog, sun)",
        Difficulty::Medium => "STRICTLY 4-5 letter common words (e.g., play, jump, tree)",
        Difficulty::Hard => "STRICTLY 6-8 letter words (e.g., school, rainbow, dolphin)",
        Difficulty::Expert => {
            "STRICTLY 9+ letter challenging words (e.g., adventure, education, technology)"
        }
    }
}

/// User prompt requesting exactly `count` comma-separated words.
pub fn word_list_prompt(category: &str, difficulty: Difficulty, count: usize) -> String {
    format!(
        "Generate exactly {count} unique English words related to \"{category}\" \
         (or general kid-friendly words if needed) for kids learning typing. \
         Difficulty: {hint}. \
         CRITICAL: All generated words MUST be exactly within the character length range \
         specified for the difficulty. \
         Return ONLY the words as a comma-separated list, no explanations or numbering.",
        hint = length_hint(difficulty),
    )
}

/// Normalize raw model output into clean words: split on commas and
/// newlines, lowercase, strip every non-letter character, drop empties,
/// and deduplicate preserving first-seen order.
pub fn normalize_word_list(raw: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut words = Vec::new();
    for piece in raw.split(|c| c == ',' || c == '\n') {
        let word: String = piece
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase())
            .collect();
        if !word.is_empty() && seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}

/// Swap two adjacent characters at a uniformly random position, chosen
/// among the pairs whose letters differ so the result never equals the
/// input. Words with fewer than two characters, or made of a single
/// repeated letter, pass through unchanged; those degenerate cases are
/// intentionally not errors.
pub fn wrong_spelling<R: Rng>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return word.to_string();
    }
    // Swapping a doubled letter ("egg" at index 1) would hand back the
    // original word, so only unequal pairs are candidates.
    let candidates: Vec<usize> = (0..chars.len() - 1)
        .filter(|&i| chars[i] != chars[i + 1])
        .collect();
    match candidates.as_slice() {
        [] => word.to_string(),
        _ => {
            let index = candidates[rng.gen_range(0..candidates.len())];
            chars.swap(index, index + 1);
            chars.into_iter().collect()
        }
    }
}
