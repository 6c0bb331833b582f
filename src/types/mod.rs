//! Request/response data model for the generation endpoint.
//!
//! All entities here are constructed fresh per request and are immutable
//! after construction; nothing outlives the cache entry's TTL.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Game identifier. Selects the word vs. story path, the cache region, and
/// whether a wrong spelling is attached to each word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    AcidRain,
    SpellingBloom,
    StoryTime,
    WordRace,
    /// Accepted for cache partitioning parity; the server never branches on it.
    LetterPop,
}

impl GameMode {
    /// Parse a query-parameter value. Unknown values fall back to the
    /// default mode rather than erroring, matching the endpoint contract.
    pub fn parse(value: &str) -> Self {
        match value {
            "acid-rain" => GameMode::AcidRain,
            "spelling-bloom" => GameMode::SpellingBloom,
            "story-time" => GameMode::StoryTime,
            "word-race" => GameMode::WordRace,
            "letter-pop" => GameMode::LetterPop,
            _ => GameMode::AcidRain,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            GameMode::AcidRain => "acid-rain",
            GameMode::SpellingBloom => "spelling-bloom",
            GameMode::StoryTime => "story-time",
            GameMode::WordRace => "word-race",
            GameMode::LetterPop => "letter-pop",
        }
    }

    /// Story mode has its own cache region and TTL.
    pub fn is_story(&self) -> bool {
        matches!(self, GameMode::StoryTime)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::AcidRain
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Difficulty tier. Drives both the model prompt wording and the dictionary
/// pool selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Parse a query-parameter value; unknown values fall back to `easy`.
    pub fn parse(value: &str) -> Self {
        match value {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "expert" => Difficulty::Expert,
            _ => Difficulty::Easy,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Where the returned content came from. Observability only; callers never
/// branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Every word (or the story) came from the model.
    Ai,
    /// The model produced fewer unique valid words than requested; the
    /// remainder was filled from the dictionary.
    AiPartialDictionaryPadded,
    /// The model call failed; the whole list came from the dictionary.
    DictionaryFallbackAiError,
    /// No model endpoint is configured.
    DictionaryNoAi,
    /// The model answered but yielded zero usable words.
    DictionaryFallbackZeroResult,
}

impl Provenance {
    pub fn is_dictionary_only(&self) -> bool {
        !matches!(self, Provenance::Ai)
    }
}

/// A generation request, derived from inbound query parameters with
/// documented defaults. Extra query parameters (e.g. a caller-supplied
/// timestamp) have no semantic effect here; they only widen the cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Story template selector, echoed verbatim in the response.
    pub level: String,
    /// Desired number of words; ignored for stories.
    pub count: usize,
}

impl GenerationRequest {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            mode,
            difficulty,
            level: "1".to_string(),
            count: 10,
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Build a request from raw query parameters, applying the endpoint's
    /// defaults for anything missing or malformed.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mode = params
            .get("mode")
            .map(|v| GameMode::parse(v))
            .unwrap_or_default();
        let difficulty = params
            .get("difficulty")
            .map(|v| Difficulty::parse(v))
            .unwrap_or_default();
        let level = params
            .get("level")
            .cloned()
            .unwrap_or_else(|| "1".to_string());
        let count = params
            .get("count")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(10);
        Self {
            mode,
            difficulty,
            level,
            count,
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}

/// One word in a word-list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordItem {
    /// Unique within one response (`word-{timestamp}-{index}`); not
    /// meaningful across responses.
    pub id: String,
    /// Non-empty, lowercase, alphabetic only.
    pub text: String,
    /// Adjacent-transposition misspelling, attached only for the
    /// spelling-bloom mode. Equals `text` when the word has fewer than two
    /// characters.
    #[serde(rename = "wrongSpelling", skip_serializing_if = "Option::is_none")]
    pub wrong_spelling: Option<String>,
}

/// Successful response payload: either a word list or a story, plus the
/// echoed request coordinates and a provenance tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<WordItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    pub level: String,
    pub mode: GameMode,
    pub source: Provenance,
}

impl GenerationResponse {
    pub fn words(items: Vec<WordItem>, request: &GenerationRequest, source: Provenance) -> Self {
        Self {
            success: true,
            words: Some(items),
            story: None,
            level: request.level.clone(),
            mode: request.mode,
            source,
        }
    }

    pub fn story(text: String, request: &GenerationRequest) -> Self {
        Self {
            success: true,
            words: None,
            story: Some(text),
            level: request.level.clone(),
            mode: request.mode,
            source: Provenance::Ai,
        }
    }
}
