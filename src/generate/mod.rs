//! Content generation: validated word lists and stories.
//!
//! The generator owns the recovery policy around the model:
//!
//! - **Word lists** always succeed. A missing model, a failing model call,
//!   or an empty/short model answer all degrade to the static dictionary,
//!   recorded in the response's [`Provenance`] tag.
//! - **Stories** have no fallback content: a missing or failing model
//!   surfaces the error to the HTTP layer, which answers with a
//!   `success:false` envelope. This asymmetry with the word path is
//!   intentional and preserved from the shipped behavior.
//!
//! A single model attempt is made per request; there is no retry.

pub mod dictionary;
pub mod story;
pub mod words;

use crate::model::TextModel;
use crate::types::{GameMode, GenerationRequest, GenerationResponse, Provenance, WordItem};
use crate::{Error, Result};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

pub struct ContentGenerator {
    model: Option<Arc<dyn TextModel>>,
}

impl ContentGenerator {
    pub fn new(model: Option<Arc<dyn TextModel>>) -> Self {
        Self { model }
    }

    /// Produce a validated payload for the request. Word modes always
    /// return `Ok`; only the story path can fail.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        if request.mode.is_story() {
            self.generate_story(request).await
        } else {
            self.generate_words(request).await
        }
    }

    async fn generate_words(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let count = request.count;

        let (mut selected, source) = match &self.model {
            None => {
                debug!(difficulty = %request.difficulty, "no model configured, using dictionary");
                (
                    self.sample_dictionary(request, count),
                    Provenance::DictionaryNoAi,
                )
            }
            Some(model) => {
                let prompt = {
                    let mut rng = thread_rng();
                    let category = words::WORD_CATEGORIES
                        .choose(&mut rng)
                        .copied()
                        .unwrap_or("animals");
                    words::word_list_prompt(category, request.difficulty, count)
                };

                match model.generate(words::WORDS_SYSTEM_PROMPT, &prompt).await {
                    Ok(raw) => {
                        let mut parsed = words::normalize_word_list(&raw);
                        parsed.truncate(count);
                        if parsed.is_empty() {
                            warn!(mode = %request.mode, "model yielded zero usable words");
                            (
                                self.sample_dictionary(request, count),
                                Provenance::DictionaryFallbackZeroResult,
                            )
                        } else if parsed.len() < count {
                            debug!(
                                produced = parsed.len(),
                                requested = count,
                                "padding short model output from dictionary"
                            );
                            let mut rng = thread_rng();
                            dictionary::pad_from_pool(
                                &mut parsed,
                                request.difficulty,
                                count,
                                &mut rng,
                            );
                            (parsed, Provenance::AiPartialDictionaryPadded)
                        } else {
                            (parsed, Provenance::Ai)
                        }
                    }
                    Err(e) => {
                        warn!(mode = %request.mode, error = %e, "model call failed, using dictionary");
                        (
                            self.sample_dictionary(request, count),
                            Provenance::DictionaryFallbackAiError,
                        )
                    }
                }
            }
        };

        // The tier pools are non-empty by construction, so this refill only
        // matters if a future pool edit breaks that.
        if selected.is_empty() && count > 0 {
            selected = self.sample_dictionary(request, count);
        }

        let timestamp = response_timestamp_ms();
        let mut rng = thread_rng();
        let items: Vec<WordItem> = selected
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let wrong_spelling = (request.mode == GameMode::SpellingBloom)
                    .then(|| words::wrong_spelling(&text, &mut rng));
                WordItem {
                    id: format!("word-{timestamp}-{index}"),
                    text,
                    wrong_spelling,
                }
            })
            .collect();

        Ok(GenerationResponse::words(items, request, source))
    }

    /// Story generation. No dictionary analogue exists here: without a
    /// usable model the whole request fails.
    async fn generate_story(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let model = self.model.as_ref().ok_or(Error::ModelUnavailable)?;

        let prompt = {
            let mut rng = thread_rng();
            let topic = story::STORY_TOPICS
                .choose(&mut rng)
                .copied()
                .unwrap_or("a friendly dragon");
            story::story_prompt(&request.level, topic)
        };

        let raw = model.generate(story::STORY_SYSTEM_PROMPT, &prompt).await?;
        let text = story::sanitize_story(&raw);
        Ok(GenerationResponse::story(text, request))
    }

    fn sample_dictionary(&self, request: &GenerationRequest, count: usize) -> Vec<String> {
        let mut rng = thread_rng();
        dictionary::sample(request.difficulty, count, &mut rng)
    }
}

/// Shared response timestamp used to build per-word identifiers: stable and
/// distinct within one response, meaningless across responses.
fn response_timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;
    use async_trait::async_trait;

    struct FixedModel(&'static str);

    #[async_trait]
    impl TextModel for FixedModel {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl TextModel for FailingModel {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String> {
            Err(Error::model("boom"))
        }
    }

    fn request(mode: GameMode, count: usize) -> GenerationRequest {
        GenerationRequest::new(mode, Difficulty::Easy).with_count(count)
    }

    #[tokio::test]
    async fn test_no_model_uses_dictionary() {
        let generator = ContentGenerator::new(None);
        let response = generator
            .generate(&request(GameMode::AcidRain, 10))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.source, Provenance::DictionaryNoAi);
        let items = response.words.unwrap();
        assert_eq!(items.len(), 10);
        assert!(items.iter().all(|w| w.wrong_spelling.is_none()));
    }

    #[tokio::test]
    async fn test_model_error_never_fails_word_mode() {
        let generator = ContentGenerator::new(Some(Arc::new(FailingModel)));
        let response = generator
            .generate(&request(GameMode::WordRace, 5))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.source, Provenance::DictionaryFallbackAiError);
        assert_eq!(response.words.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_model_output_is_normalized_and_truncated() {
        let generator =
            ContentGenerator::new(Some(Arc::new(FixedModel("Cat, Dog, Sun, Fox, Hen"))));
        let response = generator
            .generate(&request(GameMode::AcidRain, 3))
            .await
            .unwrap();
        assert_eq!(response.source, Provenance::Ai);
        let texts: Vec<String> = response
            .words
            .unwrap()
            .into_iter()
            .map(|w| w.text)
            .collect();
        assert_eq!(texts, vec!["cat", "dog", "sun"]);
    }

    #[tokio::test]
    async fn test_short_model_output_is_padded() {
        let generator = ContentGenerator::new(Some(Arc::new(FixedModel("cat, dog"))));
        let response = generator
            .generate(&request(GameMode::AcidRain, 10))
            .await
            .unwrap();
        assert_eq!(response.source, Provenance::AiPartialDictionaryPadded);
        let texts: Vec<String> = response
            .words
            .unwrap()
            .into_iter()
            .map(|w| w.text)
            .collect();
        assert_eq!(texts.len(), 10);
        let distinct: std::collections::HashSet<&String> = texts.iter().collect();
        assert_eq!(distinct.len(), 10);
    }

    #[tokio::test]
    async fn test_garbage_model_output_falls_back() {
        let generator = ContentGenerator::new(Some(Arc::new(FixedModel("!!! ??? 123"))));
        let response = generator
            .generate(&request(GameMode::AcidRain, 4))
            .await
            .unwrap();
        assert_eq!(response.source, Provenance::DictionaryFallbackZeroResult);
        assert_eq!(response.words.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_spelling_bloom_attaches_wrong_spellings() {
        let generator = ContentGenerator::new(None);
        let response = generator
            .generate(&request(GameMode::SpellingBloom, 8))
            .await
            .unwrap();
        for item in response.words.unwrap() {
            let wrong = item.wrong_spelling.expect("missing wrong spelling");
            let mut a: Vec<char> = wrong.chars().collect();
            let mut b: Vec<char> = item.text.chars().collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "not a permutation of {}", item.text);
        }
    }

    #[tokio::test]
    async fn test_word_ids_are_response_scoped() {
        let generator = ContentGenerator::new(None);
        let response = generator
            .generate(&request(GameMode::AcidRain, 6))
            .await
            .unwrap();
        let ids: Vec<String> = response
            .words
            .unwrap()
            .into_iter()
            .map(|w| w.id)
            .collect();
        let distinct: std::collections::HashSet<&String> = ids.iter().collect();
        assert_eq!(distinct.len(), ids.len());
        assert!(ids.iter().all(|id| id.starts_with("word-")));
    }

    #[tokio::test]
    async fn test_story_without_model_fails() {
        let generator = ContentGenerator::new(None);
        let err = generator
            .generate(&request(GameMode::StoryTime, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable));
    }

    #[tokio::test]
    async fn test_story_model_error_propagates() {
        let generator = ContentGenerator::new(Some(Arc::new(FailingModel)));
        let err = generator
            .generate(&request(GameMode::StoryTime, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }

    #[tokio::test]
    async fn test_story_is_sanitized() {
        let generator = ContentGenerator::new(Some(Arc::new(FixedModel(
            "Once: upon a time;; the end.",
        ))));
        let response = generator
            .generate(&request(GameMode::StoryTime, 1))
            .await
            .unwrap();
        assert_eq!(response.source, Provenance::Ai);
        assert_eq!(
            response.story.unwrap(),
            "Once. upon a time. the end."
        );
    }
}
