//! Static difficulty-tiered word pools.
//!
//! These back every dictionary fallback path. Tiers follow the prompt
//! length bands: 3-letter, 4-5 letter, 6-8 letter, and 9+ letter words,
//! all kid-friendly, lowercase, and alphabetic.

use crate::types::Difficulty;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

pub const EASY: &[&str] = &[
    "cat", "dog", "sun", "run", "fun", "hat", "bat", "mat", "can", "pan", "cup", "bed", "box",
    "bug", "cow", "egg", "fox", "hen", "jam", "kid", "log", "map", "net", "owl", "pen", "pig",
    "rat", "top", "toy", "van", "web", "zip", "ant", "arm", "bee", "bus", "car", "day",
];

pub const MEDIUM: &[&str] = &[
    "fish", "bird", "jump", "play", "blue", "tree", "ball", "kite", "star", "moon", "cake",
    "milk", "book", "door", "park", "duck", "frog", "bear", "lion", "boat", "tiger", "zebra",
    "snake", "horse", "apple", "grape", "lemon", "melon", "berry", "peach", "mango", "pizza",
    "happy", "smile", "laugh", "cloud", "train", "house", "mouse", "plant",
];

pub const HARD: &[&str] = &[
    "little", "friend", "school", "sister", "mother", "father", "animal", "banana", "pencil",
    "garden", "window", "yellow", "purple", "orange", "monkey", "rabbit", "turtle", "dragon",
    "castle", "planet", "rocket", "flower", "forest", "bubble", "cookie", "sunset", "brother",
    "rainbow", "dolphin", "picture", "morning", "kitchen", "penguin", "balloon", "dinosaur",
    "elephant", "sandwich", "treasure", "mountain", "birthday",
];

pub const EXPERT: &[&str] = &[
    "adventure", "education", "wonderful", "beautiful", "butterfly", "chocolate", "crocodile",
    "spaceship", "vegetable", "xylophone", "pineapple", "telescope", "waterfall", "raspberry",
    "technology", "helicopter", "playground", "strawberry", "watermelon", "friendship",
    "basketball", "trampoline", "lighthouse", "skateboard", "underwater", "wonderland",
    "celebration", "imagination", "caterpillar", "grandmother",
];

/// Fallback pool for a difficulty tier. Neighboring tiers are blended so a
/// padded list does not read as uniformly easier than the model's output.
/// Falls back to the easy tier if the computed pool ever comes up empty.
pub fn pool_for(difficulty: Difficulty) -> Vec<&'static str> {
    let pool: Vec<&'static str> = match difficulty {
        Difficulty::Easy => EASY.to_vec(),
        Difficulty::Medium => EASY.iter().chain(MEDIUM.iter()).copied().collect(),
        Difficulty::Hard => MEDIUM.iter().chain(HARD.iter()).copied().collect(),
        Difficulty::Expert => HARD.iter().chain(EXPERT.iter()).copied().collect(),
    };
    if pool.is_empty() {
        EASY.to_vec()
    } else {
        pool
    }
}

/// Draw up to `count` distinct words from the tier pool, uniformly at
/// random (Fisher-Yates shuffle, then a prefix).
pub fn sample<R: Rng>(difficulty: Difficulty, count: usize, rng: &mut R) -> Vec<String> {
    let mut pool = pool_for(difficulty);
    pool.shuffle(rng);
    pool.into_iter().take(count).map(String::from).collect()
}

/// Pad `words` up to `target` entries from the tier pool, skipping anything
/// already present. Stops early if the pool runs dry.
pub fn pad_from_pool<R: Rng>(
    words: &mut Vec<String>,
    difficulty: Difficulty,
    target: usize,
    rng: &mut R,
) {
    if words.len() >= target {
        return;
    }
    let seen: HashSet<&str> = words.iter().map(String::as_str).collect();
    let mut pool: Vec<&'static str> = pool_for(difficulty)
        .into_iter()
        .filter(|w| !seen.contains(w))
        .collect();
    pool.shuffle(rng);
    let needed = target - words.len();
    words.extend(pool.into_iter().take(needed).map(String::from));
}
