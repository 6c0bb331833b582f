//! Story prompting and punctuation sanitization.

pub const STORY_TOPICS: &[&str] = &[
    "a friendly dragon",
    "a space adventure",
    "a magical forest",
    "a day at the beach",
    "a funny robot",
    "a brave superhero",
    "a lost puppy",
    "a picnic in the park",
    "underwater exploration",
    "a flying car",
    "a delicious pizza party",
    "a cute kitten",
    "a visiting alien",
    "a hidden treasure",
    "a magic school bus",
    "a dinosaur friend",
    "jumping on the moon",
    "a secret garden",
    "a big storm",
    "making a new friend",
    "a race car",
    "a camping trip",
    "growing a giant flower",
    "baking cookies",
];

pub const STORY_SYSTEM_PROMPT: &str = "You are a children's storyteller. Write \
     age-appropriate, fun, and educational stories. ALWAYS use proper punctuation ending each \
     sentence with a period. Do NOT use colons (:), semi-colons (;), or complex lists. Keep \
     sentences simple.";

/// Level-specific user prompt. Unrecognized levels use the level-1 template.
pub fn story_prompt(level: &str, topic: &str) -> String {
    match level {
        "2" => format!(
            "Write a short 3-4 sentence story for young children (ages 5-7) about \
             \"{topic}\". Use simple words. STRICTLY separate sentences with periods."
        ),
        "3" => format!(
            "Write a 4-5 sentence story for children (ages 6-8) about \"{topic}\". \
             STRICTLY separate sentences with periods. Keep the story short and fun."
        ),
        _ => format!(
            "Write a very short 2-3 sentence story for young children (ages 4-6) about \
             \"{topic}\". Use only simple 3-letter or 4-letter words. STRICTLY separate \
             sentences with periods. Example: \"The cat sat. The dog run.\""
        ),
    }
}

/// Strip punctuation young readers stumble over: every colon and semicolon
/// becomes a period, runs of consecutive periods collapse to one, and
/// surrounding whitespace is trimmed.
pub fn sanitize_story(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut previous_was_period = false;
    for c in raw.chars() {
        let c = if c == ':' || c == ';' { '.' } else { c };
        if c == '.' {
            if previous_was_period {
                continue;
            }
            previous_was_period = true;
        } else {
            previous_was_period = false;
        }
        out.push(c);
    }
    out.trim().to_string()
}
