use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_TOPICS: [&str; 5] = ["trends", "tips", "tutorials", "reviews", "hacks"];

const BUILTIN_NICHES: [(&str, [&str; 5]); 8] = [
    (
        "fitness",
        ["home workouts", "weight loss", "muscle building", "yoga", "HIIT"],
    ),
    (
        "cooking",
        ["quick recipes", "meal prep", "healthy eating", "desserts", "one-pot meals"],
    ),
    (
        "gaming",
        ["gameplay tips", "new releases", "speedruns", "funny moments", "game reviews"],
    ),
    (
        "tech",
        ["AI tools", "productivity hacks", "app reviews", "coding tips", "gadget reviews"],
    ),
    (
        "lifestyle",
        ["morning routines", "productivity", "minimalism", "self-care", "organization"],
    ),
    (
        "business",
        ["side hustles", "passive income", "marketing tips", "entrepreneurship", "investing"],
    ),
    (
        "education",
        ["study tips", "learning hacks", "language learning", "skill development", "career advice"],
    ),
    (
        "entertainment",
        ["movie reviews", "music reactions", "trending challenges", "comedy skits", "celebrity news"],
    ),
];

pub const HOOKS: [&str; 10] = [
    "You won't believe what happened when...",
    "This changed everything...",
    "Nobody talks about this...",
    "I tried this for 30 days and...",
    "The secret that pros don't want you to know...",
    "This hack will blow your mind...",
    "Stop doing this immediately...",
    "I wish I knew this earlier...",
    "This is why you're failing at...",
    "The truth about...",
];

pub const OPTIMIZATION_TIPS: [&str; 10] = [
    "Use text overlays to grab attention in the first 2 seconds",
    "Add trending music from YouTube Shorts audio library",
    "Include a strong call-to-action at the end",
    "Use vertical 9:16 format for maximum visibility",
    "Add captions for accessibility and engagement",
    "Keep the pace fast - change scenes every 2-3 seconds",
    "Use jump cuts to maintain energy",
    "End with a question to drive comments",
    "Cross-post to other platforms for maximum reach",
    "Reply to comments quickly to boost engagement",
];

pub const TITLE_SUFFIXES: [&str; 5] = [
    "Blow Your Mind",
    "Change Your Life",
    "Go Viral",
    "Shock You",
    "Make You Rich",
];

pub const VISUAL_HINTS: [&str; 5] = [
    "shocked face",
    "before/after split",
    "eye-catching colors",
    "surprising visual",
    "curiosity gap",
];

pub const POSTING_WINDOWS: [&str; 3] = ["6-9 AM", "12-2 PM", "5-10 PM"];

pub const DURATIONS: [&str; 3] = ["15-30 seconds", "30-45 seconds", "45-60 seconds"];

#[derive(Debug, Clone)]
pub struct NicheCatalog {
    niches: HashMap<String, Vec<String>>,
    fallback: Vec<String>,
}

impl Default for NicheCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NicheCatalog {
    pub fn builtin() -> Self {
        let niches = BUILTIN_NICHES
            .iter()
            .map(|(niche, topics)| {
                (
                    niche.to_string(),
                    topics.iter().map(|topic| topic.to_string()).collect(),
                )
            })
            .collect();

        Self {
            niches,
            fallback: DEFAULT_TOPICS.iter().map(|topic| topic.to_string()).collect(),
        }
    }

    /// Builtin catalog with configured niches layered on top. A configured
    /// niche replaces a builtin one with the same lowercase key; empty topic
    /// lists are ignored so every resolved list stays non-empty.
    pub fn with_extra(extra: &BTreeMap<String, Vec<String>>) -> Self {
        let mut catalog = Self::builtin();
        for (niche, topics) in extra {
            let key = normalize_niche(niche);
            if key.is_empty() || topics.is_empty() {
                continue;
            }
            catalog.niches.insert(key, topics.clone());
        }
        catalog
    }

    pub fn resolve(&self, niche: &str) -> &[String] {
        self.niches
            .get(&normalize_niche(niche))
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback)
    }

    pub fn contains(&self, niche: &str) -> bool {
        self.niches.contains_key(&normalize_niche(niche))
    }

    pub fn niches(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.niches.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

pub fn normalize_niche(niche: &str) -> String {
    niche.to_lowercase()
}
