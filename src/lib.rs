pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod random;
pub mod server;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    NicheCatalog, DURATIONS, HOOKS, OPTIMIZATION_TIPS, POSTING_WINDOWS, TITLE_SUFFIXES,
    VISUAL_HINTS,
};
use crate::random::{RandomSource, RngSource};

pub const IDEAS_PER_BATCH: usize = 3;
pub const MAX_HASHTAGS: usize = 7;
pub const TIPS_PER_IDEA: usize = 3;
pub const VIRAL_SCORE_BASE: u32 = 80;
pub const VIRAL_SCORE_SPREAD: u32 = 20;

const BASE_HASHTAGS: [&str; 3] = ["#shorts", "#viral", "#trending"];
const HOOK_MARKER: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub best_time: String,
    pub duration: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRecord {
    pub title: String,
    pub hook: String,
    pub script: String,
    pub hashtags: Vec<String>,
    pub thumbnail: String,
    pub trending: bool,
    pub viral_score: u32,
    pub optimization: Optimization,
}

pub fn synthesize(niche: &str) -> Vec<IdeaRecord> {
    let catalog = NicheCatalog::builtin();
    let mut rng = RngSource::from_entropy();
    synthesize_with(&catalog, niche, &mut rng)
}

pub fn synthesize_with<R: RandomSource + ?Sized>(
    catalog: &NicheCatalog,
    niche: &str,
    rng: &mut R,
) -> Vec<IdeaRecord> {
    let topics = catalog.resolve(niche);

    (0..IDEAS_PER_BATCH)
        .map(|slot| {
            let topic = topics[slot % topics.len()].as_str();
            let hook = HOOKS[rng.pick_index(HOOKS.len()) % HOOKS.len()];
            let viral_score = VIRAL_SCORE_BASE
                + rng
                    .int_inclusive(0, VIRAL_SCORE_SPREAD)
                    .min(VIRAL_SCORE_SPREAD);

            IdeaRecord {
                title: format!(
                    "{} That Will {}",
                    title_case(topic),
                    TITLE_SUFFIXES[slot % TITLE_SUFFIXES.len()]
                ),
                hook: splice_hook(hook, topic),
                script: render_script(niche, topic),
                hashtags: hashtags_for(niche, topic),
                thumbnail: format!(
                    "Bold text: \"{}\" with {}. Use high contrast colors.",
                    topic.to_uppercase(),
                    VISUAL_HINTS[slot % VISUAL_HINTS.len()]
                ),
                trending: slot == 0,
                viral_score,
                optimization: Optimization {
                    best_time: format!(
                        "{} (peak engagement hours)",
                        POSTING_WINDOWS[slot % POSTING_WINDOWS.len()]
                    ),
                    duration: DURATIONS[slot % DURATIONS.len()].to_string(),
                    tips: tips_for_slot(slot),
                },
            }
        })
        .collect()
}

/// Inserts the topic before the first ellipsis. Hooks without one are
/// returned unchanged.
pub fn splice_hook(hook: &str, topic: &str) -> String {
    hook.replacen(HOOK_MARKER, &format!(" {}{}", topic, HOOK_MARKER), 1)
}

pub fn title_case(topic: &str) -> String {
    topic
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn render_script(niche: &str, topic: &str) -> String {
    format!(
        "[First 2 seconds - HOOK]\n\
\"Wait... {topic}? This is insane!\"\n\
\n\
[Seconds 3-20 - VALUE]\n\
Here's what nobody tells you about {topic} in {niche}:\n\
✅ Point 1: Quick tip that delivers instant value\n\
✅ Point 2: Surprising fact or hack\n\
✅ Point 3: The game-changing insight\n\
\n\
[Seconds 21-30 - CTA]\n\
\"Try this and watch what happens!\n\
Follow for more {niche} tips 🔥\"\n\
\n\
[Visual notes: Fast cuts, text overlays, trending audio]"
    )
}

pub fn hashtags_for(niche: &str, topic: &str) -> Vec<String> {
    let compact_topic: String = topic.split_whitespace().collect();
    let mut tags: Vec<String> = BASE_HASHTAGS.iter().map(|tag| tag.to_string()).collect();
    tags.extend([
        format!("#{}", niche),
        format!("#{}", compact_topic),
        format!("#{}tips", niche),
        format!("#{}hacks", niche),
    ]);
    tags.truncate(MAX_HASHTAGS);
    tags
}

/// Positional slice of the tip pool for a slot. Slots past the end of the
/// pool get a short or empty list.
pub fn tips_for_slot(slot: usize) -> Vec<String> {
    let start = (slot * TIPS_PER_IDEA).min(OPTIMIZATION_TIPS.len());
    let end = (start + TIPS_PER_IDEA).min(OPTIMIZATION_TIPS.len());
    OPTIMIZATION_TIPS[start..end]
        .iter()
        .map(|tip| tip.to_string())
        .collect()
}
