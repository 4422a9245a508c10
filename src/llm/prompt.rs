//! Prompt construction and parsing of generated name lists

use regex::Regex;
use std::sync::OnceLock;

/// Product the names are generated for
pub const PRODUCT_CONTEXT: &str = "
AI-powered personal fitness training PWA called \"Habits\" with features:
- Guided workout timer with audio countdown and exercise illustrations
- AI personal trainer chat with voice input/output
- Personalized 7-day workout plans based on equipment and goals
- Streak tracking and gamification (fire emoji, confetti celebrations)
- Post-workout difficulty feedback and auto-adjustments
- Mobile-first installable app

Target users: People wanting daily guided home workouts with AI coaching.
Themes: fitness, habits, AI coach, daily routines, personal training, workout guide, fit life
";

/// Shortest name kept after cleaning
pub const MIN_NAME_LEN: usize = 3;

fn com_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.com$").expect("static pattern"))
}

fn leading_bullets() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\d\.\-\*\s]+").expect("static pattern"))
}

fn non_letters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z]").expect("static pattern"))
}

/// Build the generation prompt.
///
/// Only the last `window` entries of `history` are listed as already tested.
pub fn build_prompt(history: &[String], count: usize, window: usize) -> String {
    let exclude_list = if history.is_empty() {
        "none yet".to_string()
    } else {
        history[history.len().saturating_sub(window)..].join(", ")
    };

    format!(
        "Generate exactly {} creative .com domain name ideas for this app:

{}

Requirements:
- Only .com domains
- Short, memorable, brandable (ideally 6-12 chars)
- No hyphens or numbers
- Mix of: compound words, portmanteaus, invented words, action words
- Already tested (DO NOT suggest these): {}

Output ONLY the domain names, one per line, without .com suffix.
Example format:
fithabit
dailyburn
coachly",
        count, PRODUCT_CONTEXT, exclude_list
    )
}

/// Reduce one raw output line to a candidate name.
///
/// Returns `None` when fewer than [`MIN_NAME_LEN`] letters remain.
pub fn clean_candidate(line: &str) -> Option<String> {
    let name = line.trim().to_lowercase();
    let name = com_suffix().replace(&name, "");
    let name = leading_bullets().replace(&name, "");
    let name = non_letters().replace_all(&name, "");

    if name.len() >= MIN_NAME_LEN {
        Some(name.into_owned())
    } else {
        None
    }
}

/// Parse generator output into at most `limit` new names.
///
/// Names already present in `history` are dropped.
pub fn parse_candidates(output: &str, history: &[String], limit: usize) -> Vec<String> {
    output
        .trim()
        .lines()
        .filter_map(clean_candidate)
        .filter(|name| !history.contains(name))
        .take(limit)
        .collect()
}
