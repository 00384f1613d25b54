//! Output-shape guarantees for the publish package
//!
//! `enforce` is pure and total: whatever the model produced, the result has
//! lowercase tags (three of them whenever the title can supply the missing
//! ones) and a non-empty summary of at most 25 words ending in `.`, `!` or `?`.

use regex::Regex;
use serde::Serialize;

pub const TAG_COUNT: usize = 3;
pub const MAX_SUMMARY_WORDS: usize = 25;

const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Tags and summary after enforcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enforced {
    pub tags: Vec<String>,
    pub summary: String,
}

/// Normalize a draft into the publishable shape
pub fn enforce(tags: &[String], summary: &str, title: &str) -> Enforced {
    Enforced {
        tags: enforce_tags(tags, title),
        summary: enforce_summary(summary, title),
    }
}

fn enforce_tags(raw: &[String], title: &str) -> Vec<String> {
    let mut tags: Vec<String> = raw
        .iter()
        .take(TAG_COUNT)
        .map(|t| t.trim().to_lowercase())
        .collect();

    if tags.len() < TAG_COUNT {
        // Titles with fewer than three distinct tokens leave the list short
        for token in title_tokens(title) {
            if tags.len() == TAG_COUNT {
                break;
            }
            if !tags.contains(&token) {
                tags.push(token);
            }
        }
    }

    tags
}

fn enforce_summary(raw: &str, title: &str) -> String {
    let mut summary = raw
        .split_whitespace()
        .take(MAX_SUMMARY_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    let last = summary.chars().last();
    match last {
        None => format!("Brief overview of {}.", title),
        Some(last) if TERMINAL_PUNCTUATION.contains(&last) => summary,
        Some(_) => {
            summary.push('.');
            summary
        }
    }
}

/// Lowercased ASCII alphanumeric runs of the title, in order
fn title_tokens(title: &str) -> Vec<String> {
    let Ok(re) = Regex::new(r"[a-z0-9]+") else {
        return Vec::new();
    };

    let lowered = title.to_lowercase();
    re.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
