use std::collections::HashMap;
use anyhow::{anyhow, Result};

/// CLI words split into a month label, single-valued `key:value` metadata,
/// and the repeatable `week:` entries. Weeks keep their own list because a
/// map would silently drop repeats.
#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub month: String,
    pub metadata: HashMap<String, String>,
    pub weeks: Vec<String>,
}

pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut month_parts = Vec::new();
    let mut metadata = HashMap::new();
    let mut weeks = Vec::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if key == "week" || key == "w" {
                weeks.push(value.to_string());
                continue;
            }
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        month_parts.push(arg.as_str());
    }

    ParsedInput {
        month: month_parts.join(" "),
        metadata,
        weeks,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}
