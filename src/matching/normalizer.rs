//! Canonical skill normalization
//!
//! Skill labels coming back from extraction are free text: mixed case,
//! stray whitespace, sometimes wrapped in quotes. Comparison happens on
//! the canonical form: lowercased, one layer of surrounding quotes
//! removed, trimmed. Duplicates collapse under set semantics.
//!
//! This is literal normalization only. "JS" and "JavaScript" stay
//! distinct, as do "Node.js" and "NodeJS".

use std::collections::BTreeSet;

/// Canonicalize a single skill label. Quote stripping happens before
/// the trim, so whitespace shields quotes from removal: `  "Go"  `
/// canonicalizes to `"go"`, not `go`.
pub fn normalize_skill(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut skill = lowered.as_str();
    skill = strip_quote_layer(skill, '"');
    skill = strip_quote_layer(skill, '\'');
    skill.trim().to_string()
}

/// Canonicalize a skill list into a set. Order and multiplicity are
/// discarded; iteration over the result is ascending.
pub fn normalize_skills(skills: &[String]) -> BTreeSet<String> {
    skills.iter().map(|s| normalize_skill(s)).collect()
}

fn strip_quote_layer(s: &str, quote: char) -> &str {
    let s = s.strip_prefix(quote).unwrap_or(s);
    s.strip_suffix(quote).unwrap_or(s)
}
