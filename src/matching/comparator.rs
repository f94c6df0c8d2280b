//! Skill set comparison

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of comparing a candidate's skills against a requirement's.
///
/// Both lists hold canonical skill forms sorted ascending. The match
/// percentage is the share of requirement skills the candidate covers,
/// rounded to two decimal places for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillComparison {
    pub common_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: f64,
}

/// Compare two canonical skill sets. Pure function of its inputs.
///
/// An empty requirement set yields a zero percentage rather than a
/// division by zero.
pub fn compare(candidate: &BTreeSet<String>, requirement: &BTreeSet<String>) -> SkillComparison {
    let common_skills: Vec<String> = requirement.intersection(candidate).cloned().collect();
    let missing_skills: Vec<String> = requirement.difference(candidate).cloned().collect();

    let match_percentage = if requirement.is_empty() {
        0.0
    } else {
        round_two_places(100.0 * common_skills.len() as f64 / requirement.len() as f64)
    };

    SkillComparison {
        common_skills,
        missing_skills,
        match_percentage,
    }
}

fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
