//! Typed records produced by structured extraction
//!
//! Both profiles are built once per analysis run and never mutated
//! afterwards. Skill lists are kept exactly as the model emitted them;
//! normalization happens in the matching module.

use serde::{Deserialize, Serialize};

/// Fields extracted from a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Total combined work experience, e.g. "1 year 8 months"
    pub experience: String,
    /// Highest qualification, e.g. "MCA - Data Science (2025)"
    pub education: String,
}

/// Fields extracted from a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    /// Minimum experience required, e.g. "1.5 years"
    pub experience: String,
    /// Qualification required, e.g. "B.Tech or MCA"
    pub education: String,
}
