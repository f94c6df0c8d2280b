//! Report structure combining profiles and comparison results

use crate::extraction::profile::{CandidateProfile, RequirementProfile};
use crate::matching::SkillComparison;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// Report metadata and generation info
    pub metadata: ReportMetadata,

    /// Profile extracted from the resume
    pub candidate: CandidateProfile,

    /// Profile extracted from the job description
    pub requirement: RequirementProfile,

    /// Skill overlap between the two profiles
    pub comparison: SkillComparison,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_source: String,
    pub job_source: String,
    pub model: String,
}

impl MatchReport {
    pub fn new(
        candidate: CandidateProfile,
        requirement: RequirementProfile,
        comparison: SkillComparison,
        resume_source: String,
        job_source: String,
        model: String,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                resume_source,
                job_source,
                model,
            },
            candidate,
            requirement,
            comparison,
        }
    }
}
