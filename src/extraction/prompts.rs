//! Prompt templates and response schemas for structured extraction

use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub resume_extraction: String,
    pub job_extraction: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            resume_extraction: RESUME_EXTRACTION_TEMPLATE.to_string(),
            job_extraction: JOB_EXTRACTION_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_resume_extraction(&self, resume_text: &str) -> String {
        self.resume_extraction.replace("{resume}", resume_text)
    }

    pub fn render_job_extraction(&self, job_text: &str) -> String {
        self.job_extraction.replace("{job}", job_text)
    }
}

const RESUME_EXTRACTION_TEMPLATE: &str = r#"From the following RESUME text, extract and return the below fields in structured format. Make sure to:

- Calculate total combined professional experience by summing up durations across all job roles (not just the latest).
- Return the total experience in a human-readable format like: "1 year 8 months" or "2 years".
- For education, extract only the highest qualification and include passing year if mentioned.

Extract:

- Name: Full candidate name
- Email: Valid professional email ID
- Phone: 10-digit or international format
- Skills: List of technical skills, tools, or technologies mentioned
- Experience: Total combined work experience across all roles (e.g., "1 year 8 months")
- Education: Highest qualification with specialization and passing year if present (e.g., "MCA - Data Science (2025)")

RESUME:
{resume}"#;

const JOB_EXTRACTION_TEMPLATE: &str = r#"Extract the following structured fields from the job description below:
- Skills (as a list of short skill tokens, not a single joined string)
- Experience (minimum years required, e.g., "1.5 years")
- Education (qualification required, e.g., "B.Tech or MCA")

JOB DESCRIPTION:
{job}"#;

/// JSON schema the model response must conform to for resumes.
pub fn candidate_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "Full candidate name" },
            "email": { "type": "string", "description": "Candidate email address" },
            "phone": { "type": "string", "description": "Candidate phone number" },
            "skills": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Technical skills, tools, or technologies mentioned"
            },
            "experience": { "type": "string", "description": "Total combined work experience" },
            "education": { "type": "string", "description": "Highest qualification" }
        },
        "required": ["name", "email", "phone", "skills", "experience", "education"]
    })
}

/// JSON schema the model response must conform to for job descriptions.
pub fn requirement_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "skills": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Skills required for the role"
            },
            "experience": { "type": "string", "description": "Minimum experience required" },
            "education": { "type": "string", "description": "Qualification required" }
        },
        "required": ["skills", "experience", "education"]
    })
}
