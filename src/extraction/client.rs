//! Hosted model client for structured profile extraction

use crate::config::ExtractionConfig;
use crate::error::{Result, ResumeMatcherError};
use crate::extraction::profile::{CandidateProfile, RequirementProfile};
use crate::extraction::prompts::{candidate_schema, requirement_schema, PromptTemplates};
use log::{debug, info};
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

/// Narrow seam over structured extraction so the matching pipeline can
/// be exercised without a live network dependency.
pub trait ProfileExtractor {
    fn extract_candidate(
        &self,
        resume_text: &str,
    ) -> impl std::future::Future<Output = Result<CandidateProfile>> + Send;

    fn extract_requirement(
        &self,
        job_text: &str,
    ) -> impl std::future::Future<Output = Result<RequirementProfile>> + Send;
}

/// Client for the Gemini `generateContent` REST API with JSON-schema
/// constrained responses.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
    templates: PromptTemplates,
}

impl GeminiClient {
    /// The API key is resolved here, at call-site construction, not at
    /// program startup; a missing key surfaces as an extraction failure.
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let api_key = env::var(&config.api_key_env).map_err(|_| {
            ResumeMatcherError::Extraction(format!(
                "{} environment variable not set",
                config.api_key_env
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            templates: PromptTemplates::default(),
        })
    }

    async fn generate(&self, prompt: &str, schema: Value) -> Result<Value> {
        debug!("Extraction prompt length: {} characters", prompt.len());

        let request_body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {
                "temperature": self.temperature,
                "responseMimeType": "application/json",
                "responseJsonSchema": schema,
            }
        });

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let response = self.client.post(&url).json(&request_body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ResumeMatcherError::Extraction(format!(
                "model API returned {}: {}",
                status, error_text
            )));
        }

        let body: Value = response.json().await?;
        let content = body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                ResumeMatcherError::Extraction("malformed model response".to_string())
            })?;

        parse_json_payload(content)
    }
}

/// Slice the response text down to its outermost JSON object before
/// parsing; some models wrap the payload in prose or code fences.
fn parse_json_payload(content: &str) -> Result<Value> {
    let trimmed = content.trim();
    let start = trimmed.find('{').ok_or_else(|| {
        ResumeMatcherError::Extraction("no JSON object in model response".to_string())
    })?;
    let end = trimmed.rfind('}').ok_or_else(|| {
        ResumeMatcherError::Extraction("malformed JSON in model response".to_string())
    })?;

    // A closing brace before the first opening brace is prose, not JSON
    if end < start {
        return Err(ResumeMatcherError::Extraction(
            "malformed JSON in model response".to_string(),
        ));
    }

    let parsed: Value = serde_json::from_str(&trimmed[start..=end])?;
    Ok(parsed)
}

impl ProfileExtractor for GeminiClient {
    async fn extract_candidate(&self, resume_text: &str) -> Result<CandidateProfile> {
        info!("Extracting candidate profile via {}", self.model);

        let prompt = self.templates.render_resume_extraction(resume_text);
        let value = self.generate(&prompt, candidate_schema()).await?;
        let profile: CandidateProfile = serde_json::from_value(value)?;
        Ok(profile)
    }

    async fn extract_requirement(&self, job_text: &str) -> Result<RequirementProfile> {
        info!("Extracting requirement profile via {}", self.model);

        let prompt = self.templates.render_job_extraction(job_text);
        let value = self.generate(&prompt, requirement_schema()).await?;
        let profile: RequirementProfile = serde_json::from_value(value)?;
        Ok(profile)
    }
}
