//! Gemini Advisor - live implementation of the advisor port.
//!
//! Talks to the Google Gemini `generateContent` endpoint. Each operation
//! builds a role/skills-aware prompt plus a system instruction, makes exactly
//! one request (no retries - resilience lives in [`super::FallbackAdvisor`]),
//! strips an optional Markdown code fence from the returned text, and parses
//! the structured payloads defined on the port.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-pro")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let advisor = GeminiAdvisor::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::conversation::{ChatReply, Conversation, ConversationTurn, Speaker};
use crate::domain::profile::{ExperienceBand, Profile, Role};
use crate::ports::{
    Advisor, AdvisorError, AdvisorRecommendation, LearningPath, SkillAnalysis,
};

/// Configuration for the Gemini advisor.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model identifier (e.g. "gemini-pro").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Live advisor backed by the Gemini completion API.
pub struct GeminiAdvisor {
    config: GeminiConfig,
    client: Client,
}

impl GeminiAdvisor {
    /// Creates a new Gemini advisor with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AdvisorError::network(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Makes one completion request. History turns are forwarded as
    /// alternating user/model contents ahead of the prompt.
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
        history: &[ConversationTurn],
    ) -> Result<String, AdvisorError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: match turn.speaker {
                    Speaker::User => "user",
                    Speaker::Assistant => "model",
                },
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            })
            .collect();
        contents.push(Content {
            role: "user",
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        });

        let body = GenerateRequest {
            contents,
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 500,
            },
        };

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key())])
            .json(&body)
            .send()
            .await
            .map_err(|e| AdvisorError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AdvisorError::api(status.as_u16(), message));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::parse(e.to_string()))?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AdvisorError::parse("response contained no candidates"))
    }

    /// Parses a JSON payload out of model text, tolerating a fenced block.
    fn parse_json<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, AdvisorError> {
        serde_json::from_str(strip_code_fences(text))
            .map_err(|e| AdvisorError::parse(e.to_string()))
    }
}

/// Strips one leading/trailing Markdown fence pair, if present.
///
/// Handles both the bare ``` and the ```json forms. Text without fences
/// passes through untouched (modulo surrounding whitespace). Exactly one
/// pair is removed - nested fences inside the payload are preserved.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

fn role_label(role: Option<Role>) -> &'static str {
    role.map(|r| r.as_str()).unwrap_or("professional")
}

fn skill_list(skills: &[String]) -> String {
    if skills.is_empty() {
        "not specified".to_string()
    } else {
        skills.join(", ")
    }
}

/// Pulls up to three question sentences out of free text, for use as
/// follow-up suggestions.
fn extract_question_suggestions(text: &str) -> Vec<String> {
    text.split_inclusive(['.', '!', '?'])
        .filter(|segment| segment.ends_with('?'))
        .map(|segment| segment.trim().to_string())
        .filter(|segment| !segment.is_empty())
        .take(3)
        .collect()
}

#[async_trait]
impl Advisor for GeminiAdvisor {
    async fn analyze_skills(
        &self,
        role: Option<Role>,
        skills: &[String],
        experience: ExperienceBand,
    ) -> Result<SkillAnalysis, AdvisorError> {
        let prompt = format!(
            "Analyze the career profile of a {} with {} skills: {}. Experience \
             level: {} years. Provide insights about automation risk, career \
             opportunities, and skill gaps. Return ONLY valid JSON with insights \
             (array of strings), riskFactors (array of strings), and \
             opportunities (array of strings). Do not include any markdown \
             formatting or code blocks.",
            role_label(role),
            skills.len(),
            skill_list(skills),
            experience
        );
        let system = "You are a career advisor specializing in skill risk \
                      assessment and automation impact. Always respond with \
                      valid JSON only.";

        let text = self.generate(&prompt, system, &[]).await?;
        Self::parse_json(&text)
    }

    async fn generate_recommendations(
        &self,
        role: Option<Role>,
        skills: &[String],
        risk_score: i32,
    ) -> Result<Vec<AdvisorRecommendation>, AdvisorError> {
        let prompt = format!(
            "Generate 3-4 skill recommendations for a {} with risk level {}. \
             Current skills: {}. Focus on future-proof skills that reduce \
             automation risk. Return ONLY a valid JSON array with objects \
             containing title (string), reasoning (string), and urgency \
             (string: \"High\", \"Medium\", or \"Low\"). Do not include any \
             markdown formatting or code blocks.",
            role_label(role),
            risk_score,
            skill_list(skills)
        );
        let system = "You are a career development expert providing skill \
                      recommendations. Always respond with valid JSON only.";

        let text = self.generate(&prompt, system, &[]).await?;
        Self::parse_json(&text)
    }

    async fn chat(
        &self,
        message: &str,
        profile: &Profile,
        history: &[ConversationTurn],
    ) -> Result<ChatReply, AdvisorError> {
        let system = format!(
            "You are a helpful career advisor for SkillGuard, an app that helps \
             workers understand their automation risk. The user is a {} with \
             skills: {}. Provide helpful, encouraging advice. Be conversational \
             and respond directly to what the user is asking.",
            role_label(profile.role()),
            skill_list(profile.skills())
        );

        // Only the trailing window of turns is forwarded as context.
        let start = history.len().saturating_sub(Conversation::HISTORY_WINDOW);
        let text = self.generate(message, &system, &history[start..]).await?;

        let suggestions = extract_question_suggestions(&text);
        Ok(ChatReply::new(text, suggestions))
    }

    async fn generate_learning_path(
        &self,
        skill_title: &str,
        role: Option<Role>,
    ) -> Result<LearningPath, AdvisorError> {
        let prompt = format!(
            "Create a detailed learning path for {} for a {}. Include steps, \
             resources, and timeline. Return ONLY valid JSON with steps (array \
             of strings), resources (array of strings), and timeline (string). \
             Do not include any markdown formatting or code blocks.",
            skill_title,
            role_label(role)
        );
        let system = "You are an educational expert creating learning paths. \
                      Always respond with valid JSON only.";

        let text = self.generate(&prompt, system, &[]).await?;
        Self::parse_json(&text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

// Wire types for the generateContent endpoint.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    system_instruction: SystemInstruction,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}
