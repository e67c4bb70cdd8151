//! Advisor Port - interface to the AI career advisor.
//!
//! Abstracts the four AI-labelled operations of the product: skill analysis,
//! recommendation generation, chat, and learning-path generation. One
//! implementation calls a remote completion service; another resolves
//! everything through deterministic local rules. The application selects a
//! strategy once at startup and never branches on mock-vs-live afterwards.
//!
//! # Payload contracts
//!
//! The structured payload types in this module double as the wire contract
//! with the remote service: the live adapter asks the model for JSON matching
//! exactly these shapes (camelCase field names).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::conversation::{ChatReply, ConversationTurn};
use crate::domain::profile::{ExperienceBand, Profile, Role};

/// Port for the AI career advisor.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Analyzes the profile and returns narrative insights for the analysis
    /// screen.
    async fn analyze_skills(
        &self,
        role: Option<Role>,
        skills: &[String],
        experience: ExperienceBand,
    ) -> Result<SkillAnalysis, AdvisorError>;

    /// Generates free-form skill recommendations (distinct from the static
    /// catalog engine, which never goes through this port).
    async fn generate_recommendations(
        &self,
        role: Option<Role>,
        skills: &[String],
        risk_score: i32,
    ) -> Result<Vec<AdvisorRecommendation>, AdvisorError>;

    /// Answers a chat message with the profile and recent history as context.
    async fn chat(
        &self,
        message: &str,
        profile: &Profile,
        history: &[ConversationTurn],
    ) -> Result<ChatReply, AdvisorError>;

    /// Produces a learning path for one recommended skill.
    async fn generate_learning_path(
        &self,
        skill_title: &str,
        role: Option<Role>,
    ) -> Result<LearningPath, AdvisorError>;

    /// Short identifier for logging ("mock", "gemini", ...).
    fn name(&self) -> &'static str;
}

/// Narrative analysis of a worker's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysis {
    pub insights: Vec<String>,
    pub risk_factors: Vec<String>,
    pub opportunities: Vec<String>,
}

/// One free-form recommendation from the advisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorRecommendation {
    pub title: String,
    pub reasoning: String,
    pub urgency: Urgency,
}

/// Urgency of acting on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

/// Steps, resources, and timeline for learning one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    pub steps: Vec<String>,
    pub resources: Vec<String>,
    pub timeline: String,
}

/// Advisor errors.
///
/// With a fallback configured these never reach the caller - any live-path
/// failure resolves to the mock result instead.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// Network failure reaching the completion service.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success response from the completion service.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error details.
        message: String,
    },

    /// Response arrived but did not match the expected payload shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// No live credential configured for this operation.
    #[error("advisor not configured")]
    NotConfigured,
}

impl AdvisorError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
