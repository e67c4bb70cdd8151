//! Fallback Advisor - wrapper that fails open to a secondary advisor.
//!
//! Wraps a primary advisor (the live one) and a fallback (the mock). Each
//! operation makes exactly one attempt at the primary; any error - transport,
//! non-success status, payload parse - is logged and resolved through the
//! fallback instead. Callers never observe the primary's error, so user-visible
//! behavior degrades to deterministic local answers rather than an error state.
//!
//! # Example
//!
//! ```ignore
//! let advisor = FallbackAdvisor::new(
//!     GeminiAdvisor::new(config)?,
//!     MockAdvisor::new(),
//! );
//! ```

use async_trait::async_trait;

use crate::domain::conversation::{ChatReply, ConversationTurn};
use crate::domain::profile::{ExperienceBand, Profile, Role};
use crate::ports::{
    Advisor, AdvisorError, AdvisorRecommendation, LearningPath, SkillAnalysis,
};

/// Primary/fallback advisor strategy.
pub struct FallbackAdvisor<P: Advisor, F: Advisor> {
    primary: P,
    fallback: F,
}

impl<P: Advisor, F: Advisor> FallbackAdvisor<P, F> {
    /// Creates a new fallback advisor.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    fn warn_fallback(&self, operation: &str, err: &AdvisorError) {
        tracing::warn!(
            primary = self.primary.name(),
            fallback = self.fallback.name(),
            operation,
            error = %err,
            "advisor call failed, falling back"
        );
    }
}

#[async_trait]
impl<P: Advisor, F: Advisor> Advisor for FallbackAdvisor<P, F> {
    async fn analyze_skills(
        &self,
        role: Option<Role>,
        skills: &[String],
        experience: ExperienceBand,
    ) -> Result<SkillAnalysis, AdvisorError> {
        match self.primary.analyze_skills(role, skills, experience).await {
            Ok(analysis) => Ok(analysis),
            Err(err) => {
                self.warn_fallback("analyze_skills", &err);
                self.fallback.analyze_skills(role, skills, experience).await
            }
        }
    }

    async fn generate_recommendations(
        &self,
        role: Option<Role>,
        skills: &[String],
        risk_score: i32,
    ) -> Result<Vec<AdvisorRecommendation>, AdvisorError> {
        match self
            .primary
            .generate_recommendations(role, skills, risk_score)
            .await
        {
            Ok(recommendations) => Ok(recommendations),
            Err(err) => {
                self.warn_fallback("generate_recommendations", &err);
                self.fallback
                    .generate_recommendations(role, skills, risk_score)
                    .await
            }
        }
    }

    async fn chat(
        &self,
        message: &str,
        profile: &Profile,
        history: &[ConversationTurn],
    ) -> Result<ChatReply, AdvisorError> {
        match self.primary.chat(message, profile, history).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                self.warn_fallback("chat", &err);
                self.fallback.chat(message, profile, history).await
            }
        }
    }

    async fn generate_learning_path(
        &self,
        skill_title: &str,
        role: Option<Role>,
    ) -> Result<LearningPath, AdvisorError> {
        match self.primary.generate_learning_path(skill_title, role).await {
            Ok(path) => Ok(path),
            Err(err) => {
                self.warn_fallback("generate_learning_path", &err);
                self.fallback.generate_learning_path(skill_title, role).await
            }
        }
    }

    fn name(&self) -> &'static str {
        self.primary.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::advisor::MockAdvisor;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Primary stub that always fails and counts attempts.
    #[derive(Default)]
    struct FailingAdvisor {
        attempts: AtomicU32,
    }

    impl FailingAdvisor {
        fn attempts(&self) -> u32 {
            self.attempts.load(Ordering::SeqCst)
        }

        fn fail(&self) -> AdvisorError {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            AdvisorError::network("connection refused")
        }
    }

    #[async_trait]
    impl Advisor for FailingAdvisor {
        async fn analyze_skills(
            &self,
            _role: Option<Role>,
            _skills: &[String],
            _experience: ExperienceBand,
        ) -> Result<SkillAnalysis, AdvisorError> {
            Err(self.fail())
        }

        async fn generate_recommendations(
            &self,
            _role: Option<Role>,
            _skills: &[String],
            _risk_score: i32,
        ) -> Result<Vec<AdvisorRecommendation>, AdvisorError> {
            Err(self.fail())
        }

        async fn chat(
            &self,
            _message: &str,
            _profile: &Profile,
            _history: &[ConversationTurn],
        ) -> Result<ChatReply, AdvisorError> {
            Err(self.fail())
        }

        async fn generate_learning_path(
            &self,
            _skill_title: &str,
            _role: Option<Role>,
        ) -> Result<LearningPath, AdvisorError> {
            Err(self.fail())
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn chat_falls_back_to_mock_on_primary_failure() {
        let advisor = FallbackAdvisor::new(FailingAdvisor::default(), MockAdvisor::new());
        let mut profile = Profile::new();
        profile.set_role(Role::Mechanic);

        let reply = advisor.chat("hello", &profile, &[]).await.unwrap();

        assert!(reply.text.contains("I see you're a Mechanic."));
    }

    #[tokio::test]
    async fn primary_is_attempted_exactly_once() {
        let primary = FailingAdvisor::default();
        let advisor = FallbackAdvisor::new(primary, MockAdvisor::new());

        advisor
            .generate_learning_path("Solar Panel Installation", Some(Role::Electrician))
            .await
            .unwrap();

        assert_eq!(advisor.primary.attempts(), 1);
    }

    #[tokio::test]
    async fn all_operations_fail_open() {
        let advisor = FallbackAdvisor::new(FailingAdvisor::default(), MockAdvisor::new());
        let profile = Profile::new();

        assert!(advisor
            .analyze_skills(Some(Role::Technician), &[], ExperienceBand::Mid)
            .await
            .is_ok());
        assert!(advisor
            .generate_recommendations(Some(Role::Technician), &[], 80)
            .await
            .is_ok());
        assert!(advisor.chat("help", &profile, &[]).await.is_ok());
        assert!(advisor
            .generate_learning_path("IoT Integration", None)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn successful_primary_never_touches_the_fallback() {
        let advisor = FallbackAdvisor::new(MockAdvisor::new(), FailingAdvisor::default());
        let profile = Profile::new();

        let reply = advisor.chat("hello", &profile, &[]).await.unwrap();
        assert!(reply.text.starts_with("Hello!"));
        assert_eq!(advisor.fallback.attempts(), 0);
        assert_eq!(advisor.name(), "mock");
    }
}
