//! Wizard session - the use-case surface behind the questionnaire screens.
//!
//! One [`WizardSession`] per user session. The wizard screens are thin UI
//! glue: role selection writes the role, the skill screen writes skills and
//! experience, the analyzing transition reads the risk summary, the results
//! screen reads recommendations, and the chat widget calls [`send_chat`] at
//! any time. All state lives in this struct and is mutated only by these
//! handlers - there is exactly one logical thread of control per session.
//!
//! [`send_chat`]: WizardSession::send_chat

use std::sync::Arc;

use crate::domain::conversation::{Conversation, ConversationTurn};
use crate::domain::profile::{ExperienceBand, Profile, Role};
use crate::domain::recommendation::{self, Recommendation};
use crate::domain::risk::RiskLevel;
use crate::ports::{Advisor, AdvisorError, LearningPath, SkillAnalysis};

/// Risk view for the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskSummary {
    pub score: i32,
    pub level: RiskLevel,
}

impl RiskSummary {
    fn for_profile(profile: &Profile) -> Self {
        let score = profile.risk_score();
        Self {
            score,
            level: RiskLevel::for_score(score),
        }
    }
}

/// State and operations for one wizard session.
pub struct WizardSession {
    profile: Profile,
    conversation: Conversation,
    advisor: Arc<dyn Advisor>,
    /// Guards against a reentrant send while a chat round-trip is pending.
    chat_pending: bool,
}

impl WizardSession {
    /// Creates a session with an empty profile and the advisor's welcome turn.
    pub fn new(advisor: Arc<dyn Advisor>) -> Self {
        Self {
            profile: Profile::new(),
            conversation: Conversation::with_welcome(),
            advisor,
            chat_pending: false,
        }
    }

    /// The current profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The chat history, oldest first.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Role screen handler.
    pub fn select_role(&mut self, role: Role) {
        tracing::debug!(role = %role, "role selected");
        self.profile.set_role(role);
    }

    /// Skill screen handler: toggles one skill.
    pub fn toggle_skill(&mut self, skill: &str) {
        self.profile.toggle_skill(skill);
    }

    /// Skill screen handler: sets the experience band.
    pub fn set_experience(&mut self, experience: ExperienceBand) {
        self.profile.set_experience(experience);
    }

    /// Risk summary for the results screen. Always consistent with the
    /// current profile - the score is recomputed on every mutation.
    pub fn risk_summary(&self) -> RiskSummary {
        RiskSummary::for_profile(&self.profile)
    }

    /// Catalog recommendations for the results screen.
    pub fn recommendations(&self) -> Vec<&'static Recommendation> {
        recommendation::recommend(
            self.profile.role(),
            self.profile.skills(),
            self.profile.risk_score(),
        )
    }

    /// AI insights for the analyzing screen.
    pub async fn analyze(&self) -> Result<SkillAnalysis, AdvisorError> {
        self.advisor
            .analyze_skills(
                self.profile.role(),
                self.profile.skills(),
                self.profile.experience(),
            )
            .await
    }

    /// Learning path for one recommendation title.
    pub async fn learning_path(&self, skill_title: &str) -> Result<LearningPath, AdvisorError> {
        self.advisor
            .generate_learning_path(skill_title, self.profile.role())
            .await
    }

    /// Chat widget handler.
    ///
    /// Empty messages and sends arriving while a prior send is pending are
    /// ignored (no queueing, no cancellation). Otherwise appends the user
    /// turn, asks the advisor, and appends the assistant turn. An advisor
    /// error - only reachable when no fallback is configured - produces an
    /// apology turn rather than surfacing the error.
    pub async fn send_chat(&mut self, message: &str) -> Option<&ConversationTurn> {
        let message = message.trim();
        if message.is_empty() || self.chat_pending {
            return None;
        }
        self.chat_pending = true;

        // The advisor sees the history as it stood before this send.
        let history: Vec<ConversationTurn> = self.conversation.turns().to_vec();
        self.conversation.push(ConversationTurn::user(message));

        let turn = match self.advisor.chat(message, &self.profile, &history).await {
            Ok(reply) => reply.into_turn(),
            Err(err) => {
                tracing::error!(error = %err, "chat failed with no fallback");
                ConversationTurn::assistant(
                    "I'm sorry, I encountered an error. Please try again.",
                    Vec::new(),
                )
            }
        };
        self.conversation.push(turn);
        self.chat_pending = false;

        self.conversation.turns().last()
    }

    /// Whether a chat round-trip is currently pending.
    pub fn is_chat_pending(&self) -> bool {
        self.chat_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::advisor::MockAdvisor;
    use crate::domain::conversation::Speaker;
    use crate::domain::recommendation::Priority;

    fn session() -> WizardSession {
        WizardSession::new(Arc::new(MockAdvisor::new()))
    }

    #[test]
    fn wizard_flow_keeps_risk_summary_current() {
        let mut session = session();
        assert_eq!(session.risk_summary().score, 0);

        session.select_role(Role::Mechanic);
        session.toggle_skill("Engine Repair");
        session.toggle_skill("Diagnostic Tools");

        let summary = session.risk_summary();
        assert_eq!(summary.score, 60);
        assert_eq!(summary.level, RiskLevel::Medium);
    }

    #[test]
    fn recommendations_reflect_profile() {
        let mut session = session();
        session.select_role(Role::Electrician);
        session.toggle_skill("Smart Home Systems");

        let recs = session.recommendations();
        assert!(recs.len() <= 4);
        assert!(recs.iter().all(|r| r.title != "Smart Home Systems"));
    }

    #[test]
    fn high_risk_reorders_recommendations() {
        let mut session = session();
        session.select_role(Role::Mechanic);
        // Engine Repair (+15) and Transmission Work (+12) push 55 over 70.
        session.toggle_skill("Engine Repair");
        session.toggle_skill("Transmission Work");

        assert!(session.risk_summary().score >= 70);
        let recs = session.recommendations();
        assert_eq!(recs[0].priority, Priority::High);
    }

    #[tokio::test]
    async fn send_chat_appends_both_turns() {
        let mut session = session();
        session.select_role(Role::Technician);

        let before = session.conversation().turns().len();
        let turn = session.send_chat("hello").await.unwrap();

        assert_eq!(turn.speaker, Speaker::Assistant);
        assert!(turn.text.contains("I see you're a Technician."));
        assert_eq!(session.conversation().turns().len(), before + 2);
    }

    #[tokio::test]
    async fn empty_and_whitespace_messages_are_ignored() {
        let mut session = session();
        let before = session.conversation().turns().len();

        assert!(session.send_chat("").await.is_none());
        assert!(session.send_chat("   ").await.is_none());
        assert_eq!(session.conversation().turns().len(), before);
    }

    #[tokio::test]
    async fn analyze_and_learning_path_pass_through_the_advisor() {
        let mut session = session();
        session.select_role(Role::Electrician);
        session.toggle_skill("Wiring");

        let analysis = session.analyze().await.unwrap();
        assert!(analysis.insights[0].contains("Electrician"));

        let path = session.learning_path("Solar Panel Installation").await.unwrap();
        assert!(!path.steps.is_empty());
    }
}
