//! Mock Advisor - deterministic local implementation of the advisor port.
//!
//! Resolves every operation through fixed rules and canned payloads, so the
//! product works end to end with no credential configured. Also serves as the
//! fallback target behind the live adapter. An optional simulated latency
//! makes demos feel like a real backend; it defaults to zero and plays no
//! part in the decision logic.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::conversation::{responder, ChatReply, ConversationTurn};
use crate::domain::profile::{ExperienceBand, Profile, Role};
use crate::ports::{
    Advisor, AdvisorError, AdvisorRecommendation, LearningPath, SkillAnalysis, Urgency,
};

/// Deterministic advisor used in mock mode and as the live fallback.
#[derive(Debug, Clone, Default)]
pub struct MockAdvisor {
    delay: Duration,
}

impl MockAdvisor {
    /// Creates a mock advisor with no simulated latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a simulated latency applied to every operation.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

fn role_label(role: Option<Role>) -> &'static str {
    role.map(|r| r.as_str()).unwrap_or("professional")
}

fn has_modern_skills(skills: &[String]) -> bool {
    skills.iter().any(|s| {
        let lower = s.to_lowercase();
        lower.contains("smart") || lower.contains("ev") || lower.contains("automation")
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[async_trait]
impl Advisor for MockAdvisor {
    async fn analyze_skills(
        &self,
        role: Option<Role>,
        skills: &[String],
        experience: ExperienceBand,
    ) -> Result<SkillAnalysis, AdvisorError> {
        self.simulate_latency().await;

        let modern = if has_modern_skills(skills) {
            "You have some modern skills that are in high demand. This is great \
             for your career longevity."
        } else {
            "Consider adding more technology-focused skills to future-proof your \
             career."
        };
        let seasoning = if experience == ExperienceBand::Senior {
            "Your extensive experience is valuable, but staying current with new \
             technologies is crucial."
        } else {
            "Your experience level suggests you're still building your \
             foundation. Focus on both traditional and emerging skills."
        };

        Ok(SkillAnalysis {
            insights: vec![
                format!(
                    "Based on your {} role and {} selected skills, I've analyzed \
                     your professional profile.",
                    role_label(role),
                    skills.len()
                ),
                modern.to_string(),
                seasoning.to_string(),
            ],
            risk_factors: strings(&[
                "Automation is increasing in routine tasks",
                "Technology adoption is accelerating in your field",
                "Customer expectations are evolving",
            ]),
            opportunities: strings(&[
                "Upskilling in emerging technologies",
                "Specializing in high-demand areas",
                "Building a diverse skill portfolio",
            ]),
        })
    }

    async fn generate_recommendations(
        &self,
        role: Option<Role>,
        _skills: &[String],
        risk_score: i32,
    ) -> Result<Vec<AdvisorRecommendation>, AdvisorError> {
        self.simulate_latency().await;

        let high_risk = risk_score >= 70;
        let mut recommendations = Vec::new();

        match role {
            Some(Role::Electrician) => {
                if high_risk {
                    recommendations.push(AdvisorRecommendation {
                        title: "Solar Panel Installation".to_string(),
                        reasoning: "Critical skill as renewable energy adoption \
                                    accelerates. High demand, good ROI."
                            .to_string(),
                        urgency: Urgency::High,
                    });
                }
                recommendations.push(AdvisorRecommendation {
                    title: "Smart Home Integration".to_string(),
                    reasoning: "Growing market with increasing homeowner adoption. \
                                Complements your electrical expertise."
                        .to_string(),
                    urgency: if high_risk { Urgency::High } else { Urgency::Medium },
                });
            }
            Some(Role::Mechanic) => {
                recommendations.push(AdvisorRecommendation {
                    title: "EV Maintenance & Repair".to_string(),
                    reasoning: "Electric vehicles are the future. Early adoption of \
                                this skill will be highly valuable."
                        .to_string(),
                    urgency: Urgency::High,
                });
            }
            Some(Role::Technician) => {
                recommendations.push(AdvisorRecommendation {
                    title: "AI-Assisted Diagnostics".to_string(),
                    reasoning: "Understanding AI tools will enhance your \
                                troubleshooting capabilities significantly."
                        .to_string(),
                    urgency: Urgency::High,
                });
            }
            None => {}
        }

        Ok(recommendations)
    }

    async fn chat(
        &self,
        message: &str,
        profile: &Profile,
        history: &[ConversationTurn],
    ) -> Result<ChatReply, AdvisorError> {
        self.simulate_latency().await;
        Ok(responder::respond(
            message,
            profile.role(),
            profile.skills(),
            history,
        ))
    }

    async fn generate_learning_path(
        &self,
        _skill_title: &str,
        _role: Option<Role>,
    ) -> Result<LearningPath, AdvisorError> {
        self.simulate_latency().await;

        Ok(LearningPath {
            steps: strings(&[
                "Research and understand the fundamentals",
                "Take online courses or certifications",
                "Practice with hands-on projects",
                "Join professional communities",
                "Build a portfolio of work",
            ]),
            resources: strings(&[
                "Online courses (Coursera, Udemy)",
                "Industry certifications",
                "Professional forums and communities",
                "Mentorship opportunities",
            ]),
            timeline: "3-6 months for basic proficiency".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
