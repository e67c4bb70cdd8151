//! Rule-based conversational responder (mock mode).
//!
//! Classifies a chat message into a [`Topic`] by testing keyword sets in a
//! fixed priority order - first match wins, no fallthrough accumulation -
//! then renders the matching template with the profile context. The order is
//! load-bearing: a message containing both "risk" and "learn" hits the risk
//! branch because risk is tested first. Total and deterministic; every
//! message reaches a terminal branch.

use crate::domain::profile::Role;

use super::{ChatReply, ConversationTurn};

const RISK_KEYWORDS: &[&str] = &["risk", "automation", "automated"];
const LEARNING_KEYWORDS: &[&str] = &["learn", "study", "training", "course"];
const RECOMMEND_KEYWORDS: &[&str] = &["recommend", "suggest", "advice", "should i"];
const CAREER_KEYWORDS: &[&str] = &["career", "job", "future", "outlook"];
const SALARY_KEYWORDS: &[&str] = &["salary", "pay", "income", "earn"];
const DURATION_KEYWORDS: &[&str] = &["time", "long", "duration", "months", "years"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey"];
const HELP_KEYWORDS: &[&str] = &["help", "what can"];
const QUESTION_OPENERS: &[&str] = &[
    "what", "how", "why", "when", "where", "can", "should", "will",
];

/// Classified intent of a chat message. Variants are listed in match
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Automation risk explanation.
    Risk,
    /// Learning-path / recommendation request.
    Learning { mentions_duration: bool },
    /// Skill summary ("skill" without any learning keyword).
    Skills,
    /// Career outlook, optionally with a salary clause.
    Career { mentions_salary: bool },
    /// Duration question with no other topic matched.
    Timeline,
    Greeting,
    /// Capability summary.
    Help,
    /// Unmatched but question-shaped.
    Clarification,
    /// Terminal branch: acknowledge and echo.
    Acknowledgment,
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| message.contains(kw))
}

fn looks_like_question(message: &str) -> bool {
    message.contains('?') || QUESTION_OPENERS.iter().any(|w| message.starts_with(w))
}

/// Classifies a message. Expects the message already lowercased and trimmed.
pub fn classify(message: &str) -> Topic {
    if contains_any(message, RISK_KEYWORDS) {
        Topic::Risk
    } else if contains_any(message, LEARNING_KEYWORDS) || contains_any(message, RECOMMEND_KEYWORDS)
    {
        Topic::Learning {
            mentions_duration: contains_any(message, DURATION_KEYWORDS),
        }
    } else if message.contains("skill") {
        Topic::Skills
    } else if contains_any(message, CAREER_KEYWORDS) || contains_any(message, SALARY_KEYWORDS) {
        Topic::Career {
            mentions_salary: contains_any(message, SALARY_KEYWORDS),
        }
    } else if contains_any(message, DURATION_KEYWORDS) {
        Topic::Timeline
    } else if contains_any(message, GREETING_KEYWORDS) {
        Topic::Greeting
    } else if contains_any(message, HELP_KEYWORDS) {
        Topic::Help
    } else if looks_like_question(message) {
        Topic::Clarification
    } else {
        Topic::Acknowledgment
    }
}

/// Produces a deterministic reply for a chat message.
///
/// Pure function of the message and profile context. The history parameter is
/// part of the responder contract but the rules do not branch on it.
pub fn respond(
    message: &str,
    role: Option<Role>,
    skills: &[String],
    _history: &[ConversationTurn],
) -> ChatReply {
    let normalized = message.trim().to_lowercase();
    render(classify(&normalized), message, role, skills)
}

fn render(topic: Topic, raw_message: &str, role: Option<Role>, skills: &[String]) -> ChatReply {
    match topic {
        Topic::Risk => risk_reply(role, skills),
        Topic::Learning { mentions_duration } => learning_reply(role, mentions_duration),
        Topic::Skills => skills_reply(skills),
        Topic::Career { mentions_salary } => career_reply(role, mentions_salary),
        Topic::Timeline => timeline_reply(),
        Topic::Greeting => greeting_reply(role),
        Topic::Help => help_reply(),
        Topic::Clarification => clarification_reply(role),
        Topic::Acknowledgment => acknowledgment_reply(raw_message, role),
    }
}

fn suggestions(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn risk_reply(role: Option<Role>, skills: &[String]) -> ChatReply {
    let mut text = match role {
        Some(role) => {
            let skill_clause = if skills.is_empty() {
                String::new()
            } else {
                format!("With your skills in {}, ", skills.join(", "))
            };
            format!(
                "As a {role}, automation risk depends on your specific skills. \
                 {skill_clause}you're in a field where some tasks are being \
                 automated, but there's still strong demand for skilled \
                 professionals who can work with new technologies."
            )
        }
        None => "Automation risk varies significantly by role and skills. Skills \
                 involving creativity, problem-solving, and human interaction are \
                 less likely to be automated. Focus on learning skills that \
                 require human judgment and adaptability."
            .to_string(),
    };
    text.push_str(" Would you like to know more about specific skills that reduce automation risk?");

    ChatReply::new(
        text,
        suggestions(&[
            "What skills are safest?",
            "How can I reduce my risk?",
            "What should I learn next?",
        ]),
    )
}

fn learning_reply(role: Option<Role>, mentions_duration: bool) -> ChatReply {
    let mut text = match role {
        Some(Role::Electrician) => {
            "For electricians, I'd suggest learning smart home systems, solar \
             panel installation, or EV charging station setup. These skills \
             leverage your electrical knowledge while adding modern, in-demand \
             capabilities."
        }
        Some(Role::Mechanic) => {
            "For mechanics, EV maintenance and repair, hybrid vehicle systems, \
             and advanced diagnostic tools are excellent choices. These skills \
             are in high demand as the automotive industry evolves."
        }
        Some(Role::Technician) => {
            "For technicians, consider AI-assisted diagnostics, IoT integration, \
             or industrial automation. These skills will keep you at the \
             forefront of technology."
        }
        None => {
            "I recommend focusing on skills that combine your existing expertise \
             with emerging technologies."
        }
    }
    .to_string();

    if mentions_duration {
        text.push_str(" Most of these skills can be learned in 3-6 months with dedicated study.");
    }

    ChatReply::new(
        text,
        suggestions(&[
            "Show me learning paths",
            "What's the best way to learn?",
            "How long will it take?",
        ]),
    )
}

fn skills_reply(skills: &[String]) -> ChatReply {
    let text = if skills.is_empty() {
        "Skills are the foundation of your career. Focus on building a diverse \
         skill set that combines traditional expertise with emerging technologies."
            .to_string()
    } else {
        format!(
            "Your current skills include {}. These are a good foundation. To \
             stay competitive, consider adding complementary skills that are in \
             high demand.",
            skills.join(", ")
        )
    };

    ChatReply::new(
        text,
        suggestions(&[
            "What skills should I add?",
            "Which skills are in demand?",
            "How do I improve my skills?",
        ]),
    )
}

fn career_reply(role: Option<Role>, mentions_salary: bool) -> ChatReply {
    let text = match role {
        Some(role) => {
            let tail = if mentions_salary {
                "Salaries vary by location and experience, but skilled \
                 professionals with modern skills typically earn more."
            } else {
                "The key is continuous learning and adaptation."
            };
            format!(
                "As a {role}, the career outlook is generally positive, \
                 especially if you stay current with new technologies. {tail}"
            )
        }
        None => "Career success depends on staying relevant. Focus on skills that \
                 are in demand and less likely to be automated."
            .to_string(),
    };

    ChatReply::new(
        text,
        suggestions(&[
            "What industries are growing?",
            "How do I stay relevant?",
            "What's the job market like?",
        ]),
    )
}

fn timeline_reply() -> ChatReply {
    ChatReply::new(
        "Learning timelines vary by skill complexity and your background. Basic \
         skills might take 2-3 months, while more advanced skills could take \
         6-12 months. The key is consistent practice and hands-on experience.",
        suggestions(&[
            "What's the fastest way to learn?",
            "How do I stay motivated?",
            "What resources should I use?",
        ]),
    )
}

fn greeting_reply(role: Option<Role>) -> ChatReply {
    let text = match role {
        Some(role) => format!(
            "Hello! I'm here to help you with your career development. I see \
             you're a {role}. What would you like to know about your skills, \
             career, or learning opportunities?"
        ),
        None => "Hello! I'm here to help you with your career development. What \
                 would you like to know about your skills, career, or learning \
                 opportunities?"
            .to_string(),
    };

    ChatReply::new(
        text,
        suggestions(&[
            "Tell me about my risk level",
            "What should I learn?",
            "How does automation affect me?",
        ]),
    )
}

fn help_reply() -> ChatReply {
    ChatReply::new(
        "I can help you with: understanding automation risk, finding learning \
         paths, career advice, skill recommendations, and answering questions \
         about your profession. What would you like to explore?",
        suggestions(&[
            "What skills should I learn?",
            "How does automation affect me?",
            "What's my career outlook?",
        ]),
    )
}

fn clarification_reply(role: Option<Role>) -> ChatReply {
    let role_clause = role
        .map(|r| format!("As a {r}, "))
        .unwrap_or_default();
    ChatReply::new(
        format!(
            "That's a great question! {role_clause}I'd be happy to help. Could \
             you provide a bit more detail about what specifically you'd like \
             to know? This will help me give you a more targeted answer."
        ),
        suggestions(&[
            "What skills should I learn?",
            "How does automation affect me?",
            "Tell me about my career",
        ]),
    )
}

fn acknowledgment_reply(raw_message: &str, role: Option<Role>) -> ChatReply {
    let role_clause = role
        .map(|r| format!("As a {r}, "))
        .unwrap_or_default();
    ChatReply::new(
        format!(
            "I understand you're asking about \"{raw_message}\". {role_clause}I \
             can help you with career development, skill recommendations, and \
             understanding automation risk. What specific aspect would you like \
             to explore?"
        ),
        suggestions(&[
            "Tell me about my risk level",
            "What should I learn?",
            "How does automation affect me?",
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn risk_question_hits_risk_branch_with_three_suggestions() {
        let reply = respond(
            "What is automation risk for me?",
            Some(Role::Technician),
            &[],
            &[],
        );
        assert!(reply.text.starts_with("As a Technician, automation risk"));
        assert_eq!(reply.suggestions.len(), 3);
        assert!(reply.suggestions.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn risk_reply_mentions_skills_when_present() {
        let reply = respond(
            "how automated is my job going to get?",
            Some(Role::Mechanic),
            &skills(&["Engine Repair", "Brake Systems"]),
            &[],
        );
        assert!(reply
            .text
            .contains("With your skills in Engine Repair, Brake Systems"));
    }

    #[test]
    fn risk_beats_learning_when_both_keywords_present() {
        // Priority order: "risk" is tested before "learn".
        assert_eq!(classify("should i learn about my risk?"), Topic::Risk);
    }

    #[test]
    fn learning_branch_appends_duration_remark_only_with_duration_keyword() {
        let plain = respond("what should i learn?", Some(Role::Electrician), &[], &[]);
        assert!(plain.text.starts_with("For electricians"));
        assert!(!plain.text.contains("3-6 months"));

        let timed = respond(
            "how long to learn a new course?",
            Some(Role::Electrician),
            &[],
            &[],
        );
        assert!(timed.text.contains("3-6 months with dedicated study"));
    }

    #[test]
    fn learning_branch_is_role_specific() {
        let mech = respond("any training advice?", Some(Role::Mechanic), &[], &[]);
        assert!(mech.text.starts_with("For mechanics"));

        let tech = respond("any training advice?", Some(Role::Technician), &[], &[]);
        assert!(tech.text.starts_with("For technicians"));

        let generic = respond("any training advice?", None, &[], &[]);
        assert!(generic.text.starts_with("I recommend focusing"));
    }

    #[test]
    fn skill_without_learning_keyword_hits_skill_summary() {
        assert_eq!(classify("tell me about my skillset"), Topic::Skills);

        let reply = respond(
            "tell me about my skillset",
            Some(Role::Technician),
            &skills(&["Data Backup"]),
            &[],
        );
        assert!(reply.text.contains("Your current skills include Data Backup"));
    }

    #[test]
    fn skill_with_learning_keyword_goes_to_learning_branch() {
        assert!(matches!(
            classify("which skill should i study?"),
            Topic::Learning { .. }
        ));
    }

    #[test]
    fn salary_keyword_adds_salary_clause() {
        let reply = respond("what's the pay like?", Some(Role::Mechanic), &[], &[]);
        assert!(reply.text.contains("Salaries vary by location"));

        let no_salary = respond("what's my job outlook?", Some(Role::Mechanic), &[], &[]);
        assert!(no_salary
            .text
            .contains("The key is continuous learning and adaptation."));
    }

    #[test]
    fn duration_alone_hits_timeline_branch() {
        assert_eq!(classify("ballpark in months please"), Topic::Timeline);
    }

    #[test]
    fn greeting_with_role_mentions_it() {
        let reply = respond("hello", Some(Role::Electrician), &[], &[]);
        assert!(reply.text.contains("I see you're a Electrician."));
    }

    #[test]
    fn greeting_without_role_omits_role_clause() {
        let reply = respond("hello", None, &[], &[]);
        assert!(!reply.text.contains("I see you're"));
        assert!(reply.text.starts_with("Hello! I'm here to help"));
        assert_eq!(reply.suggestions.len(), 3);
    }

    #[test]
    fn help_request_lists_capabilities() {
        let reply = respond("help", None, &[], &[]);
        assert!(reply.text.starts_with("I can help you with:"));
    }

    #[test]
    fn unmatched_question_asks_for_clarification() {
        assert_eq!(classify("why though?"), Topic::Clarification);
        assert_eq!(classify("where do i even begin"), Topic::Clarification);
    }

    #[test]
    fn unmatched_statement_is_acknowledged_with_echo() {
        let reply = respond("solar panels", None, &[], &[]);
        assert!(reply
            .text
            .contains("I understand you're asking about \"solar panels\"."));
    }

    #[test]
    fn acknowledgment_echoes_original_casing() {
        let reply = respond("Solar Panels!", None, &[], &[]);
        assert!(reply.text.contains("\"Solar Panels!\""));
    }

    #[test]
    fn classification_is_first_match_wins_across_the_whole_order() {
        // One message per branch, each also containing keywords from lower
        // priority branches to prove no fallthrough.
        assert_eq!(classify("automation risk and career help hello"), Topic::Risk);
        assert!(matches!(
            classify("recommend a career course, hello"),
            Topic::Learning { .. }
        ));
        assert_eq!(classify("skill and job outlook hello"), Topic::Skills);
        assert!(matches!(
            classify("job outlook over the years, hello"),
            Topic::Career { .. }
        ));
        assert_eq!(classify("hey, got a sec"), Topic::Greeting);
    }

    #[test]
    fn every_branch_returns_at_most_three_nonempty_suggestions() {
        let messages = [
            "automation",
            "should i study?",
            "my skill list",
            "future earnings",
            "how many months",
            "hello there",
            "help",
            "why?",
            "ok then",
        ];
        for message in messages {
            let reply = respond(message, Some(Role::Mechanic), &[], &[]);
            assert!(reply.suggestions.len() <= 3, "{message}");
            assert!(reply.suggestions.iter().all(|s| !s.is_empty()), "{message}");
            assert!(!reply.text.is_empty(), "{message}");
        }
    }
}
