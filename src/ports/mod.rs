//! Ports - interfaces between the application core and the outside world.

mod advisor;

pub use advisor::{
    Advisor, AdvisorError, AdvisorRecommendation, LearningPath, SkillAnalysis, Urgency,
};
