//! Worker profile - session-scoped state collected by the wizard.
//!
//! A [`Profile`] holds the role, selected skills, and experience band entered
//! through the wizard screens, together with the derived risk score. Every
//! mutator recomputes the score, so a reader can never observe a score that
//! is stale with respect to the current (role, skills) pair.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::risk;

/// A supported trade role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Electrician,
    Mechanic,
    Technician,
}

impl Role {
    /// All supported roles, in wizard display order.
    pub const ALL: [Role; 3] = [Role::Electrician, Role::Mechanic, Role::Technician];

    /// Returns the role name as shown in the wizard.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Electrician => "Electrician",
            Role::Mechanic => "Mechanic",
            Role::Technician => "Technician",
        }
    }

    /// Parses a role from its display name (case-insensitive).
    pub fn parse(input: &str) -> Option<Role> {
        match input.trim().to_lowercase().as_str() {
            "electrician" => Some(Role::Electrician),
            "mechanic" => Some(Role::Mechanic),
            "technician" => Some(Role::Technician),
            _ => None,
        }
    }

    /// Returns the selectable skill catalog for this role.
    ///
    /// Skill names are shared across roles where the trades overlap (e.g.
    /// "Troubleshooting"); see [`risk`] for how that affects scoring.
    pub fn skill_catalog(&self) -> &'static [&'static str] {
        match self {
            Role::Electrician => &[
                "Circuit Design",
                "Wiring",
                "Safety Compliance",
                "Lighting Systems",
                "Power Distribution",
                "Testing & Inspection",
                "Panel Installation",
                "Troubleshooting",
                "Code Compliance",
                "Electrical Maintenance",
            ],
            Role::Mechanic => &[
                "Engine Repair",
                "Brake Systems",
                "Transmission Work",
                "Diagnostic Tools",
                "HVAC Systems",
                "Suspension & Steering",
                "Electrical Systems",
                "Oil & Fluid Service",
                "Tire Service",
                "Welding & Fabrication",
            ],
            Role::Technician => &[
                "System Installation",
                "Network Configuration",
                "Troubleshooting",
                "Software Updates",
                "Hardware Repair",
                "Security Systems",
                "Data Backup",
                "Remote Support",
                "Documentation",
                "Customer Service",
            ],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Years of experience, bucketed as offered by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExperienceBand {
    /// 0-2 years.
    Entry,
    /// 3-5 years.
    #[default]
    Mid,
    /// 6+ years.
    Senior,
}

impl ExperienceBand {
    /// Returns the band label used in prompts and display ("0-2", "3-5", "6+").
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceBand::Entry => "0-2",
            ExperienceBand::Mid => "3-5",
            ExperienceBand::Senior => "6+",
        }
    }

    /// Parses a band from its label.
    pub fn parse(input: &str) -> Option<ExperienceBand> {
        match input.trim() {
            "0-2" => Some(ExperienceBand::Entry),
            "3-5" => Some(ExperienceBand::Mid),
            "6+" => Some(ExperienceBand::Senior),
            _ => None,
        }
    }
}

impl fmt::Display for ExperienceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session-scoped worker profile.
///
/// Created empty at session start, mutated only by the wizard screens, and
/// discarded when the session ends. The derived `risk_score` is private and
/// recomputed on every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    role: Option<Role>,
    skills: Vec<String>,
    experience: ExperienceBand,
    risk_score: i32,
}

impl Profile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected role, if any.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns the selected skills in insertion order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Returns the experience band.
    pub fn experience(&self) -> ExperienceBand {
        self.experience
    }

    /// Returns the risk score for the current (role, skills) pair.
    pub fn risk_score(&self) -> i32 {
        self.risk_score
    }

    /// Sets the role and recomputes the risk score.
    pub fn set_role(&mut self, role: Role) {
        self.role = Some(role);
        self.recompute();
    }

    /// Adds the skill if absent, removes it if present. Recomputes the score.
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(pos) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(pos);
        } else {
            self.skills.push(skill.to_string());
        }
        self.recompute();
    }

    /// Replaces the skill set, de-duplicating while preserving insertion order.
    pub fn set_skills(&mut self, skills: Vec<String>) {
        self.skills.clear();
        for skill in skills {
            if !self.skills.contains(&skill) {
                self.skills.push(skill);
            }
        }
        self.recompute();
    }

    /// Sets the experience band. Experience does not feed the score.
    pub fn set_experience(&mut self, experience: ExperienceBand) {
        self.experience = experience;
    }

    fn recompute(&mut self) {
        self.risk_score = risk::compute_risk(self.role, &self.skills);
    }
}
