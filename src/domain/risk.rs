//! Risk model - maps (role, skills) to an automation-risk score.
//!
//! The score is a plain sum over static lookup tables: a per-role base plus a
//! signed delta per selected skill. The function is total and deterministic;
//! unknown roles or skill names contribute zero rather than failing. Scores
//! are not clamped - callers bucket them via [`RiskLevel`] afterwards.
//!
//! # Table layout
//!
//! Skill deltas live in a single flat map that is not namespaced by role.
//! Two roles' catalogs collide on "Troubleshooting" (Electrician and
//! Technician); the map keeps one entry with the Technician value, matching
//! the scoring the product shipped with. See the pinning test below before
//! changing this.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::profile::Role;

/// Per-skill signed adjustments to the risk score.
///
/// Negative deltas reward automation-resistant skills; positive deltas mark
/// exposure. The trailing entries are legacy skill names kept for scoring
/// compatibility with earlier profiles.
static SKILL_RISK_DELTA: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        // Electrician
        ("Circuit Design", 5),
        ("Wiring", 8),
        ("Safety Compliance", -5),
        ("Lighting Systems", 3),
        ("Power Distribution", 6),
        ("Testing & Inspection", -3),
        ("Panel Installation", 4),
        ("Code Compliance", -5),
        ("Electrical Maintenance", 2),
        // Mechanic
        ("Engine Repair", 15),
        ("Brake Systems", 8),
        ("Transmission Work", 12),
        ("Diagnostic Tools", -10),
        ("HVAC Systems", 5),
        ("Suspension & Steering", 7),
        ("Electrical Systems", 4),
        ("Oil & Fluid Service", 3),
        ("Tire Service", 2),
        ("Welding & Fabrication", 6),
        // Technician ("Troubleshooting" also appears in the Electrician
        // catalog; this flat entry serves both)
        ("System Installation", -5),
        ("Network Configuration", -8),
        ("Troubleshooting", -10),
        ("Software Updates", -6),
        ("Hardware Repair", 4),
        ("Security Systems", -7),
        ("Data Backup", -4),
        ("Remote Support", -5),
        ("Documentation", -3),
        ("Customer Service", -2),
        // Legacy
        ("Basic Wiring", 10),
        ("EV Maintenance", -20),
        ("Smart Home Systems", -25),
        ("Industrial Automation", -30),
    ])
});

/// Base risk score per role.
fn role_base_risk(role: Role) -> i32 {
    match role {
        Role::Electrician => 40,
        Role::Mechanic => 55,
        Role::Technician => 35,
    }
}

/// Computes the automation-risk score for a role and skill set.
///
/// `score = base(role) + sum(delta(skill))`. Total over all inputs: an unset
/// role contributes 0, as does any skill name missing from the table. The
/// result is unclamped and may be negative or exceed 100.
pub fn compute_risk(role: Option<Role>, skills: &[String]) -> i32 {
    let base = role.map(role_base_risk).unwrap_or(0);
    skills.iter().fold(base, |score, skill| {
        score + SKILL_RISK_DELTA.get(skill.as_str()).copied().unwrap_or(0)
    })
}

/// Display bucket for a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Buckets a raw score. Boundaries are inclusive on the lower bound:
    /// `>= 70` High, `40..70` Medium, `< 40` Low.
    pub fn for_score(score: i32) -> RiskLevel {
        if score >= 70 {
            RiskLevel::High
        } else if score >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
        }
    }

    /// Estimated time until automation significantly impacts the role.
    pub fn time_horizon(&self) -> &'static str {
        match self {
            RiskLevel::High => "2-3 years",
            RiskLevel::Medium => "5-7 years",
            RiskLevel::Low => "10+ years",
        }
    }

    /// Explanatory message shown on the results screen.
    pub fn message(&self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Your current skills are at high risk. Consider learning \
                 automation-resistant skills and new technologies immediately \
                 to stay competitive."
            }
            RiskLevel::Medium => {
                "Your current skills are good, but new smart home and solar \
                 technologies are changing the field. Learning these will keep \
                 you in demand."
            }
            RiskLevel::Low => {
                "Your skills are well-positioned for the future. Continue \
                 staying updated with industry trends to maintain your \
                 competitive edge."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn mechanic_with_engine_repair_and_diagnostic_tools_scores_60() {
        let score = compute_risk(
            Some(Role::Mechanic),
            &skills(&["Engine Repair", "Diagnostic Tools"]),
        );
        assert_eq!(score, 55 + 15 - 10);
    }

    #[test]
    fn unset_role_contributes_zero_base() {
        assert_eq!(compute_risk(None, &[]), 0);
        assert_eq!(compute_risk(None, &skills(&["Wiring"])), 8);
    }

    #[test]
    fn unknown_skill_contributes_zero() {
        let known = compute_risk(Some(Role::Electrician), &skills(&["Wiring"]));
        let with_unknown = compute_risk(
            Some(Role::Electrician),
            &skills(&["Wiring", "Underwater Basket Weaving"]),
        );
        assert_eq!(known, with_unknown);
    }

    #[test]
    fn score_is_unclamped() {
        // All of the strongest negative deltas together go below zero.
        let score = compute_risk(
            Some(Role::Technician),
            &skills(&[
                "Smart Home Systems",
                "Industrial Automation",
                "EV Maintenance",
            ]),
        );
        assert!(score < 0, "expected negative score, got {score}");
    }

    #[test]
    fn colliding_skill_name_uses_technician_value() {
        // "Troubleshooting" is listed in both the Electrician and Technician
        // catalogs; the flat table keeps the Technician delta (-10). An
        // Electrician selecting it therefore gets -10, not the -8 the
        // Electrician source list suggested. Pinned deliberately: changing
        // this changes shipped scores.
        let score = compute_risk(Some(Role::Electrician), &skills(&["Troubleshooting"]));
        assert_eq!(score, 40 - 10);
    }

    #[test]
    fn bucket_boundaries_are_inclusive_on_lower_bound() {
        assert_eq!(RiskLevel::for_score(70), RiskLevel::High);
        assert_eq!(RiskLevel::for_score(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_score(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_score(39), RiskLevel::Low);
        assert_eq!(RiskLevel::for_score(-5), RiskLevel::Low);
        assert_eq!(RiskLevel::for_score(130), RiskLevel::High);
    }

    #[test]
    fn bucket_labels_and_horizons() {
        assert_eq!(RiskLevel::High.label(), "High Risk");
        assert_eq!(RiskLevel::High.time_horizon(), "2-3 years");
        assert_eq!(RiskLevel::Medium.time_horizon(), "5-7 years");
        assert_eq!(RiskLevel::Low.time_horizon(), "10+ years");
    }

    proptest! {
        #[test]
        fn score_is_independent_of_skill_order(
            mut selection in proptest::sample::subsequence(
                vec![
                    "Circuit Design", "Wiring", "Engine Repair",
                    "Diagnostic Tools", "Troubleshooting", "Data Backup",
                    "EV Maintenance", "Not A Skill",
                ],
                0..=8,
            )
        ) {
            let forward = compute_risk(Some(Role::Mechanic), &skills(&selection));
            selection.reverse();
            let backward = compute_risk(Some(Role::Mechanic), &skills(&selection));
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn score_is_deterministic(
            selection in proptest::sample::subsequence(
                vec!["Wiring", "Engine Repair", "Remote Support", "Tire Service"],
                0..=4,
            )
        ) {
            let first = compute_risk(Some(Role::Electrician), &skills(&selection));
            let second = compute_risk(Some(Role::Electrician), &skills(&selection));
            prop_assert_eq!(first, second);
        }
    }
}
