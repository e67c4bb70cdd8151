//! Recommendation engine - ranked upskilling suggestions from static catalogs.
//!
//! Each role has a hand-authored catalog of learnable skills with demand,
//! duration, difficulty, and priority metadata. [`recommend`] filters out
//! entries the worker already covers, reorders by priority and demand for
//! high-risk profiles, and caps the result at four entries.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

use super::profile::Role;

/// How hard a recommended skill is to pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// Catalog priority tier. High-priority entries jump the queue for
/// high-risk profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Growing,
}

impl Priority {
    /// Sort rank: High before Growing.
    fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Growing => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Growing => "Growing",
        };
        f.write_str(label)
    }
}

/// One learnable skill from a role catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    /// Market demand, 0-100.
    pub demand_percent: u8,
    /// Free-text duration label, e.g. "3-4 months".
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub priority: Priority,
}

const ELECTRICIAN_CATALOG: &[Recommendation] = &[
    Recommendation {
        title: "Solar Panel Installation",
        description: "Growing demand as homes switch to solar power",
        demand_percent: 95,
        duration: "3-4 months",
        difficulty: Difficulty::Easy,
        priority: Priority::High,
    },
    Recommendation {
        title: "Smart Home Systems",
        description: "Automated lighting, security, and climate control",
        demand_percent: 88,
        duration: "2-3 months",
        difficulty: Difficulty::Easy,
        priority: Priority::High,
    },
    Recommendation {
        title: "EV Charging Station Setup",
        description: "Essential skill as electric vehicles become mainstream",
        demand_percent: 82,
        duration: "4-5 months",
        difficulty: Difficulty::Medium,
        priority: Priority::Growing,
    },
    Recommendation {
        title: "Energy Storage Systems",
        description: "Battery backup and grid integration technologies",
        demand_percent: 75,
        duration: "5-6 months",
        difficulty: Difficulty::Medium,
        priority: Priority::Growing,
    },
];

const MECHANIC_CATALOG: &[Recommendation] = &[
    Recommendation {
        title: "EV Maintenance & Repair",
        description: "Critical skill as electric vehicles dominate the market",
        demand_percent: 92,
        duration: "4-5 months",
        difficulty: Difficulty::Medium,
        priority: Priority::High,
    },
    Recommendation {
        title: "Hybrid Vehicle Systems",
        description: "Understanding both electric and combustion systems",
        demand_percent: 85,
        duration: "3-4 months",
        difficulty: Difficulty::Medium,
        priority: Priority::High,
    },
    Recommendation {
        title: "Diagnostic Software",
        description: "Modern vehicle diagnostics and computer systems",
        demand_percent: 78,
        duration: "2-3 months",
        difficulty: Difficulty::Easy,
        priority: Priority::Growing,
    },
    Recommendation {
        title: "Battery Technology",
        description: "Lithium-ion and advanced battery systems",
        demand_percent: 70,
        duration: "5-6 months",
        difficulty: Difficulty::Hard,
        priority: Priority::Growing,
    },
];

const TECHNICIAN_CATALOG: &[Recommendation] = &[
    Recommendation {
        title: "Industrial Automation",
        description: "PLC programming and automated systems",
        demand_percent: 90,
        duration: "4-6 months",
        difficulty: Difficulty::Medium,
        priority: Priority::High,
    },
    Recommendation {
        title: "IoT Integration",
        description: "Connecting devices and systems to the internet",
        demand_percent: 85,
        duration: "3-4 months",
        difficulty: Difficulty::Medium,
        priority: Priority::High,
    },
    Recommendation {
        title: "Smart Home Systems",
        description: "Automated lighting, security, and climate control",
        demand_percent: 80,
        duration: "2-3 months",
        difficulty: Difficulty::Easy,
        priority: Priority::Growing,
    },
    Recommendation {
        title: "Energy Management Systems",
        description: "Monitoring and optimizing energy consumption",
        demand_percent: 75,
        duration: "4-5 months",
        difficulty: Difficulty::Medium,
        priority: Priority::Growing,
    },
];

/// Returns the catalog for a role. An unset role falls back to the
/// Electrician catalog, matching the shipped behavior for sessions that
/// skipped the role screen.
fn catalog_for(role: Option<Role>) -> &'static [Recommendation] {
    match role {
        Some(Role::Electrician) | None => ELECTRICIAN_CATALOG,
        Some(Role::Mechanic) => MECHANIC_CATALOG,
        Some(Role::Technician) => TECHNICIAN_CATALOG,
    }
}

/// Maximum entries returned to the results screen.
const MAX_RESULTS: usize = 4;

/// Returns at most four recommendations for the profile.
///
/// Entries whose lowercased title contains any of the worker's skills
/// (lowercased) as a substring are filtered out - a crude "don't recommend
/// what they already have" heuristic, containment rather than token match.
/// For `risk_score >= 70` the survivors are stable-sorted with High priority
/// first and demand descending within each tier; otherwise catalog order is
/// preserved. May return an empty list.
pub fn recommend(
    role: Option<Role>,
    skills: &[String],
    risk_score: i32,
) -> Vec<&'static Recommendation> {
    let owned_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut results: Vec<&'static Recommendation> = catalog_for(role)
        .iter()
        .filter(|rec| {
            let title = rec.title.to_lowercase();
            !owned_lower.iter().any(|skill| title.contains(skill))
        })
        .collect();

    if risk_score >= 70 {
        // sort_by_key is stable, so catalog order survives among ties.
        results.sort_by_key(|rec| (rec.priority.rank(), Reverse(rec.demand_percent)));
    }

    results.truncate(MAX_RESULTS);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn never_returns_more_than_four() {
        for role in [None, Some(Role::Electrician), Some(Role::Mechanic)] {
            assert!(recommend(role, &[], 90).len() <= 4);
            assert!(recommend(role, &[], 10).len() <= 4);
        }
    }

    #[test]
    fn high_risk_electrician_gets_high_priority_first() {
        let results = recommend(Some(Role::Electrician), &[], 75);

        assert_eq!(results[0].priority, Priority::High);
        // Non-increasing in (priority rank, demand).
        for pair in results.windows(2) {
            let key = |r: &Recommendation| (r.priority.rank(), Reverse(r.demand_percent));
            assert!(key(pair[0]) <= key(pair[1]));
        }
    }

    #[test]
    fn low_risk_preserves_catalog_order() {
        let results = recommend(Some(Role::Mechanic), &[], 40);
        let titles: Vec<_> = results.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            [
                "EV Maintenance & Repair",
                "Hybrid Vehicle Systems",
                "Diagnostic Software",
                "Battery Technology",
            ]
        );
    }

    #[test]
    fn filters_titles_containing_user_skills() {
        let results = recommend(
            Some(Role::Electrician),
            &skills(&["Smart Home Systems"]),
            50,
        );
        assert!(results.iter().all(|r| r.title != "Smart Home Systems"));
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn filter_is_substring_not_token_match() {
        // "EV" appears verbatim inside two Electrician titles.
        let results = recommend(Some(Role::Electrician), &skills(&["EV"]), 50);
        for rec in &results {
            assert!(!rec.title.to_lowercase().contains("ev"), "{}", rec.title);
        }
    }

    #[test]
    fn filtering_everything_yields_empty_list() {
        let all_titles: Vec<String> = ELECTRICIAN_CATALOG
            .iter()
            .map(|r| r.title.to_string())
            .collect();
        assert!(recommend(Some(Role::Electrician), &all_titles, 80).is_empty());
    }

    #[test]
    fn unset_role_falls_back_to_electrician_catalog() {
        let fallback = recommend(None, &[], 50);
        let electrician = recommend(Some(Role::Electrician), &[], 50);
        assert_eq!(fallback, electrician);
    }

    #[test]
    fn sort_is_stable_among_equal_keys() {
        // Technician catalog has two High entries (90, 85) and two Growing
        // (80, 75); with distinct demands the sorted order equals catalog
        // order, confirming no gratuitous reshuffling at high risk.
        let results = recommend(Some(Role::Technician), &[], 90);
        let titles: Vec<_> = results.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            [
                "Industrial Automation",
                "IoT Integration",
                "Smart Home Systems",
                "Energy Management Systems",
            ]
        );
    }
}
