//! SkillGuard - Automation Risk Assessment for Trade Workers
//!
//! This crate estimates a worker's automation-risk score from their role and
//! self-reported skills, ranks upskilling recommendations from static catalogs,
//! and offers a career-advisor chat backed by a remote completion service with
//! a deterministic rule-based fallback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
