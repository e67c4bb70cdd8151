//! Application layer - use-case orchestration over the domain and ports.

mod wizard;

pub use wizard::{RiskSummary, WizardSession};
