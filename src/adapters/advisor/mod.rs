//! Advisor adapters - mock, live (Gemini), and the fallback wrapper.

mod fallback;
mod gemini;
mod mock;

pub use fallback::FallbackAdvisor;
pub use gemini::{strip_code_fences, GeminiAdvisor, GeminiConfig};
pub use mock::MockAdvisor;
