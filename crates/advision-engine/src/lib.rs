//! Dual-path ad analysis engine.
//!
//! Every analysis step first asks an external text-generation service for a
//! structured answer and falls back to a deterministic heuristic whenever the
//! service is unconfigured, fails, or replies with something that does not
//! fit the schema. The heuristics live in [`analyzer`] and [`aggregator`];
//! [`Engine`] sequences both paths per batch. Campaign visuals follow the same
//! shape: a hosted image service when configured, a placeholder otherwise.

pub mod aggregator;
pub mod analyzer;
pub mod campaign;
pub mod chat;
pub mod engine;
pub mod error;
pub mod extract;
pub mod generation;
pub mod prompts;

mod gemini;
mod images;

pub use aggregator::heuristic_insights;
pub use analyzer::heuristic_analyze;
pub use chat::{ChatTurn, UserContext};
pub use engine::Engine;
pub use error::{EngineError, GenerationError};
pub use extract::{extract_structured, Extraction};
pub use gemini::GeminiClient;
pub use generation::{ImageGenerator, SamplingConfig, TextGenerator};
pub use images::ImageClient;
