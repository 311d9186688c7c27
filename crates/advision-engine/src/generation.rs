//! Boundary to the external text-generation service.

use async_trait::async_trait;

use crate::error::GenerationError;

/// Decoding parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl SamplingConfig {
    /// Per-ad analysis: low temperature for structural consistency.
    pub const ANALYSIS: Self = Self {
        temperature: 0.3,
        top_p: 0.8,
        top_k: 40,
        max_output_tokens: 2000,
    };

    pub const INSIGHTS: Self = Self {
        temperature: 0.4,
        top_p: 0.8,
        top_k: 40,
        max_output_tokens: 3000,
    };

    pub const CHAT: Self = Self {
        temperature: 0.7,
        top_p: 0.9,
        top_k: 40,
        max_output_tokens: 1000,
    };

    pub const CAMPAIGN: Self = Self {
        temperature: 0.7,
        top_p: 0.9,
        top_k: 40,
        max_output_tokens: 1500,
    };
}

/// A service that turns a prompt into free text.
///
/// Implementations make exactly one round-trip per call. Retrying is the
/// caller's decision, and the engine never retries: a failure means fallback.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, GenerationError>;
}

/// A service that renders a prompt into a hosted image and returns its URL.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn render(&self, prompt: &str) -> Result<String, GenerationError>;
}
