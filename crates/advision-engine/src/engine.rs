//! Orchestration of the generation-backed and heuristic paths.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;

use advision_core::{
    AdAnalysis, AdRecord, AnalysisSections, AppConfig, CampaignBrief, CampaignImage,
    CampaignStrategy, ImageBrief, InsightsReport,
};

use crate::aggregator::heuristic_insights;
use crate::analyzer::heuristic_analyze;
use crate::campaign::{
    fallback_campaign_strategy, placeholder_campaign_image, IMAGE_FAILED_NOTE,
    IMAGE_NOT_CONFIGURED_NOTE,
};
use crate::chat::{
    build_chat_prompt, ChatTurn, UserContext, NOT_CONFIGURED_MESSAGE, UNAVAILABLE_MESSAGE,
};
use crate::error::{EngineError, GenerationError};
use crate::extract::{extract_structured, Extraction};
use crate::gemini::GeminiClient;
use crate::generation::{ImageGenerator, SamplingConfig, TextGenerator};
use crate::images::ImageClient;
use crate::prompts::{analysis_prompt, campaign_prompt, image_prompt, insights_prompt};

/// Why a generation-backed call handed over to its fallback.
#[derive(Debug, thiserror::Error)]
enum FallbackReason {
    #[error("generation service not configured")]
    NotConfigured,
    #[error("prompt could not be built: {0}")]
    Prompt(serde_json::Error),
    #[error("generation failed: {0}")]
    Service(#[from] GenerationError),
    #[error("no JSON block in reply")]
    NotFound,
    #[error("reply block is not valid JSON: {0}")]
    Parse(serde_json::Error),
    #[error("reply does not match schema: {0}")]
    Validation(serde_json::Error),
}

/// Entry point for every analysis operation.
///
/// Cheap to share behind an `Arc`; holds no mutable state. Each call draws a
/// fresh random source for heuristic noise, seeded from `seed` when set.
#[derive(Clone)]
pub struct Engine {
    generator: Option<Arc<dyn TextGenerator>>,
    images: Option<Arc<dyn ImageGenerator>>,
    seed: Option<u64>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("generation_configured", &self.generation_configured())
            .field("images_configured", &self.images_configured())
            .field("seed", &self.seed)
            .finish()
    }
}

impl Engine {
    /// `None` disables the generation-backed path entirely.
    #[must_use]
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            generator,
            images: None,
            seed: None,
        }
    }

    /// Enables campaign visuals. Without it they are always placeholders.
    #[must_use]
    pub fn with_image_generator(mut self, images: Arc<dyn ImageGenerator>) -> Self {
        self.images = Some(images);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds a Gemini-backed engine when a credential is configured, plus an
    /// image client when an image credential is configured.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the HTTP client or endpoint cannot be
    /// constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, GenerationError> {
        let generator: Option<Arc<dyn TextGenerator>> = match &config.gemini_api_key {
            Some(key) => Some(Arc::new(GeminiClient::with_base_url(
                key,
                &config.gemini_model,
                config.generation_timeout_secs,
                &config.gemini_base_url,
            )?)),
            None => None,
        };
        let images: Option<Arc<dyn ImageGenerator>> = match &config.image_api_key {
            Some(key) => Some(Arc::new(ImageClient::with_base_url(
                key,
                &config.image_model,
                config.generation_timeout_secs,
                &config.image_base_url,
            )?)),
            None => None,
        };

        Ok(Self {
            generator,
            images,
            seed: config.heuristic_seed,
        })
    }

    #[must_use]
    pub fn generation_configured(&self) -> bool {
        self.generator.is_some()
    }

    #[must_use]
    pub fn images_configured(&self) -> bool {
        self.images.is_some()
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// One round-trip plus extraction. Never retries.
    async fn generate<T: DeserializeOwned>(
        &self,
        prompt: &str,
        sampling: &SamplingConfig,
    ) -> Result<T, FallbackReason> {
        let generator = self.generator.as_ref().ok_or(FallbackReason::NotConfigured)?;
        let text = generator.complete(prompt, sampling).await?;

        match extract_structured(&text) {
            Extraction::Success(value) => Ok(value),
            Extraction::NotFound => Err(FallbackReason::NotFound),
            Extraction::ParseError(e) => Err(FallbackReason::Parse(e)),
            Extraction::ValidationError(e) => Err(FallbackReason::Validation(e)),
        }
    }

    /// Analyze every ad in order, one result per input.
    ///
    /// A failing item falls back on its own; siblings are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyBatch`] when `ads` is empty.
    pub async fn analyze_batch(&self, ads: &[AdRecord]) -> Result<Vec<AdAnalysis>, EngineError> {
        if ads.is_empty() {
            return Err(EngineError::EmptyBatch("ads"));
        }
        tracing::info!(
            count = ads.len(),
            generation = self.generation_configured(),
            "analyzing ad batch"
        );

        let mut rng = self.rng();
        let mut results = Vec::with_capacity(ads.len());
        for (index, ad) in ads.iter().enumerate() {
            let prompt = analysis_prompt(ad);
            let analysis = match self
                .generate::<AnalysisSections>(&prompt, &SamplingConfig::ANALYSIS)
                .await
            {
                Ok(sections) => AdAnalysis {
                    ad: ad.clone(),
                    sections,
                },
                Err(reason) => {
                    log_fallback("ad analysis", Some(index), &reason);
                    heuristic_analyze(ad, index, &mut rng)
                }
            };
            results.push(analysis);
        }
        Ok(results)
    }

    /// Aggregate analyses into one report, falling back once for the whole
    /// batch.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyBatch`] when `analyses` is empty.
    pub async fn aggregate_insights(
        &self,
        analyses: &[AdAnalysis],
    ) -> Result<InsightsReport, EngineError> {
        if analyses.is_empty() {
            return Err(EngineError::EmptyBatch("analyses"));
        }
        tracing::info!(count = analyses.len(), "aggregating insights");

        let generated = match insights_prompt(analyses) {
            Ok(prompt) => {
                self.generate::<InsightsReport>(&prompt, &SamplingConfig::INSIGHTS)
                    .await
            }
            Err(e) => Err(FallbackReason::Prompt(e)),
        };

        match generated {
            Ok(report) => Ok(report),
            Err(reason) => {
                log_fallback("insights", None, &reason);
                heuristic_insights(analyses)
            }
        }
    }

    /// Free-form marketing advice. Never fails: service trouble yields a
    /// fixed message.
    pub async fn answer_question(
        &self,
        question: &str,
        context: Option<&UserContext>,
        history: &[ChatTurn],
    ) -> String {
        let Some(generator) = self.generator.as_ref() else {
            tracing::debug!("chat requested without generation credential");
            return NOT_CONFIGURED_MESSAGE.to_string();
        };

        let prompt = build_chat_prompt(question, context, history);
        match generator.complete(&prompt, &SamplingConfig::CHAT).await {
            Ok(answer) if !answer.trim().is_empty() => answer.trim().to_string(),
            Ok(_) => {
                tracing::warn!("chat reply was blank");
                UNAVAILABLE_MESSAGE.to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat generation failed");
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }

    /// Campaign strategy from an optional insights report and a brief.
    /// Falls back to a fixed template on any failure.
    pub async fn campaign_strategy(
        &self,
        insights: Option<&InsightsReport>,
        brief: &CampaignBrief,
    ) -> CampaignStrategy {
        let prompt = campaign_prompt(insights, brief);
        match self
            .generate::<CampaignStrategy>(&prompt, &SamplingConfig::CAMPAIGN)
            .await
        {
            Ok(strategy) => strategy,
            Err(reason) => {
                log_fallback("campaign strategy", None, &reason);
                fallback_campaign_strategy(brief)
            }
        }
    }

    /// Campaign visual for a brief. Never fails: a missing credential or a
    /// service error yields a placeholder carrying the prompt.
    pub async fn campaign_image(&self, brief: &ImageBrief) -> CampaignImage {
        let prompt = image_prompt(brief);
        let Some(images) = self.images.as_ref() else {
            tracing::debug!("campaign image requested without image credential");
            return placeholder_campaign_image(prompt, IMAGE_NOT_CONFIGURED_NOTE);
        };

        match images.render(&prompt).await {
            Ok(image_url) => CampaignImage {
                image_url,
                prompt,
                note: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "campaign image generation failed");
                placeholder_campaign_image(prompt, IMAGE_FAILED_NOTE)
            }
        }
    }
}

fn log_fallback(step: &str, index: Option<usize>, reason: &FallbackReason) {
    match reason {
        FallbackReason::NotConfigured => {
            tracing::debug!(step, index, "generation not configured, using heuristic");
        }
        _ => tracing::warn!(step, index, reason = %reason, "falling back to heuristic"),
    }
}
