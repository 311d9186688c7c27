//! Output shapes shared by the heuristic and generation-backed paths.
//!
//! JSON field names are camelCase to match the shape the generation service
//! is asked to produce. Insights lists are fixed-size arrays so a reply with
//! the wrong cardinality fails deserialization instead of leaking through.

use serde::{Deserialize, Serialize};

use crate::ads::AdRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingStrategy {
    pub primary_strategy: String,
    pub call_to_action: String,
    pub value_proposition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalAnalysis {
    pub primary_emotion: String,
    /// In `[0, 100]`.
    pub emotional_score: f64,
    pub emotional_triggers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub overall_sentiment: Sentiment,
    /// In `[-100, 100]`.
    pub sentiment_score: f64,
    pub key_phrases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookAnalysis {
    pub primary_hook: String,
    pub hook_type: String,
    /// In `[0, 100]`.
    pub hook_effectiveness: f64,
}

/// Estimated performance, each value in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub estimated_engagement: f64,
    pub conversion_potential: f64,
    pub virality_score: f64,
}

/// The five analysis sections, without the originating ad.
///
/// This is exactly what the generation service is asked to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSections {
    pub marketing_strategy: MarketingStrategy,
    pub emotional_analysis: EmotionalAnalysis,
    pub sentiment_analysis: SentimentAnalysis,
    pub hooks: HookAnalysis,
    pub performance_metrics: PerformanceMetrics,
}

/// Per-ad analysis, carrying the ad it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdAnalysis {
    #[serde(default)]
    pub ad: AdRecord,
    #[serde(flatten)]
    pub sections: AnalysisSections,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotAnalysis {
    pub strengths: [String; 3],
    pub weaknesses: [String; 3],
    pub opportunities: [String; 3],
    pub threats: [String; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicRecommendations {
    pub marketing_strategy: [String; 3],
    pub emotional_appeal: [String; 3],
    pub hook_optimization: [String; 3],
    pub performance_optimization: [String; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeGuidelines {
    pub messaging: [String; 3],
    pub visual_elements: [String; 3],
    pub call_to_action: [String; 3],
    pub tone_of_voice: [String; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationPlan {
    pub immediate_actions: [String; 3],
    pub short_term_goals: [String; 3],
    pub long_term_strategy: [String; 3],
    pub success_metrics: [String; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAdvantage {
    pub unique_positioning: String,
    pub differentiation_strategy: String,
    pub value_proposition: String,
    pub target_audience: String,
}

/// Competitive-insights report aggregated over a batch of [`AdAnalysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
    pub competitive_analysis: SwotAnalysis,
    pub strategic_recommendations: StrategicRecommendations,
    pub creative_guidelines: CreativeGuidelines,
    pub implementation_plan: ImplementationPlan,
    pub competitive_advantage: CompetitiveAdvantage,
}

/// Campaign parameters supplied by the user when asking for a strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CampaignBrief {
    pub platform: String,
    pub objective: String,
    pub target_audience: String,
    pub budget: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPlan {
    pub primary_strategy: String,
    pub key_messages: [String; 3],
    pub emotional_appeal: String,
    pub hook_strategy: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeElements {
    pub headline: String,
    pub subheadline: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStrategy {
    pub marketing_strategy: StrategyPlan,
    pub creative_elements: CreativeElements,
}

/// Art direction for a campaign visual. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualDirection {
    pub headline: String,
    pub visual_style: String,
    pub tone_of_voice: String,
}

/// Campaign parameters for a generated visual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageBrief {
    pub platform: String,
    pub objective: String,
    pub creative_elements: VisualDirection,
}

/// A campaign visual. `note` is set only when `image_url` is a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignImage {
    pub image_url: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
