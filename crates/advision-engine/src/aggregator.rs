//! Heuristic insights aggregator.
//!
//! Reduces a batch of analyses to three facts (the most common strategy, the
//! most common emotion, the dominant sentiment) and fills fixed report
//! templates with them.

use advision_core::schema::{
    CompetitiveAdvantage, CreativeGuidelines, ImplementationPlan, StrategicRecommendations,
    SwotAnalysis,
};
use advision_core::{AdAnalysis, InsightsReport, Sentiment};

use crate::error::EngineError;

/// Most frequent label; ties go to the label seen first.
fn mode<'a>(labels: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (label, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((label, n));
        }
    }
    best.map(|(label, _)| label)
}

/// `Positive` or `Negative` only with a strict majority; otherwise `Neutral`.
#[must_use]
pub fn dominant_sentiment(analyses: &[AdAnalysis]) -> Sentiment {
    let count = |wanted: Sentiment| {
        analyses
            .iter()
            .filter(|a| a.sections.sentiment_analysis.overall_sentiment == wanted)
            .count()
    };

    if count(Sentiment::Positive) * 2 > analyses.len() {
        Sentiment::Positive
    } else if count(Sentiment::Negative) * 2 > analyses.len() {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// The values the report templates are filled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchProfile {
    pub strategy: String,
    pub emotion: String,
    pub sentiment: Sentiment,
}

impl BatchProfile {
    /// Profile a non-empty batch.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyBatch`] when `analyses` is empty.
    pub fn from_analyses(analyses: &[AdAnalysis]) -> Result<Self, EngineError> {
        let strategy = mode(
            analyses
                .iter()
                .map(|a| a.sections.marketing_strategy.primary_strategy.as_str()),
        )
        .ok_or(EngineError::EmptyBatch("analyses"))?;
        let emotion = mode(
            analyses
                .iter()
                .map(|a| a.sections.emotional_analysis.primary_emotion.as_str()),
        )
        .ok_or(EngineError::EmptyBatch("analyses"))?;

        Ok(Self {
            strategy: strategy.to_string(),
            emotion: emotion.to_string(),
            sentiment: dominant_sentiment(analyses),
        })
    }
}

fn three(a: &str, b: &str, c: &str) -> [String; 3] {
    [a.to_string(), b.to_string(), c.to_string()]
}

/// Build the fallback insights report for a batch of analyses.
///
/// # Errors
///
/// Returns [`EngineError::EmptyBatch`] when `analyses` is empty.
pub fn heuristic_insights(analyses: &[AdAnalysis]) -> Result<InsightsReport, EngineError> {
    let profile = BatchProfile::from_analyses(analyses)?;
    Ok(render_report(&profile))
}

/// Fill the report templates for `profile`.
#[must_use]
pub fn render_report(profile: &BatchProfile) -> InsightsReport {
    let BatchProfile {
        strategy,
        emotion,
        sentiment,
    } = profile;

    let tone_counter = match sentiment {
        Sentiment::Positive => "Stand out against upbeat competitor copy with concrete proof points",
        Sentiment::Negative => "Offer an optimistic alternative to negative competitor framing",
        Sentiment::Neutral => "Inject a clear emotional stance where competitors stay neutral",
    };

    InsightsReport {
        competitive_analysis: SwotAnalysis {
            strengths: [
                format!("Competitors are using {strategy} effectively"),
                format!("Strong emotional connection built on {emotion}"),
                "Consistent brand positioning across campaigns".to_string(),
            ],
            weaknesses: [
                "Limited differentiation in messaging approach".to_string(),
                format!("Over-reliance on {emotion} as the single emotional trigger"),
                "Generic call-to-action strategies".to_string(),
            ],
            opportunities: three(
                "Gap in unique value proposition messaging",
                "Potential for innovative hook strategies",
                "Room for improved emotional storytelling",
            ),
            threats: [
                format!("Market saturation with {strategy} approaches"),
                format!("Audiences growing used to a predominantly {sentiment} tone"),
                "Potential loss of competitive edge".to_string(),
            ],
        },
        strategic_recommendations: StrategicRecommendations {
            marketing_strategy: [
                format!("Differentiate from the {strategy} approach"),
                "Focus on unique value proposition".to_string(),
                "Implement multi-channel strategy".to_string(),
            ],
            emotional_appeal: [
                format!("Counter {emotion} with complementary emotions"),
                "Create emotional journey in messaging".to_string(),
                "Build deeper emotional connections".to_string(),
            ],
            hook_optimization: three(
                "Develop unique hook patterns",
                "Test curiosity-driven approaches",
                "Implement urgency without pressure",
            ),
            performance_optimization: three(
                "A/B test multiple messaging approaches",
                "Optimize for higher engagement rates",
                "Focus on conversion optimization",
            ),
        },
        creative_guidelines: CreativeGuidelines {
            messaging: three(
                "Lead with unique value proposition",
                "Use storytelling to create connection",
                "Include social proof elements",
            ),
            visual_elements: three(
                "Use contrasting colors to stand out",
                "Implement dynamic visual storytelling",
                "Focus on human-centric imagery",
            ),
            call_to_action: three(
                "Create urgency without pressure",
                "Use action-oriented language",
                "Offer clear value exchange",
            ),
            tone_of_voice: [
                tone_counter.to_string(),
                "Use conversational language".to_string(),
                "Build trust through authenticity".to_string(),
            ],
        },
        implementation_plan: ImplementationPlan {
            immediate_actions: three(
                "Audit current messaging strategy",
                "Identify unique value propositions",
                "Plan A/B testing framework",
            ),
            short_term_goals: three(
                "Develop differentiated messaging",
                "Create new creative assets",
                "Implement tracking mechanisms",
            ),
            long_term_strategy: three(
                "Build brand differentiation",
                "Establish market leadership",
                "Create sustainable competitive advantage",
            ),
            success_metrics: three(
                "Engagement rate improvement",
                "Conversion rate optimization",
                "Brand recognition growth",
            ),
        },
        competitive_advantage: CompetitiveAdvantage {
            unique_positioning: format!(
                "Differentiate from the {strategy} approach with innovative messaging"
            ),
            differentiation_strategy: format!(
                "Pair unique value propositions with emotional storytelling beyond {emotion}"
            ),
            value_proposition: "Provide clear, compelling reasons to choose your brand".to_string(),
            target_audience: "Identify and target underserved audience segments".to_string(),
        },
    }
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
