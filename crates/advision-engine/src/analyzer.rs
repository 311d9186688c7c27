//! Heuristic per-ad analyzer.
//!
//! Computes an [`AdAnalysis`] from the ad's own text and numbers. Label
//! choices that the content cannot decide rotate through fixed pools by the
//! ad's position in its batch; scores are a rule-based baseline plus bounded
//! noise from the injected random source.

use rand::seq::IndexedRandom;
use rand::Rng;

use advision_core::schema::{
    EmotionalAnalysis, HookAnalysis, MarketingStrategy, PerformanceMetrics, SentimentAnalysis,
};
use advision_core::{AdAnalysis, AdRecord, AnalysisSections, Sentiment};

pub(crate) const STRATEGIES: &[&str] = &[
    "Emotional Storytelling",
    "Social Proof",
    "Urgency & Scarcity",
    "Problem-Solution",
    "Benefit-Driven",
    "Exclusive Access",
    "Limited Time Offer",
];

const EMOTIONS: &[&str] = &[
    "Excitement",
    "Trust",
    "Curiosity",
    "Urgency",
    "Joy",
    "Relief",
    "Confidence",
    "Inspiration",
];

const CALLS_TO_ACTION: &[&str] = &[
    "Shop Now",
    "Learn More",
    "Get Started",
    "Try Free",
    "Join Today",
    "Download Now",
    "Book Now",
    "Sign Up",
];

const VALUE_PROPOSITIONS: &[&str] = &[
    "Save 50% today only",
    "Join 10,000+ satisfied customers",
    "Transform your life in 30 days",
    "Limited time offer",
    "Exclusive access",
    "Proven results",
];

const HOOKS: &[&str] = &[
    "What if you could...",
    "Imagine having...",
    "Don't miss out on...",
    "Discover the secret...",
    "Transform your...",
    "Unlock the power of...",
];

const HOOK_TYPES: &[&str] = &[
    "curiosity",
    "urgency",
    "social_proof",
    "fear",
    "benefit",
    "story",
    "exclusive",
];

const TRIGGERS: &[&str] = &[
    "Limited time",
    "Exclusive access",
    "Social proof",
    "Personal benefit",
    "Scarcity",
    "Authority",
    "Reciprocity",
];

const KEY_PHRASES: &[&str] = &[
    "amazing results",
    "best value",
    "limited time",
    "exclusive offer",
    "proven method",
    "transform",
    "discover",
    "unlock",
];

const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "best",
    "great",
    "excellent",
    "perfect",
    "love",
    "wonderful",
    "fantastic",
];

const NEGATIVE_WORDS: &[&str] = &[
    "worst",
    "terrible",
    "awful",
    "horrible",
    "bad",
    "hate",
    "disappointing",
];

/// Number of labels drawn for emotional triggers and key phrases.
const SAMPLED_LABELS: usize = 3;

/// A keyword group and the strategy it implies.
struct StrategyRule {
    keywords: &'static [&'static str],
    strategy: &'static str,
}

/// Evaluated top to bottom; the first rule with any keyword present wins.
const STRATEGY_RULES: &[StrategyRule] = &[
    StrategyRule {
        keywords: &["limited", "today only", "offer", "sale"],
        strategy: "Urgency & Scarcity",
    },
    StrategyRule {
        keywords: &["join", "community", "people", "customers"],
        strategy: "Social Proof",
    },
    StrategyRule {
        keywords: &["transform", "change", "improve", "better"],
        strategy: "Benefit-Driven",
    },
    StrategyRule {
        keywords: &["problem", "struggle", "difficult", "challenge"],
        strategy: "Problem-Solution",
    },
];

/// Additive adjustment to the three performance baselines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Baseline {
    pub engagement: f64,
    pub conversion: f64,
    pub virality: f64,
}

impl Baseline {
    const BASE: Self = Self {
        engagement: 45.0,
        conversion: 25.0,
        virality: 35.0,
    };

    fn add(self, other: Self) -> Self {
        Self {
            engagement: self.engagement + other.engagement,
            conversion: self.conversion + other.conversion,
            virality: self.virality + other.virality,
        }
    }
}

/// Business-type bonuses, matched as substrings of the lowercased business
/// type. First match wins.
const BUSINESS_BONUSES: &[(&[&str], Baseline)] = &[
    (
        &["e-commerce"],
        Baseline {
            engagement: 10.0,
            conversion: 15.0,
            virality: 0.0,
        },
    ),
    (
        &["technology"],
        Baseline {
            engagement: 15.0,
            conversion: 0.0,
            virality: 20.0,
        },
    ),
    (
        &["health", "fitness"],
        Baseline {
            engagement: 8.0,
            conversion: 10.0,
            virality: 0.0,
        },
    ),
];

/// Spend tiers as `(spend strictly above, bonus)`, highest tier first.
const SPEND_BONUSES: &[(u64, Baseline)] = &[
    (
        10_000,
        Baseline {
            engagement: 8.0,
            conversion: 12.0,
            virality: 0.0,
        },
    ),
    (
        5_000,
        Baseline {
            engagement: 5.0,
            conversion: 8.0,
            virality: 0.0,
        },
    ),
];

/// Noise range and clamp bounds for one performance metric.
struct MetricBounds {
    noise: (f64, f64),
    floor: f64,
    ceiling: f64,
}

const ENGAGEMENT: MetricBounds = MetricBounds {
    noise: (-10.0, 15.0),
    floor: 20.0,
    ceiling: 95.0,
};

const CONVERSION: MetricBounds = MetricBounds {
    noise: (-8.0, 12.0),
    floor: 10.0,
    ceiling: 85.0,
};

const VIRALITY: MetricBounds = MetricBounds {
    noise: (-12.0, 18.0),
    floor: 15.0,
    ceiling: 90.0,
};

impl MetricBounds {
    fn sample<R: Rng + ?Sized>(&self, base: f64, rng: &mut R) -> f64 {
        let noisy = base + rng.random_range(self.noise.0..=self.noise.1);
        round_one_decimal(noisy.clamp(self.floor, self.ceiling))
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn pick(pool: &[&str], index: usize) -> String {
    pool[index % pool.len()].to_string()
}

fn sample_distinct<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> Vec<String> {
    pool.choose_multiple(rng, SAMPLED_LABELS)
        .map(|label| (*label).to_string())
        .collect()
}

/// Strategy implied by the creative body, falling back to rotation by `index`.
#[must_use]
pub fn select_strategy(body: &str, index: usize) -> String {
    let text = body.to_lowercase();
    STRATEGY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| text.contains(k)))
        .map_or_else(|| pick(STRATEGIES, index), |rule| rule.strategy.to_string())
}

/// Performance baseline before noise: fixed base plus business-type and
/// spend-tier bonuses.
#[must_use]
pub fn performance_baseline(ad: &AdRecord) -> Baseline {
    let business = ad.business_type.to_lowercase();
    let business_bonus = BUSINESS_BONUSES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| business.contains(n)))
        .map(|(_, bonus)| *bonus)
        .unwrap_or_default();
    let spend_bonus = SPEND_BONUSES
        .iter()
        .find(|(threshold, _)| ad.spend > *threshold)
        .map(|(_, bonus)| *bonus)
        .unwrap_or_default();

    Baseline::BASE.add(business_bonus).add(spend_bonus)
}

/// Sentiment class from lexicon hits in the creative body.
///
/// Each listed word counts once if it appears anywhere in the lowercased
/// text.
#[must_use]
pub fn classify_sentiment(body: &str) -> Sentiment {
    let text = body.to_lowercase();
    let hits = |words: &[&str]| words.iter().filter(|w| text.contains(*w)).count();
    let positive = hits(POSITIVE_WORDS);
    let negative = hits(NEGATIVE_WORDS);

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

fn sentiment_score<R: Rng + ?Sized>(sentiment: Sentiment, rng: &mut R) -> f64 {
    match sentiment {
        Sentiment::Positive => 30.0 + rng.random_range(20.0..=50.0),
        Sentiment::Negative => -30.0 - rng.random_range(20.0..=50.0),
        Sentiment::Neutral => rng.random_range(-20.0..=20.0),
    }
}

/// Compute the fallback analysis for `ad` at position `index` in its batch.
///
/// Holding `rng` fixed, the result is a pure function of `(ad, index)`.
#[must_use]
pub fn heuristic_analyze<R: Rng + ?Sized>(ad: &AdRecord, index: usize, rng: &mut R) -> AdAnalysis {
    let baseline = performance_baseline(ad);
    let performance_metrics = PerformanceMetrics {
        estimated_engagement: ENGAGEMENT.sample(baseline.engagement, rng),
        conversion_potential: CONVERSION.sample(baseline.conversion, rng),
        virality_score: VIRALITY.sample(baseline.virality, rng),
    };

    let overall_sentiment = classify_sentiment(&ad.ad_creative_body);
    let sentiment_score = sentiment_score(overall_sentiment, rng);

    let emotional_analysis = EmotionalAnalysis {
        primary_emotion: pick(EMOTIONS, index),
        emotional_score: 60.0 + rng.random_range(10.0..=35.0),
        emotional_triggers: sample_distinct(TRIGGERS, rng),
    };

    let sentiment_analysis = SentimentAnalysis {
        overall_sentiment,
        sentiment_score,
        key_phrases: sample_distinct(KEY_PHRASES, rng),
    };

    let hooks = HookAnalysis {
        primary_hook: pick(HOOKS, index),
        hook_type: pick(HOOK_TYPES, index),
        hook_effectiveness: 55.0 + rng.random_range(10.0..=40.0),
    };

    AdAnalysis {
        ad: ad.clone(),
        sections: AnalysisSections {
            marketing_strategy: MarketingStrategy {
                primary_strategy: select_strategy(&ad.ad_creative_body, index),
                call_to_action: pick(CALLS_TO_ACTION, index),
                value_proposition: pick(VALUE_PROPOSITIONS, index),
            },
            emotional_analysis,
            sentiment_analysis,
            hooks,
            performance_metrics,
        },
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
