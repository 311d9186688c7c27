//! Prompt builders for the generation-backed path.
//!
//! Each prompt embeds the exact JSON shape the reply must follow so that
//! [`crate::extract::extract_structured`] can validate it against the typed
//! schema.

use std::fmt::Write as _;

use advision_core::{AdAnalysis, AdRecord, CampaignBrief, ImageBrief, InsightsReport};

const ANALYSIS_SHAPE: &str = r#"{
  "marketingStrategy": {
    "primaryStrategy": "string",
    "callToAction": "string",
    "valueProposition": "string"
  },
  "emotionalAnalysis": {
    "primaryEmotion": "string",
    "emotionalScore": number (0-100),
    "emotionalTriggers": ["string", "string", "string"]
  },
  "sentimentAnalysis": {
    "overallSentiment": "positive|negative|neutral",
    "sentimentScore": number (-100 to 100),
    "keyPhrases": ["string", "string", "string"]
  },
  "hooks": {
    "primaryHook": "string",
    "hookType": "curiosity|urgency|social_proof|fear|benefit|story",
    "hookEffectiveness": number (0-100)
  },
  "performanceMetrics": {
    "estimatedEngagement": number (0-100),
    "conversionPotential": number (0-100),
    "viralityScore": number (0-100)
  }
}"#;

const INSIGHTS_SHAPE: &str = r#"{
  "competitiveAnalysis": {
    "strengths": ["string", "string", "string"],
    "weaknesses": ["string", "string", "string"],
    "opportunities": ["string", "string", "string"],
    "threats": ["string", "string", "string"]
  },
  "strategicRecommendations": {
    "marketingStrategy": ["string", "string", "string"],
    "emotionalAppeal": ["string", "string", "string"],
    "hookOptimization": ["string", "string", "string"],
    "performanceOptimization": ["string", "string", "string"]
  },
  "creativeGuidelines": {
    "messaging": ["string", "string", "string"],
    "visualElements": ["string", "string", "string"],
    "callToAction": ["string", "string", "string"],
    "toneOfVoice": ["string", "string", "string"]
  },
  "implementationPlan": {
    "immediateActions": ["string", "string", "string"],
    "shortTermGoals": ["string", "string", "string"],
    "longTermStrategy": ["string", "string", "string"],
    "successMetrics": ["string", "string", "string"]
  },
  "competitiveAdvantage": {
    "uniquePositioning": "string",
    "differentiationStrategy": "string",
    "valueProposition": "string",
    "targetAudience": "string"
  }
}"#;

const CAMPAIGN_SHAPE: &str = r#"{
  "marketingStrategy": {
    "primaryStrategy": "detailed strategy description",
    "keyMessages": ["message1", "message2", "message3"],
    "emotionalAppeal": "emotional appeal strategy",
    "hookStrategy": "hook strategy description"
  },
  "creativeElements": {
    "headline": "compelling headline",
    "subheadline": "supporting subheadline",
    "callToAction": "strong call to action"
  }
}"#;

/// Format an integer with comma thousands separators: `12500` -> `12,500`.
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Per-ad analysis prompt.
#[must_use]
pub fn analysis_prompt(ad: &AdRecord) -> String {
    format!(
        "Analyze this advertising creative and provide detailed insights in JSON format:\n\n\
         Ad Creative: \"{body}\"\n\
         Business Type: {business_type}\n\
         Category: {category}\n\
         Platform: {platform}\n\
         Ad Type: {ad_type}\n\
         Target Audience: {audience}\n\
         Spend: ${spend}\n\
         Impressions: {impressions}\n\n\
         Please provide analysis in this exact JSON format:\n{ANALYSIS_SHAPE}\n\n\
         Focus on:\n\
         1. Marketing strategy and positioning\n\
         2. Emotional triggers and psychological appeal\n\
         3. Sentiment and tone analysis\n\
         4. Hook types and effectiveness\n\
         5. Performance potential metrics\n",
        body = ad.ad_creative_body,
        business_type = ad.business_type,
        category = ad.category,
        platform = ad.platform,
        ad_type = ad.ad_type,
        audience = ad.target_audience,
        spend = thousands(ad.spend),
        impressions = thousands(ad.impressions),
    )
}

/// Insights prompt over a batch of analyses.
///
/// # Errors
///
/// Returns the serialization error if the analyses cannot be rendered as
/// JSON.
pub fn insights_prompt(analyses: &[AdAnalysis]) -> Result<String, serde_json::Error> {
    let embedded = serde_json::to_string_pretty(analyses)?;
    Ok(format!(
        "As a marketing expert, analyze these competitor ad analyses and provide actionable \
         insights for creating better ads:\n\n{embedded}\n\n\
         Based on this analysis, provide comprehensive insights in this exact JSON format \
         (every list holds exactly three strings):\n{INSIGHTS_SHAPE}\n\n\
         Focus on:\n\
         1. Identifying gaps in competitor strategies\n\
         2. Opportunities for differentiation\n\
         3. Specific actionable recommendations\n\
         4. Creative and messaging improvements\n\
         5. Performance optimization strategies\n\
         6. Implementation roadmap\n"
    ))
}

fn or_unspecified(value: &str) -> &str {
    if value.trim().is_empty() {
        "Not specified"
    } else {
        value
    }
}

/// Campaign strategy prompt from an optional insights report and a brief.
#[must_use]
pub fn campaign_prompt(insights: Option<&InsightsReport>, brief: &CampaignBrief) -> String {
    let mut prompt = String::from(
        "As a marketing expert, analyze the following insights and campaign data to generate \
         a comprehensive marketing strategy:\n\nINSIGHTS DATA:\n",
    );

    match insights {
        Some(report) => {
            let recs = &report.strategic_recommendations.marketing_strategy;
            let guidelines = &report.creative_guidelines;
            let _ = writeln!(
                prompt,
                "- Competitive Advantage: {}",
                report.competitive_advantage.unique_positioning
            );
            let _ = writeln!(prompt, "- Strategic Recommendations: {}", recs.join("; "));
            let _ = writeln!(
                prompt,
                "- Creative Guidelines: messaging: {}; call to action: {}; tone: {}",
                guidelines.messaging.join(", "),
                guidelines.call_to_action.join(", "),
                guidelines.tone_of_voice.join(", "),
            );
        }
        None => prompt.push_str("- No competitor insights available\n"),
    }

    let _ = write!(
        prompt,
        "\nCAMPAIGN DATA:\n\
         - Platform: {platform}\n\
         - Objective: {objective}\n\
         - Target Audience: {audience}\n\
         - Budget: ${budget}\n\n\
         Please provide:\n\
         1. Enhanced marketing strategy with specific tactics\n\
         2. Creative elements (headline, subheadline, call-to-action)\n\
         3. Emotional appeal strategy\n\
         4. Hook strategy for audience engagement\n\
         5. Key messaging points (exactly three)\n\n\
         Format the response as JSON with the following structure:\n{CAMPAIGN_SHAPE}\n",
        platform = or_unspecified(&brief.platform),
        objective = or_unspecified(&brief.objective),
        audience = or_unspecified(&brief.target_audience),
        budget = brief.budget,
    );
    prompt
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// Image prompt for a campaign visual. Blank brief fields get generic
/// marketing defaults.
#[must_use]
pub fn image_prompt(brief: &ImageBrief) -> String {
    let direction = &brief.creative_elements;
    let platform = or_default(&brief.platform, "social media");
    format!(
        "Create a professional marketing campaign visual for:\n\n\
         Platform: {platform}\n\
         Objective: {objective}\n\
         Headline: {headline}\n\
         Visual Style: {style}\n\
         Tone: {tone}\n\n\
         The image should be:\n\
         - High quality and professional\n\
         - Suitable for {platform} advertising\n\
         - Visually appealing and modern\n\
         - Include space for text overlay\n\
         - Match the {short_style} style\n\n\
         Style: Digital art, marketing design, professional advertising, clean and modern\n",
        objective = or_default(&brief.objective, "brand awareness"),
        headline = or_default(&direction.headline, "Compelling headline"),
        style = or_default(&direction.visual_style, "modern and professional"),
        tone = or_default(&direction.tone_of_voice, "professional and engaging"),
        short_style = or_default(&direction.visual_style, "modern"),
    )
}
