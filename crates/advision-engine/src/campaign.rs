//! Fixed campaign strategy and placeholder visual used when the generation
//! services cannot help.

use advision_core::schema::{CreativeElements, StrategyPlan};
use advision_core::{CampaignBrief, CampaignImage, CampaignStrategy};

pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/1024/1024?random=1";
pub const IMAGE_NOT_CONFIGURED_NOTE: &str =
    "This is a placeholder image. Set OPENAI_API_KEY to generate campaign visuals.";
pub const IMAGE_FAILED_NOTE: &str =
    "Image generation failed. This is a placeholder image; try again later.";

fn non_empty<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// Template strategy parameterized by the brief's platform and objective.
#[must_use]
pub fn fallback_campaign_strategy(brief: &CampaignBrief) -> CampaignStrategy {
    let platform = non_empty(&brief.platform, "your channels");
    let objective = non_empty(&brief.objective, "growth").to_lowercase();

    CampaignStrategy {
        marketing_strategy: StrategyPlan {
            primary_strategy: format!(
                "Focus on a unique value proposition and emotional storytelling on {platform} \
                 to drive {objective}"
            ),
            key_messages: [
                "Differentiate from competitors with innovative messaging".to_string(),
                "Leverage emotional appeal for deeper connections".to_string(),
                "Implement data-driven optimization strategies".to_string(),
            ],
            emotional_appeal:
                "Create an emotional journey from problem awareness to solution satisfaction"
                    .to_string(),
            hook_strategy: "Use curiosity-driven hooks with social proof elements".to_string(),
        },
        creative_elements: CreativeElements {
            headline: format!("Transform Your Experience on {platform} Today"),
            subheadline: "Discover the innovative approach that's changing everything".to_string(),
            call_to_action: "Get Started Now - Limited Time Offer".to_string(),
        },
    }
}

/// Placeholder visual that still reports the prompt it would have used.
#[must_use]
pub fn placeholder_campaign_image(prompt: String, note: &str) -> CampaignImage {
    CampaignImage {
        image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        prompt,
        note: Some(note.to_string()),
    }
}
