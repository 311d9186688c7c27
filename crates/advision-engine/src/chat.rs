//! Context-aware chat prompt assembly.

use serde::{Deserialize, Serialize};

/// Most recent turns carried into the prompt.
pub const HISTORY_WINDOW: usize = 6;

/// Returned when no generation credential is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "The AdVision assistant is not configured. Set \
     GEMINI_APIKEY in the server environment to enable chat answers.";

/// Returned when the generation service fails or replies with nothing usable.
pub const UNAVAILABLE_MESSAGE: &str = "Sorry, the AdVision assistant is temporarily \
     unavailable. Please try again in a moment.";

const SYSTEM_PROMPT: &str = "You are AdVision AI, a professional Marketing, Advertising, and \
Campaign Product Manager expert. You specialize in:

**Core Expertise:**
- Digital marketing strategy and campaign planning
- Social media advertising (Meta, Google, TikTok, LinkedIn)
- Performance marketing and ROI optimization
- Brand strategy and positioning
- Marketing analytics and data-driven insights
- Creative campaign development
- Customer acquisition and retention strategies

**Communication Style:**
- Professional yet approachable
- Data-driven with practical insights
- Ask clarifying questions to understand context
- Provide actionable recommendations

**Response Guidelines:**
- Keep responses concise but comprehensive
- Focus only on marketing, advertising, and campaign management topics
- Politely redirect non-marketing questions to marketing subjects
- Use bullet points and structured responses for complex topics
- Include specific metrics, benchmarks, or industry standards when relevant

**Context Management:**
- Remember the user's business type, industry, budget, and goals
- Reference previous conversation context when appropriate
- Build on previous recommendations and insights";

/// Structured facts the user has shared about their business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserContext {
    pub business_type: Option<String>,
    pub industry: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub goals: Vec<String>,
}

impl UserContext {
    fn lines(&self) -> Vec<String> {
        let labelled = [
            ("Business Type", &self.business_type),
            ("Industry", &self.industry),
            ("Budget", &self.budget),
            ("Timeline", &self.timeline),
        ];

        let mut lines: Vec<String> = labelled
            .into_iter()
            .filter_map(|(label, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{label}: {v}"))
            })
            .collect();

        let goals: Vec<&str> = self
            .goals
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .collect();
        if !goals.is_empty() {
            lines.push(format!("Goals: {}", goals.join(", ")));
        }
        lines
    }
}

/// One prior exchange in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl ChatTurn {
    fn speaker(&self) -> &'static str {
        if self.role == "user" {
            "User"
        } else {
            "AdVision AI"
        }
    }
}

/// Full chat prompt: system prompt, user context, the last
/// [`HISTORY_WINDOW`] turns, then the question.
#[must_use]
pub fn build_chat_prompt(
    question: &str,
    context: Option<&UserContext>,
    history: &[ChatTurn],
) -> String {
    let mut prompt = String::from(SYSTEM_PROMPT);

    let context_lines = context.map(UserContext::lines).unwrap_or_default();
    if !context_lines.is_empty() {
        prompt.push_str("\n\n**User Context:**\n");
        let block: Vec<String> = context_lines.iter().map(|l| format!("- {l}")).collect();
        prompt.push_str(&block.join("\n"));
    }

    if !history.is_empty() {
        prompt.push_str("\n\n**Previous Conversation:**\n");
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        for turn in &history[start..] {
            prompt.push_str(turn.speaker());
            prompt.push_str(": ");
            prompt.push_str(&turn.content);
            prompt.push('\n');
        }
    }

    prompt.push_str("\n\nUser: ");
    prompt.push_str(question);
    prompt.push_str("\n\nAdVision AI:");
    prompt
}
