use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use tower::ServiceExt;

use advision_core::{parse_ads, AdCatalog};
use advision_engine::campaign::{IMAGE_NOT_CONFIGURED_NOTE, PLACEHOLDER_IMAGE_URL};
use advision_engine::chat::NOT_CONFIGURED_MESSAGE;
use advision_engine::{Engine, GenerationError, SamplingConfig, TextGenerator};

use super::*;

/// Answers every prompt with the same text.
struct FixedReply(&'static str);

#[async_trait]
impl TextGenerator for FixedReply {
    async fn complete(
        &self,
        _prompt: &str,
        _sampling: &SamplingConfig,
    ) -> Result<String, GenerationError> {
        Ok(self.0.to_string())
    }
}

fn seed_catalog() -> Arc<AdCatalog> {
    let file = parse_ads(include_str!("../../../../config/ads.yaml")).expect("seed catalog");
    Arc::new(AdCatalog::new(file.ads))
}

fn heuristic_app() -> Router {
    build_app(AppState {
        catalog: seed_catalog(),
        engine: Arc::new(Engine::new(None).with_seed(11)),
    })
}

fn app_with_reply(reply: &'static str) -> Router {
    let generator: Arc<dyn TextGenerator> = Arc::new(FixedReply(reply));
    build_app(AppState {
        catalog: seed_catalog(),
        engine: Arc::new(Engine::new(Some(generator)).with_seed(11)),
    })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    read_json(response).await
}

async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

fn ids(json: &serde_json::Value) -> Vec<&str> {
    json["data"]["ads"]
        .as_array()
        .expect("ads array")
        .iter()
        .map(|ad| ad["id"].as_str().expect("id"))
        .collect()
}

// -------------------------------------------------------------------------
// Envelope, health, middleware
// -------------------------------------------------------------------------

#[test]
fn api_error_codes_map_to_statuses() {
    let bad = ApiError::bad_request("req-1", "invalid input").into_response();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    let missing = ApiError::new("req-2", "not_found", "nope").into_response();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let other = ApiError::new("req-3", "internal_error", "boom").into_response();
    assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_is_degraded_without_generation() {
    let (status, json) = get_json(heuristic_app(), "/api/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["data"]["status"], "degraded");
    assert_eq!(json["data"]["generation"], "not_configured");
    assert_eq!(json["data"]["ads"], 20);
    assert!(json["meta"]["request_id"].is_string());
    assert!(json["meta"]["timestamp"].is_string());
}

#[tokio::test]
async fn health_is_ok_with_generation() {
    let (status, json) = get_json(app_with_reply("hi"), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
}

#[tokio::test]
async fn request_id_is_echoed() {
    let response = heuristic_app()
        .oneshot(
            Request::builder()
                .uri("/api/filter-options")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("abc-123")
    );
    let (_, json) = read_json(response).await;
    assert_eq!(json["meta"]["request_id"], "abc-123");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let response = heuristic_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/analyze-ads")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

// -------------------------------------------------------------------------
// Catalog routes
// -------------------------------------------------------------------------

#[tokio::test]
async fn fetch_ads_defaults_to_first_page() {
    let (status, json) = get_json(heuristic_app(), "/api/fetch-ads").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 20);
    assert_eq!(json["data"]["limit"], 12);
    assert_eq!(ids(&json).len(), 12);
    assert_eq!(ids(&json)[0], "ad_001");
}

#[tokio::test]
async fn fetch_ads_searches_case_insensitively() {
    let (_, json) = get_json(heuristic_app(), "/api/fetch-ads?q=FITNESS").await;
    assert_eq!(ids(&json), vec!["ad_006", "ad_007"]);
}

#[tokio::test]
async fn fetch_ads_accepts_comma_separated_business_types() {
    let (_, json) = get_json(heuristic_app(), "/api/fetch-ads?business_type=Travel,Beauty").await;
    assert_eq!(ids(&json), vec!["ad_010", "ad_011", "ad_018", "ad_019"]);
}

#[tokio::test]
async fn fetch_ads_offset_past_end_is_empty() {
    let (status, json) = get_json(heuristic_app(), "/api/fetch-ads?offset=50").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&json).is_empty());
    assert_eq!(json["data"]["total"], 20);
}

#[tokio::test]
async fn fetch_ads_applies_spend_window() {
    let (status, json) = get_json(
        heuristic_app(),
        "/api/fetch-ads?spend_min=10000&spend_max=20000&limit=100",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ids(&json),
        vec!["ad_002", "ad_005", "ad_010", "ad_013", "ad_015", "ad_017", "ad_018", "ad_019"]
    );
    assert_eq!(json["data"]["total"], 8);
}

#[tokio::test]
async fn fetch_ads_combines_spend_and_impression_floors() {
    let (_, json) = get_json(
        heuristic_app(),
        "/api/fetch-ads?spend_min=10000&impressions_min=100000&limit=100",
    )
    .await;
    assert_eq!(json["data"]["total"], 13);
    assert!(!ids(&json).contains(&"ad_001"));

    let (_, json) = get_json(heuristic_app(), "/api/fetch-ads?impressions_max=50000").await;
    assert_eq!(ids(&json), vec!["ad_001", "ad_003"]);
}

#[tokio::test]
async fn fetch_ads_accepts_min_spend_alias() {
    let (_, json) = get_json(heuristic_app(), "/api/fetch-ads?min_spend=30000").await;
    assert_eq!(ids(&json), vec!["ad_014", "ad_016", "ad_020"]);
}

#[tokio::test]
async fn fetch_ads_rejects_malformed_bounds() {
    let (status, json) = get_json(heuristic_app(), "/api/fetch-ads?spend_min=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn filter_options_lists_distinct_values() {
    let (status, json) = get_json(heuristic_app(), "/api/filter-options").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["platforms"],
        serde_json::json!(["Facebook", "Instagram", "LinkedIn"])
    );
    assert_eq!(json["data"]["countries"], serde_json::json!(["US"]));
    assert_eq!(json["data"]["business_types"].as_array().map(Vec::len), Some(12));
}

// -------------------------------------------------------------------------
// Analysis routes
// -------------------------------------------------------------------------

#[tokio::test]
async fn analyze_ads_returns_one_analysis_per_ad() {
    let body = serde_json::json!({
        "ads": [
            { "id": "x1", "ad_creative_body": "Flash sale, limited time only", "business_type": "E-commerce" },
            { "id": "x2", "ad_creative_body": "Join our community" }
        ]
    });
    let (status, json) = post_json(heuristic_app(), "/api/analyze-ads", &body).await;
    assert_eq!(status, StatusCode::OK);

    let analyses = json["data"].as_array().expect("data array");
    assert_eq!(analyses.len(), 2);
    assert_eq!(analyses[0]["ad"]["id"], "x1");
    assert_eq!(
        analyses[0]["marketingStrategy"]["primaryStrategy"],
        "Urgency & Scarcity"
    );
    assert_eq!(analyses[1]["marketingStrategy"]["primaryStrategy"], "Social Proof");
}

#[tokio::test]
async fn analyze_ads_rejects_empty_and_missing_payloads() {
    let (status, json) =
        post_json(heuristic_app(), "/api/analyze-ads", &serde_json::json!({ "ads": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "no ads provided");

    let response = heuristic_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze-ads")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let (status, json) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn generate_insights_aggregates_posted_analyses() {
    let ads = serde_json::json!({
        "ads": [
            { "id": "x1", "ad_creative_body": "Limited offer" },
            { "id": "x2", "ad_creative_body": "Sale ends soon" }
        ]
    });
    let (_, analyzed) = post_json(heuristic_app(), "/api/analyze-ads", &ads).await;

    let body = serde_json::json!({ "analysis": analyzed["data"] });
    let (status, json) = post_json(heuristic_app(), "/api/generate-insights", &body).await;
    assert_eq!(status, StatusCode::OK);

    let strengths = json["data"]["competitiveAnalysis"]["strengths"]
        .as_array()
        .expect("strengths");
    assert_eq!(strengths.len(), 3);
    assert!(strengths[0]
        .as_str()
        .expect("string")
        .contains("Urgency & Scarcity"));
}

#[tokio::test]
async fn generate_insights_rejects_empty_batch() {
    let (status, json) = post_json(
        heuristic_app(),
        "/api/generate-insights",
        &serde_json::json!({ "analysis": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "no analyses provided");
}

#[tokio::test]
async fn campaign_strategy_requires_campaign_data() {
    let (status, _) = post_json(
        heuristic_app(),
        "/api/generate-campaign-strategy",
        &serde_json::json!({ "insights": {} }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn campaign_strategy_falls_back_without_generation() {
    let body = serde_json::json!({
        "insights": { "partial": true },
        "campaignData": { "platform": "LinkedIn", "objective": "Leads", "budget": 2500 }
    });
    let (status, json) = post_json(heuristic_app(), "/api/generate-campaign-strategy", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["creativeElements"]["headline"],
        "Transform Your Experience on LinkedIn Today"
    );
    assert_eq!(
        json["data"]["marketingStrategy"]["keyMessages"]
            .as_array()
            .map(Vec::len),
        Some(3)
    );
}

#[tokio::test]
async fn campaign_image_requires_campaign() {
    let (status, json) = post_json(
        heuristic_app(),
        "/api/generate-campaign-image",
        &serde_json::json!({ "insights": {} }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "missing campaign");
}

#[tokio::test]
async fn campaign_image_without_image_service_is_placeholder() {
    let body = serde_json::json!({
        "campaign": {
            "platform": "Pinterest",
            "objective": "Brand awareness",
            "creativeElements": { "headline": "Spring Edit", "visualStyle": "pastel flat lay" }
        }
    });
    let (status, json) = post_json(heuristic_app(), "/api/generate-campaign-image", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["imageUrl"], PLACEHOLDER_IMAGE_URL);
    assert_eq!(json["data"]["note"], IMAGE_NOT_CONFIGURED_NOTE);
    let prompt = json["data"]["prompt"].as_str().expect("prompt");
    assert!(prompt.contains("Platform: Pinterest"));
    assert!(prompt.contains("Headline: Spring Edit"));
    assert!(prompt.contains("Match the pastel flat lay style"));
}

#[tokio::test]
async fn campaign_image_accepts_campaign_data_key() {
    let body = serde_json::json!({ "campaignData": { "platform": "Snapchat" } });
    let (status, json) = post_json(heuristic_app(), "/api/generate-campaign-image", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"]["prompt"]
        .as_str()
        .expect("prompt")
        .contains("Suitable for Snapchat advertising"));
}

// -------------------------------------------------------------------------
// Chat
// -------------------------------------------------------------------------

#[tokio::test]
async fn chat_requires_a_question() {
    let (status, json) = post_json(
        heuristic_app(),
        "/api/chat",
        &serde_json::json!({ "question": "   " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "missing question");
}

#[tokio::test]
async fn chat_without_generation_returns_fixed_message() {
    let (status, json) = post_json(
        heuristic_app(),
        "/api/chat",
        &serde_json::json!({ "question": "How should I spend $5k?" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["answer"], NOT_CONFIGURED_MESSAGE);
}

#[tokio::test]
async fn chat_returns_generated_answer() {
    let body = serde_json::json!({
        "question": "Which platform first?",
        "conversation_history": [
            { "role": "user", "content": "I run a bakery" },
            { "role": "assistant", "content": "Great, tell me more" }
        ],
        "user_context": { "businessType": "Bakery", "goals": ["foot traffic"] }
    });
    let (status, json) = post_json(app_with_reply("Start with Instagram."), "/api/chat", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["answer"], "Start with Instagram.");
}
