use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};
use serde::Deserialize;

use advision_core::{
    AdAnalysis, AdRecord, CampaignBrief, CampaignImage, CampaignStrategy, ImageBrief,
    InsightsReport,
};

use crate::middleware::RequestId;

use super::{map_engine_error, require_json, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeAdsRequest {
    #[serde(default)]
    ads: Vec<AdRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct InsightsRequest {
    #[serde(default)]
    analysis: Vec<AdAnalysis>,
}

/// `insights` is taken as loose JSON: a partial or stale report is ignored
/// rather than rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CampaignRequest {
    #[serde(default)]
    insights: Option<serde_json::Value>,
    campaign_data: Option<CampaignBrief>,
}

/// Accepts the brief under `campaign` or `campaignData`.
#[derive(Debug, Deserialize)]
pub(super) struct CampaignImageRequest {
    #[serde(alias = "campaignData")]
    campaign: Option<ImageBrief>,
}

pub(super) async fn analyze_ads(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<AnalyzeAdsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<AdAnalysis>>>, ApiError> {
    let request = require_json(&req_id, body)?;
    let analyses = state
        .engine
        .analyze_batch(&request.ads)
        .await
        .map_err(|e| map_engine_error(req_id.0.clone(), &e))?;

    Ok(ApiResponse::new(req_id, analyses))
}

pub(super) async fn generate_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<InsightsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<InsightsReport>>, ApiError> {
    let request = require_json(&req_id, body)?;
    let report = state
        .engine
        .aggregate_insights(&request.analysis)
        .await
        .map_err(|e| map_engine_error(req_id.0.clone(), &e))?;

    Ok(ApiResponse::new(req_id, report))
}

pub(super) async fn generate_campaign_strategy(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<CampaignRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CampaignStrategy>>, ApiError> {
    let request = require_json(&req_id, body)?;
    let Some(brief) = request.campaign_data else {
        return Err(ApiError::bad_request(req_id.0, "missing campaignData"));
    };

    let insights = request
        .insights
        .and_then(|value| match serde_json::from_value::<InsightsReport>(value) {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unusable insights payload");
                None
            }
        });

    let strategy = state
        .engine
        .campaign_strategy(insights.as_ref(), &brief)
        .await;
    Ok(ApiResponse::new(req_id, strategy))
}

pub(super) async fn generate_campaign_image(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<CampaignImageRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CampaignImage>>, ApiError> {
    let request = require_json(&req_id, body)?;
    let Some(brief) = request.campaign else {
        return Err(ApiError::bad_request(req_id.0, "missing campaign"));
    };

    let image = state.engine.campaign_image(&brief).await;
    Ok(ApiResponse::new(req_id, image))
}
