use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use advision_core::{AdField, AdFilter, AdRecord};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

const MAX_LIMIT: usize = 100;

/// `country`, `business_type` and `category` accept comma-separated lists.
/// Numeric bounds use the `spend_min` / `impressions_max` key style; the
/// `min_spend` style is accepted as an alias.
#[derive(Debug, Default, Deserialize)]
pub(super) struct FetchAdsQuery {
    pub q: Option<String>,
    pub country: Option<String>,
    pub business_type: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "min_spend")]
    pub spend_min: Option<u64>,
    #[serde(alias = "max_spend")]
    pub spend_max: Option<u64>,
    #[serde(alias = "min_impressions")]
    pub impressions_min: Option<u64>,
    #[serde(alias = "max_impressions")]
    pub impressions_max: Option<u64>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl FetchAdsQuery {
    fn into_filter(self) -> AdFilter {
        let defaults = AdFilter::default();
        AdFilter {
            search_query: self.q.unwrap_or_default(),
            countries: split_list(self.country.as_deref()),
            business_types: split_list(self.business_type.as_deref()),
            categories: split_list(self.category.as_deref()),
            min_spend: self.spend_min.unwrap_or(defaults.min_spend),
            max_spend: self.spend_max.unwrap_or(defaults.max_spend),
            min_impressions: self.impressions_min.unwrap_or(defaults.min_impressions),
            max_impressions: self.impressions_max.unwrap_or(defaults.max_impressions),
            limit: self.limit.unwrap_or(defaults.limit).clamp(1, MAX_LIMIT),
            offset: self.offset.unwrap_or(defaults.offset),
        }
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub(super) struct AdPage {
    ads: Vec<AdRecord>,
    total: usize,
    limit: usize,
    offset: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct FilterOptions {
    countries: Vec<String>,
    business_types: Vec<String>,
    categories: Vec<String>,
    ad_types: Vec<String>,
    platforms: Vec<String>,
}

pub(super) async fn fetch_ads(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<FetchAdsQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<AdPage>>, ApiError> {
    let Query(query) =
        query.map_err(|e| ApiError::bad_request(req_id.0.clone(), e.body_text()))?;
    let filter = query.into_filter();

    let ads: Vec<AdRecord> = state
        .catalog
        .filter(&filter)
        .into_iter()
        .cloned()
        .collect();
    let page = AdPage {
        total: state.catalog.count(&filter),
        limit: filter.limit,
        offset: filter.offset,
        ads,
    };
    tracing::debug!(returned = page.ads.len(), total = page.total, "fetched ads");

    Ok(ApiResponse::new(req_id, page))
}

pub(super) async fn filter_options(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<FilterOptions>> {
    let catalog = &state.catalog;
    ApiResponse::new(
        req_id,
        FilterOptions {
            countries: catalog.distinct_values(AdField::Country),
            business_types: catalog.distinct_values(AdField::BusinessType),
            categories: catalog.distinct_values(AdField::Category),
            ad_types: catalog.distinct_values(AdField::AdType),
            platforms: catalog.distinct_values(AdField::Platform),
        },
    )
}
