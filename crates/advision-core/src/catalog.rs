//! Read-only, in-memory Record Store.
//!
//! The catalog is built once at startup and shared by reference (`Arc`) across
//! request handlers. Nothing mutates it after construction, so no locking is
//! required.

use std::collections::BTreeSet;
use std::path::Path;

use crate::ads::{load_ads, AdRecord};
use crate::ConfigError;

/// Categorical fields that expose their distinct values for filter UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdField {
    BusinessType,
    Category,
    Country,
    AdType,
    Platform,
}

impl AdField {
    fn value(self, ad: &AdRecord) -> &str {
        match self {
            AdField::BusinessType => &ad.business_type,
            AdField::Category => &ad.category,
            AdField::Country => &ad.country,
            AdField::AdType => &ad.ad_type,
            AdField::Platform => &ad.platform,
        }
    }
}

/// Filter and pagination parameters for [`AdCatalog::filter`].
///
/// Empty categorical lists impose no restriction. Numeric bounds are
/// inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdFilter {
    pub search_query: String,
    pub countries: Vec<String>,
    pub business_types: Vec<String>,
    pub categories: Vec<String>,
    pub min_spend: u64,
    pub max_spend: u64,
    pub min_impressions: u64,
    pub max_impressions: u64,
    pub limit: usize,
    pub offset: usize,
}

impl Default for AdFilter {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            countries: Vec::new(),
            business_types: Vec::new(),
            categories: Vec::new(),
            min_spend: 0,
            max_spend: 100_000,
            min_impressions: 0,
            max_impressions: 1_000_000,
            limit: 12,
            offset: 0,
        }
    }
}

impl AdFilter {
    fn matches(&self, ad: &AdRecord, needle: &str) -> bool {
        let text_match = needle.is_empty()
            || [
                &ad.ad_creative_body,
                &ad.business_type,
                &ad.category,
                &ad.target_audience,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(needle));

        text_match
            && member_of(&self.countries, &ad.country)
            && member_of(&self.business_types, &ad.business_type)
            && member_of(&self.categories, &ad.category)
            && (self.min_spend..=self.max_spend).contains(&ad.spend)
            && (self.min_impressions..=self.max_impressions).contains(&ad.impressions)
    }
}

fn member_of(allowed: &[String], value: &str) -> bool {
    allowed.is_empty() || allowed.iter().any(|a| a == value)
}

#[derive(Debug, Clone, Default)]
pub struct AdCatalog {
    ads: Vec<AdRecord>,
}

impl AdCatalog {
    #[must_use]
    pub fn new(ads: Vec<AdRecord>) -> Self {
        Self { ads }
    }

    /// Load the catalog from a YAML file on disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or validated.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(load_ads(path)?.ads))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ads.is_empty()
    }

    /// Return matching ads in catalog order, then apply `offset`/`limit`.
    ///
    /// An offset past the last match yields an empty vector.
    #[must_use]
    pub fn filter(&self, filter: &AdFilter) -> Vec<&AdRecord> {
        let needle = filter.search_query.to_lowercase();
        self.ads
            .iter()
            .filter(|ad| filter.matches(ad, &needle))
            .skip(filter.offset)
            .take(filter.limit)
            .collect()
    }

    /// Number of matches ignoring `offset` and `limit`.
    #[must_use]
    pub fn count(&self, filter: &AdFilter) -> usize {
        let needle = filter.search_query.to_lowercase();
        self.ads
            .iter()
            .filter(|ad| filter.matches(ad, &needle))
            .count()
    }

    /// Sorted, de-duplicated values of one categorical field.
    #[must_use]
    pub fn distinct_values(&self, field: AdField) -> Vec<String> {
        self.ads
            .iter()
            .map(|ad| field.value(ad))
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
