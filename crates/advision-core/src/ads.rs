use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One advertising-creative catalog entry.
///
/// Every field except `id` is optional on input and defaults to empty/zero,
/// so ads posted back by clients deserialize even when partially populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdRecord {
    pub id: String,
    pub ad_creative_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_snapshot_url: Option<String>,
    pub spend: u64,
    pub impressions: u64,
    pub country: String,
    pub business_type: String,
    pub category: String,
    pub platform: String,
    pub ad_type: String,
    pub target_audience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct AdsFile {
    pub ads: Vec<AdRecord>,
}

/// Load and validate the ad catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_ads(path: &Path) -> Result<AdsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_ads(&content)
}

/// Parse and validate catalog YAML that is already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_ads(content: &str) -> Result<AdsFile, ConfigError> {
    let ads_file: AdsFile = serde_yaml::from_str(content).map_err(ConfigError::CatalogFileParse)?;
    validate_ads(&ads_file)?;
    Ok(ads_file)
}

fn validate_ads(ads_file: &AdsFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for ad in &ads_file.ads {
        if ad.id.trim().is_empty() {
            return Err(ConfigError::Validation("ad id must be non-empty".to_string()));
        }

        if !seen_ids.insert(ad.id.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate ad id: '{}'",
                ad.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ads_reads_all_fields() {
        let yaml = r#"
ads:
  - id: ad_001
    ad_creative_body: "Flash sale 50% off, limited time only"
    ad_snapshot_url: https://example.com/a.jpg
    spend: 2500
    impressions: 45000
    country: US
    business_type: E-commerce
    category: Fashion & Apparel
    platform: Facebook
    ad_type: Promotional
    target_audience: Sports enthusiasts, 18-35
    created_date: 2024-08-15
"#;
        let file = parse_ads(yaml).unwrap();
        assert_eq!(file.ads.len(), 1);
        let ad = &file.ads[0];
        assert_eq!(ad.id, "ad_001");
        assert_eq!(ad.spend, 2500);
        assert_eq!(ad.impressions, 45000);
        assert_eq!(ad.business_type, "E-commerce");
        assert_eq!(
            ad.created_date,
            NaiveDate::from_ymd_opt(2024, 8, 15)
        );
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let file = parse_ads("ads:\n  - id: bare\n").unwrap();
        let ad = &file.ads[0];
        assert_eq!(ad.ad_creative_body, "");
        assert_eq!(ad.spend, 0);
        assert!(ad.created_date.is_none());
        assert!(ad.ad_snapshot_url.is_none());
    }

    #[test]
    fn validate_rejects_empty_id() {
        let err = parse_ads("ads:\n  - id: \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("ad id must be non-empty"));
    }

    #[test]
    fn validate_rejects_duplicate_ids_case_insensitively() {
        let err = parse_ads("ads:\n  - id: AD_1\n  - id: ad_1\n").unwrap_err();
        assert!(err.to_string().contains("duplicate ad id"));
    }

    #[test]
    fn parse_rejects_malformed_yaml() {
        let err = parse_ads("ads: [").unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileParse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_ads(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
    }

    #[test]
    fn shipped_seed_catalog_is_valid() {
        let file = parse_ads(include_str!("../../../config/ads.yaml")).unwrap();
        assert_eq!(file.ads.len(), 20);
    }

    #[test]
    fn ad_record_json_omits_absent_optionals() {
        let ad = AdRecord {
            id: "x".to_string(),
            ..AdRecord::default()
        };
        let json = serde_json::to_string(&ad).unwrap();
        assert!(!json.contains("created_date"));
        assert!(!json.contains("ad_snapshot_url"));
    }
}
