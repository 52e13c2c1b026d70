use crate::error::ScanError;
use crate::types::scoring::ScoreWeights;
use serde::Deserialize;
use std::collections::HashMap;

pub const WEIGHT_KEYS: [&str; 6] = [
    "profile_completeness",
    "data_quality",
    "visual_content",
    "infrastructure",
    "academic_information",
    "fee_completeness",
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanConfig {
    pub weights: Option<HashMap<String, f64>>,
    pub store: Option<StoreConfig>,
    pub review: Option<ReviewConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    ".profile-scan/scans.jsonl".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    #[serde(default = "default_profile_base_url")]
    pub profile_base_url: String,
    #[serde(default = "default_submit_base_url")]
    pub submit_base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            profile_base_url: default_profile_base_url(),
            submit_base_url: default_submit_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_profile_base_url() -> String {
    "https://ezyschooling.com/school/".to_string()
}

fn default_submit_base_url() -> String {
    "https://api.horizon-dev.ezyschooling.com/api/v1/analatics/".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl ScanConfig {
    pub fn weights(&self) -> ScoreWeights {
        let defaults = ScoreWeights::default();
        match &self.weights {
            Some(weights) => {
                let pick = |key: &str, fallback: f64| *weights.get(key).unwrap_or(&fallback);
                ScoreWeights {
                    profile_completeness: pick(
                        "profile_completeness",
                        defaults.profile_completeness,
                    ),
                    data_quality: pick("data_quality", defaults.data_quality),
                    visual_content: pick("visual_content", defaults.visual_content),
                    infrastructure: pick("infrastructure", defaults.infrastructure),
                    academic_information: pick(
                        "academic_information",
                        defaults.academic_information,
                    ),
                    fee_completeness: pick("fee_completeness", defaults.fee_completeness),
                }
            }
            None => defaults,
        }
    }

    pub fn store_path(&self) -> String {
        self.store
            .as_ref()
            .map(|store| store.path.clone())
            .unwrap_or_else(default_store_path)
    }

    pub fn review(&self) -> ReviewConfig {
        self.review.clone().unwrap_or_default()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        if let Some(weights) = &self.weights {
            let unknown = weights
                .keys()
                .filter(|key| !WEIGHT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(ScanError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights().as_array();
        if weights.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(ScanError::ConfigParse(
                "weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum: f64 = weights.iter().sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(ScanError::ConfigParse(format!(
                "weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        if let Some(store) = &self.store {
            if store.path.trim().is_empty() {
                return Err(ScanError::ConfigParse(
                    "store.path must not be empty".to_string(),
                ));
            }
        }

        if let Some(review) = &self.review {
            if review.model.trim().is_empty() {
                return Err(ScanError::ConfigParse(
                    "review.model must not be empty".to_string(),
                ));
            }
            if review.api_key_env.trim().is_empty() {
                return Err(ScanError::ConfigParse(
                    "review.api_key_env must name an environment variable".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: ScanConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.weights(), ScoreWeights::default());
        assert_eq!(cfg.store_path(), ".profile-scan/scans.jsonl");
        assert_eq!(cfg.review().model, "gemini-1.5-flash");
        assert!(cfg.log_level().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[weights]
profile_completeness = 0.25
data_quality = 0.20
visual_content = 0.20
infrastructure = 0.15
academic_information = 0.10
fee_completeness = 0.10

[store]
path = "data/scans.jsonl"

[review]
model = "gemini-1.5-pro"

[logging]
level = "debug"
"#;
        let cfg: ScanConfig = toml::from_str(toml_str).expect("full config should parse");
        let weights = cfg.weights();
        assert_eq!(weights.profile_completeness, 0.25);
        assert_eq!(weights.academic_information, 0.10);
        assert_eq!(cfg.store_path(), "data/scans.jsonl");
        assert_eq!(cfg.review().model, "gemini-1.5-pro");
        assert_eq!(cfg.review().api_key_env, "GEMINI_API_KEY");
        assert_eq!(cfg.log_level(), Some("debug"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_weights_fall_back_per_key() {
        let toml_str = r#"
[weights]
visual_content = 0.15
"#;
        let cfg: ScanConfig = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(cfg.weights(), ScoreWeights::default());
    }

    #[test]
    fn validate_rejects_invalid_weight_sum() {
        let toml_str = r#"
[weights]
profile_completeness = 0.9
data_quality = 0.9
"#;
        let cfg: ScanConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("must sum to 1.0"));
    }

    #[test]
    fn validate_rejects_unknown_weight_keys() {
        let toml_str = r#"
[weights]
admission = 0.05
"#;
        let cfg: ScanConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unknown key"));
        assert!(err.to_string().contains("admission"));
    }

    #[test]
    fn validate_rejects_out_of_range_weight() {
        let toml_str = r#"
[weights]
profile_completeness = 1.2
data_quality = -0.2
"#;
        let cfg: ScanConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("between 0.0 and 1.0"));
    }

    #[test]
    fn validate_rejects_empty_store_path() {
        let toml_str = r#"
[store]
path = "  "
"#;
        let cfg: ScanConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("store.path"));
    }

    #[test]
    fn validate_rejects_empty_model() {
        let toml_str = r#"
[review]
model = ""
"#;
        let cfg: ScanConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("review.model"));
    }
}
