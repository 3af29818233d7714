//! YAML configuration loading.
//!
//! All tunables live in a single YAML file; every section and field is
//! optional and falls back to its default.
//!
//! ```yaml
//! planner:
//!   enable_lookahead: true
//!   confidence_threshold: 0.25
//!   max_fallback_places: 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnveshaError, Result};
use crate::planning::PlannerConfig;

/// Full anvesha-plan configuration loaded from YAML.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnveshaConfig {
    /// Planner settings
    #[serde(default)]
    pub planner: PlannerSection,
}

impl AnveshaConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/config.yaml),
    /// falling back to defaults when the file does not exist.
    pub fn load_default() -> Result<Self> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| AnveshaError::Config(e.to_string()))
    }
}

/// Planner configuration section.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Enable conformal filtering and expected-cost lookahead
    #[serde(default = "default_enable_lookahead")]
    pub enable_lookahead: bool,

    /// Confidence threshold for the conformal prediction set
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,

    /// Maximum viewpoints returned by fallback place selection
    #[serde(default = "default_max_fallback_places")]
    pub max_fallback_places: usize,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            enable_lookahead: default_enable_lookahead(),
            confidence_threshold: default_confidence_threshold(),
            max_fallback_places: default_max_fallback_places(),
        }
    }
}

impl PlannerSection {
    /// Convert to the in-memory planner configuration.
    pub fn to_planner_config(&self) -> PlannerConfig {
        PlannerConfig::new()
            .with_lookahead(self.enable_lookahead)
            .with_confidence_threshold(self.confidence_threshold)
            .with_max_fallback_places(self.max_fallback_places)
    }
}

fn default_enable_lookahead() -> bool {
    true
}
fn default_confidence_threshold() -> f32 {
    0.25
}
fn default_max_fallback_places() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnveshaConfig::default();
        assert!(config.planner.enable_lookahead);
        assert!((config.planner.confidence_threshold - 0.25).abs() < 1e-6);
        assert_eq!(config.planner.max_fallback_places, 5);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
planner:
  confidence_threshold: 0.4
"#;
        let config = AnveshaConfig::from_yaml(yaml).unwrap();
        assert!((config.planner.confidence_threshold - 0.4).abs() < 1e-6);
        assert!(config.planner.enable_lookahead);
        assert_eq!(config.planner.max_fallback_places, 5);
    }

    #[test]
    fn test_empty_yaml() {
        let config = AnveshaConfig::from_yaml("{}").unwrap();
        assert!(config.planner.enable_lookahead);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let result = AnveshaConfig::from_yaml("planner: [not, a, map]");
        assert!(matches!(result, Err(AnveshaError::Config(_))));
    }

    #[test]
    fn test_roundtrip() {
        let config = AnveshaConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = AnveshaConfig::from_yaml(&yaml).unwrap();
        assert_eq!(
            parsed.planner.enable_lookahead,
            config.planner.enable_lookahead
        );
    }

    #[test]
    fn test_to_planner_config() {
        let section = PlannerSection {
            enable_lookahead: false,
            confidence_threshold: 0.3,
            max_fallback_places: 2,
        };
        let planner = section.to_planner_config();
        assert!(!planner.enable_lookahead);
        assert_eq!(planner.effective_threshold(), 0.0);
        assert_eq!(planner.max_fallback_places, 2);
    }
}
