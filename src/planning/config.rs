//! Planner configuration.

/// Configuration for room-visit planning.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Enable conformal filtering and expected-cost lookahead.
    ///
    /// When disabled the filter threshold drops to 0.0 and the
    /// single-direction hint is forced false, matching the behavior of the
    /// baseline planner this mode replaces.
    /// Default: true
    pub enable_lookahead: bool,

    /// Confidence threshold for the conformal prediction set.
    /// Only applied while lookahead is enabled.
    /// Default: 0.25
    pub confidence_threshold: f32,

    /// Maximum viewpoints returned by fallback place selection.
    /// Default: 5
    pub max_fallback_places: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            enable_lookahead: true,
            confidence_threshold: 0.25,
            max_fallback_places: 5,
        }
    }
}

impl PlannerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the lookahead toggle.
    pub fn with_lookahead(mut self, enable: bool) -> Self {
        self.enable_lookahead = enable;
        self
    }

    /// Builder-style setter for the confidence threshold.
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Builder-style setter for the fallback place limit.
    pub fn with_max_fallback_places(mut self, max: usize) -> Self {
        self.max_fallback_places = max;
        self
    }

    /// The threshold actually applied by the conformal filter.
    ///
    /// 0.0 disables filtering entirely when lookahead is off.
    pub fn effective_threshold(&self) -> f32 {
        if self.enable_lookahead {
            self.confidence_threshold
        } else {
            0.0
        }
    }
}
