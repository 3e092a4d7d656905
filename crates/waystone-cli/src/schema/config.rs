use serde::{Deserialize, Serialize};
use waystone_evaluator::{
    decision::CraftPrefixPolicy, evaluator::WaystoneEvaluator, scoring::ScoringWeights,
};

const DEFAULT_BANNED_MODIFIERS: &str = "unwavering, penetration";

/// User-facing highlight settings.
///
/// Every field is optional in the JSON file; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub weights: ScoringWeights,
    /// Comma-separated, case-insensitive modifier texts
    pub banned_modifiers: String,
    pub craft_prefix_policy: CraftPrefixPolicy,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            banned_modifiers: DEFAULT_BANNED_MODIFIERS.to_owned(),
            craft_prefix_policy: CraftPrefixPolicy::default(),
        }
    }
}

impl HighlightConfig {
    pub fn build_evaluator(&self) -> WaystoneEvaluator {
        WaystoneEvaluator::new(
            self.weights.clone(),
            self.craft_prefix_policy,
            &self.banned_modifiers,
        )
    }
}
