//! Highlight classification.
//!
//! [`classify`] applies these rules in order; the first one that holds decides:
//!
//! 1. tier below `minimum_tier` → [`Classification::None`] (item is not evaluated)
//! 2. any banned modifier → [`Classification::Banned`]
//! 3. rare, uncorrupted, fewer than [`MAX_CRAFTABLE_PREFIXES`] prefixes and
//!    `score >= minimum_craft_score_above_rare` → [`Classification::CraftAboveRare`]
//! 4. not rare, uncorrupted and `score >= minimum_craft_score` →
//!    [`Classification::Craft`] (the prefix cap applies here too under
//!    [`CraftPrefixPolicy::AllRarities`])
//! 5. `score >= minimum_run_score` → [`Classification::Run`]
//! 6. otherwise [`Classification::None`]
//!
//! Banned always wins over score, and rare items are held to their own craft threshold.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use waystone_item::ItemSnapshot;

use crate::{scoring::ScoringWeights, stats::AggregatedStats};

/// Items with this many prefixes or more have no room left to craft.
pub const MAX_CRAFTABLE_PREFIXES: u32 = 3;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    None,
    Banned,
    Craft,
    CraftAboveRare,
    Run,
}

impl Classification {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Banned,
        Self::Craft,
        Self::CraftAboveRare,
        Self::Run,
    ];
}

/// Which craft branches require a free prefix slot.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum CraftPrefixPolicy {
    /// Only rare items need a free prefix to be worth crafting.
    #[default]
    RareOnly,
    /// Every craft candidate needs a free prefix.
    AllRarities,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown craft prefix policy '{input}' (expected rare_only or all_rarities)")]
pub struct ParseCraftPrefixPolicyError {
    input: String,
}

impl FromStr for CraftPrefixPolicy {
    type Err = ParseCraftPrefixPolicyError;

    /// Accepts the config spelling (`all_rarities`) as well as `AllRarities`,
    /// `all-rarities` and other case variants.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "rareonly" => Ok(Self::RareOnly),
            "allrarities" => Ok(Self::AllRarities),
            _ => Err(ParseCraftPrefixPolicyError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Classifies one evaluated item.
#[must_use]
pub fn classify(
    snapshot: &ItemSnapshot,
    stats: &AggregatedStats,
    score: i64,
    weights: &ScoringWeights,
    policy: CraftPrefixPolicy,
) -> Classification {
    if snapshot.tier() < weights.minimum_tier {
        return Classification::None;
    }
    if stats.has_banned_modifier {
        return Classification::Banned;
    }

    let craftable = !snapshot.is_corrupted();
    let has_free_prefix = snapshot.prefix_count() < MAX_CRAFTABLE_PREFIXES;

    if snapshot.rarity().is_rare() {
        if craftable && has_free_prefix && score >= i64::from(weights.minimum_craft_score_above_rare)
        {
            return Classification::CraftAboveRare;
        }
    } else {
        let prefix_ok = match policy {
            CraftPrefixPolicy::RareOnly => true,
            CraftPrefixPolicy::AllRarities => has_free_prefix,
        };
        if craftable && prefix_ok && score >= i64::from(weights.minimum_craft_score) {
            return Classification::Craft;
        }
    }

    if score >= i64::from(weights.minimum_run_score) {
        Classification::Run
    } else {
        Classification::None
    }
}
