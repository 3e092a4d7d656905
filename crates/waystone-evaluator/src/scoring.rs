//! Score calculation: turning aggregated statistics into a single integer.
//!
//! The score is a linear combination of the aggregated statistics:
//!
//! ```text
//! score = Σ(statᵢ × wᵢ) + (has_extra_rare_monster_modifier ? w_rare_mod : 0)
//! ```
//!
//! Where `statᵢ` ranges over the eight numeric fields of [`AggregatedStats`] and `wᵢ` is
//! the matching per-unit weight in [`ScoringWeights`]. There is no clamping or rounding;
//! with non-negative weights the score is non-negative.
//!
//! # Usage
//!
//! ```
//! use waystone_evaluator::{scoring::ScoringWeights, stats::AggregatedStats};
//!
//! let weights = ScoringWeights {
//!     score_per_quantity: 8,
//!     score_per_rarity: 2,
//!     ..ScoringWeights::zero()
//! };
//! let stats = AggregatedStats {
//!     item_quantity: 10,
//!     item_rarity_bonus: 5,
//!     ..AggregatedStats::default()
//! };
//! assert_eq!(weights.score(&stats), 90);
//! ```

use serde::{Deserialize, Serialize};

use crate::stats::{AggregatedStats, StatTarget};

/// Per-unit weights and classification thresholds.
///
/// All values are independent; zero weights and zero thresholds are valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub score_per_quantity: i32,
    pub score_per_rarity: i32,
    pub score_per_pack_size: i32,
    pub score_per_magic_pack_size: i32,
    pub score_per_extra_packs_percent: i32,
    pub score_per_extra_magic_pack: i32,
    pub score_per_extra_rare_pack: i32,
    pub score_per_additional_pack: i32,
    pub score_for_extra_rare_monster_modifier: i32,

    pub minimum_tier: i32,
    pub minimum_craft_score: i32,
    pub minimum_craft_score_above_rare: i32,
    pub minimum_run_score: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            score_per_quantity: 4,
            score_per_rarity: 1,
            score_per_pack_size: 2,
            score_per_magic_pack_size: 1,
            score_per_extra_packs_percent: 1,
            score_per_extra_magic_pack: 1,
            score_per_extra_rare_pack: 2,
            score_per_additional_pack: 1,
            score_for_extra_rare_monster_modifier: 40,
            minimum_tier: 1,
            minimum_craft_score: 20,
            minimum_craft_score_above_rare: 50,
            minimum_run_score: 100,
        }
    }
}

impl ScoringWeights {
    /// All weights and thresholds set to zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            score_per_quantity: 0,
            score_per_rarity: 0,
            score_per_pack_size: 0,
            score_per_magic_pack_size: 0,
            score_per_extra_packs_percent: 0,
            score_per_extra_magic_pack: 0,
            score_per_extra_rare_pack: 0,
            score_per_additional_pack: 0,
            score_for_extra_rare_monster_modifier: 0,
            minimum_tier: 0,
            minimum_craft_score: 0,
            minimum_craft_score_above_rare: 0,
            minimum_run_score: 0,
        }
    }

    #[must_use]
    pub const fn weight(&self, target: StatTarget) -> i32 {
        match target {
            StatTarget::ItemQuantity => self.score_per_quantity,
            StatTarget::ItemRarity => self.score_per_rarity,
            StatTarget::PackSize => self.score_per_pack_size,
            StatTarget::MagicPackSize => self.score_per_magic_pack_size,
            StatTarget::ExtraEffectiveness => self.score_per_extra_packs_percent,
            StatTarget::ExtraMagicPack => self.score_per_extra_magic_pack,
            StatTarget::ExtraRarePack => self.score_per_extra_rare_pack,
            StatTarget::AdditionalPacks => self.score_per_additional_pack,
        }
    }

    /// Computes the score of `stats`.
    #[must_use]
    pub fn score(&self, stats: &AggregatedStats) -> i64 {
        let linear = StatTarget::ALL
            .iter()
            .map(|&target| i64::from(stats.get(target)) * i64::from(self.weight(target)))
            .sum::<i64>();
        let bonus = if stats.has_extra_rare_monster_modifier {
            i64::from(self.score_for_extra_rare_monster_modifier)
        } else {
            0
        };
        linear + bonus
    }
}
