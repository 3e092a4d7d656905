//! Evaluation passes over a batch of waystones.
//!
//! A [`WaystoneEvaluator`] owns the scoring configuration and the current banned
//! modifier list. Each call to [`WaystoneEvaluator::evaluate_all`] is one pass: it takes
//! the banned list once, then runs every snapshot through
//! aggregation → scoring → classification and returns one [`ItemEvaluation`] per item,
//! in input order. Nothing is cached between passes.

use std::sync::Arc;

use serde::Serialize;
use waystone_item::{ItemLocation, ItemSnapshot};

use crate::{
    aggregator,
    banned::{BannedModifierList, SharedBannedModifiers},
    decision::{self, Classification, CraftPrefixPolicy},
    scoring::ScoringWeights,
    stats::AggregatedStats,
};

/// Result for one item, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemEvaluation {
    pub classification: Classification,
    pub stats: AggregatedStats,
    pub prefix_count: u32,
    pub suffix_count: u32,
    pub score: i64,
    pub location: ItemLocation,
    pub below_minimum_tier: bool,
}

impl ItemEvaluation {
    fn excluded(snapshot: &ItemSnapshot) -> Self {
        Self {
            classification: Classification::None,
            stats: AggregatedStats::default(),
            prefix_count: snapshot.prefix_count(),
            suffix_count: snapshot.suffix_count(),
            score: 0,
            location: snapshot.location(),
            below_minimum_tier: true,
        }
    }

    /// Items below the minimum tier get neither a border nor labels.
    #[must_use]
    pub const fn should_render(&self) -> bool {
        !self.below_minimum_tier
    }
}

/// Per-classification counts for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    pub total: usize,
    pub below_minimum_tier: usize,
    pub none: usize,
    pub banned: usize,
    pub craft: usize,
    pub craft_above_rare: usize,
    pub run: usize,
}

impl PassSummary {
    #[must_use]
    pub fn from_evaluations(evaluations: &[ItemEvaluation]) -> Self {
        let mut summary = Self::default();
        for evaluation in evaluations {
            summary.record(evaluation);
        }
        summary
    }

    pub fn record(&mut self, evaluation: &ItemEvaluation) {
        self.total += 1;
        if evaluation.below_minimum_tier {
            self.below_minimum_tier += 1;
        }
        *self.count_mut(evaluation.classification) += 1;
    }

    #[must_use]
    pub const fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::None => self.none,
            Classification::Banned => self.banned,
            Classification::Craft => self.craft,
            Classification::CraftAboveRare => self.craft_above_rare,
            Classification::Run => self.run,
        }
    }

    const fn count_mut(&mut self, classification: Classification) -> &mut usize {
        match classification {
            Classification::None => &mut self.none,
            Classification::Banned => &mut self.banned,
            Classification::Craft => &mut self.craft,
            Classification::CraftAboveRare => &mut self.craft_above_rare,
            Classification::Run => &mut self.run,
        }
    }
}

#[derive(Debug)]
pub struct WaystoneEvaluator {
    weights: ScoringWeights,
    policy: CraftPrefixPolicy,
    banned: SharedBannedModifiers,
}

impl WaystoneEvaluator {
    /// Creates an evaluator, parsing `banned_modifiers` once up front.
    #[must_use]
    pub fn new(weights: ScoringWeights, policy: CraftPrefixPolicy, banned_modifiers: &str) -> Self {
        let banned = SharedBannedModifiers::new(banned_modifiers);
        tracing::debug!(
            entries = banned.load().len(),
            %policy,
            "created waystone evaluator"
        );
        Self {
            weights,
            policy,
            banned,
        }
    }

    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    #[must_use]
    pub const fn policy(&self) -> CraftPrefixPolicy {
        self.policy
    }

    #[must_use]
    pub fn banned_modifiers(&self) -> Arc<BannedModifierList> {
        self.banned.load()
    }

    /// Replaces the banned modifier list. Passes already running keep the old one.
    pub fn reload_banned_modifiers(&self, raw: &str) -> Arc<BannedModifierList> {
        self.banned.reload(raw)
    }

    #[must_use]
    pub fn evaluate(&self, snapshot: &ItemSnapshot) -> ItemEvaluation {
        self.evaluate_with(snapshot, &self.banned.load())
    }

    #[must_use]
    pub fn evaluate_all(&self, snapshots: &[ItemSnapshot]) -> Vec<ItemEvaluation> {
        let banned = self.banned.load();
        let evaluations = snapshots
            .iter()
            .map(|snapshot| self.evaluate_with(snapshot, &banned))
            .collect::<Vec<_>>();

        let summary = PassSummary::from_evaluations(&evaluations);
        tracing::info!(
            total = summary.total,
            below_minimum_tier = summary.below_minimum_tier,
            banned = summary.banned,
            craft = summary.craft,
            craft_above_rare = summary.craft_above_rare,
            run = summary.run,
            "evaluation pass complete"
        );
        evaluations
    }

    fn evaluate_with(&self, snapshot: &ItemSnapshot, banned: &BannedModifierList) -> ItemEvaluation {
        if snapshot.tier() < self.weights.minimum_tier {
            tracing::trace!(tier = snapshot.tier(), "skipping waystone below minimum tier");
            return ItemEvaluation::excluded(snapshot);
        }

        let stats = aggregator::aggregate(snapshot, banned);
        let score = self.weights.score(&stats);
        let classification = decision::classify(snapshot, &stats, score, &self.weights, self.policy);
        tracing::debug!(
            tier = snapshot.tier(),
            rarity = %snapshot.rarity(),
            score,
            %classification,
            "evaluated waystone"
        );

        ItemEvaluation {
            classification,
            stats,
            prefix_count: snapshot.prefix_count(),
            suffix_count: snapshot.suffix_count(),
            score,
            location: snapshot.location(),
            below_minimum_tier: false,
        }
    }
}
