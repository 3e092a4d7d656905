//! Scoring and highlight classification for waystones.
//!
//! This crate turns the modifiers of a waystone into a highlight decision. It is a pure,
//! synchronous function of its inputs: the host hands over freshly built
//! [`ItemSnapshot`](waystone_item::ItemSnapshot)s on every refresh and draws whatever
//! comes back.
//!
//! # Pipeline
//!
//! ```text
//! RawModifier ──► modifier_source (classify one modifier)
//!             └─► banned          (display text vs denylist)
//!                      ↓
//!                 aggregator      (fold into AggregatedStats)
//!                      ↓
//!                 scoring         (weighted sum → i64)
//!                      ↓
//!                 decision        (None / Banned / Craft / CraftAboveRare / Run)
//! ```
//!
//! [`evaluator::WaystoneEvaluator`] wires these together for a batch of items and keeps
//! the banned modifier list, which can be reloaded at any time without disturbing a pass
//! that is already running.
//!
//! # Example
//!
//! ```
//! use waystone_evaluator::{
//!     decision::{Classification, CraftPrefixPolicy},
//!     evaluator::WaystoneEvaluator,
//!     scoring::ScoringWeights,
//! };
//! use waystone_item::{AffixCounts, ItemLocation, ItemSnapshot, Rarity, RawModifier};
//!
//! let weights = ScoringWeights {
//!     score_per_quantity: 8,
//!     score_per_rarity: 2,
//!     minimum_craft_score_above_rare: 50,
//!     ..ScoringWeights::default()
//! };
//! let evaluator = WaystoneEvaluator::new(weights, CraftPrefixPolicy::default(), "unwavering");
//!
//! let item = ItemSnapshot::new(
//!     10,
//!     Rarity::Rare,
//!     false,
//!     ItemLocation::Inventory,
//!     vec![RawModifier::new("MapDroppedItemQuantityIncrease", "Bountiful", vec![10, 5])],
//!     Some(AffixCounts::new(2, 0)),
//! );
//!
//! let result = evaluator.evaluate(&item);
//! assert_eq!(result.score, 90);
//! assert_eq!(result.classification, Classification::CraftAboveRare);
//! ```

pub mod aggregator;
pub mod banned;
pub mod decision;
pub mod evaluator;
pub mod modifier_source;
pub mod scoring;
pub mod stats;
