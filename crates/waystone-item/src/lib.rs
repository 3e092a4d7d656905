//! Item data model for waystone evaluation.
//!
//! Values of these types are built fresh from the host's item data on every refresh,
//! handed to `waystone-evaluator`, and dropped after the pass. Nothing here is mutated
//! after construction.
//!
//! - [`RawModifier`] - one affix, implicit, or enchant line as reported by the host
//! - [`ItemSnapshot`] - one waystone with its tier, rarity, corruption flag and modifiers
//! - [`AffixCounts`] - prefix/suffix counts, either supplied by the host or derived

pub use self::{affix::*, item::*, modifier::*};

pub mod affix;
pub mod item;
pub mod modifier;
