use serde::{Deserialize, Serialize};

use crate::{AffixCounts, RawModifier};

/// Rarity of an item.
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
    derive_more::FromStr,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Normal,
    Magic,
    Rare,
    Unique,
}

/// Where an item was found.
///
/// Only affects whether the host draws labels; never the score.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemLocation {
    #[default]
    Inventory,
    Stash,
}

/// A waystone as seen during one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSnapshot {
    tier: i32,
    rarity: Rarity,
    is_corrupted: bool,
    location: ItemLocation,
    affixes: AffixCounts,
    modifiers: Vec<RawModifier>,
}

impl ItemSnapshot {
    /// Creates a snapshot.
    ///
    /// When `affixes` is `None` the counts are derived with
    /// [`AffixCounts::from_display_text`].
    #[must_use]
    pub fn new(
        tier: i32,
        rarity: Rarity,
        is_corrupted: bool,
        location: ItemLocation,
        modifiers: Vec<RawModifier>,
        affixes: Option<AffixCounts>,
    ) -> Self {
        let affixes = affixes.unwrap_or_else(|| AffixCounts::from_display_text(&modifiers));
        Self {
            tier,
            rarity,
            is_corrupted,
            location,
            affixes,
            modifiers,
        }
    }

    /// Creates a snapshot from a prefix/suffix listing.
    ///
    /// `others` holds implicits and enchants that belong to neither list. All three
    /// lists contribute to the item's modifiers, in that order.
    #[must_use]
    pub fn from_split(
        tier: i32,
        rarity: Rarity,
        is_corrupted: bool,
        location: ItemLocation,
        prefixes: Vec<RawModifier>,
        suffixes: Vec<RawModifier>,
        others: Vec<RawModifier>,
    ) -> Self {
        let affixes = AffixCounts::from_split(&prefixes, &suffixes);
        let mut modifiers = prefixes;
        modifiers.extend(suffixes);
        modifiers.extend(others);
        Self::new(
            tier,
            rarity,
            is_corrupted,
            location,
            modifiers,
            Some(affixes),
        )
    }

    #[must_use]
    pub const fn tier(&self) -> i32 {
        self.tier
    }

    #[must_use]
    pub const fn rarity(&self) -> Rarity {
        self.rarity
    }

    #[must_use]
    pub const fn is_corrupted(&self) -> bool {
        self.is_corrupted
    }

    #[must_use]
    pub const fn location(&self) -> ItemLocation {
        self.location
    }

    #[must_use]
    pub const fn affixes(&self) -> AffixCounts {
        self.affixes
    }

    #[must_use]
    pub const fn prefix_count(&self) -> u32 {
        self.affixes.prefixes
    }

    #[must_use]
    pub const fn suffix_count(&self) -> u32 {
        self.affixes.suffixes
    }

    #[must_use]
    pub fn modifiers(&self) -> &[RawModifier] {
        &self.modifiers
    }
}
