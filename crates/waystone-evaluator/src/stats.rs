//! Aggregated waystone statistics.

use serde::{Deserialize, Serialize};

/// Numeric statistic a modifier can feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatTarget {
    ItemQuantity,
    ItemRarity,
    PackSize,
    MagicPackSize,
    ExtraEffectiveness,
    ExtraMagicPack,
    ExtraRarePack,
    AdditionalPacks,
}

impl StatTarget {
    pub const ALL: [Self; 8] = [
        Self::ItemQuantity,
        Self::ItemRarity,
        Self::PackSize,
        Self::MagicPackSize,
        Self::ExtraEffectiveness,
        Self::ExtraMagicPack,
        Self::ExtraRarePack,
        Self::AdditionalPacks,
    ];
}

/// Statistics of one item, folded from all of its modifiers.
///
/// Every field starts at zero (or `false`) and only grows while modifiers are added:
/// negative values are ignored and flags are never cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedStats {
    pub item_quantity: i32,
    pub item_rarity_bonus: i32,
    pub pack_size_increase: i32,
    pub magic_pack_size_increase: i32,
    pub extra_effectiveness_percent: i32,
    pub extra_magic_pack_percent: i32,
    pub extra_rare_pack_percent: i32,
    pub additional_packs: i32,
    pub has_extra_rare_monster_modifier: bool,
    pub has_banned_modifier: bool,
}

impl AggregatedStats {
    #[must_use]
    pub const fn get(&self, target: StatTarget) -> i32 {
        match target {
            StatTarget::ItemQuantity => self.item_quantity,
            StatTarget::ItemRarity => self.item_rarity_bonus,
            StatTarget::PackSize => self.pack_size_increase,
            StatTarget::MagicPackSize => self.magic_pack_size_increase,
            StatTarget::ExtraEffectiveness => self.extra_effectiveness_percent,
            StatTarget::ExtraMagicPack => self.extra_magic_pack_percent,
            StatTarget::ExtraRarePack => self.extra_rare_pack_percent,
            StatTarget::AdditionalPacks => self.additional_packs,
        }
    }

    const fn get_mut(&mut self, target: StatTarget) -> &mut i32 {
        match target {
            StatTarget::ItemQuantity => &mut self.item_quantity,
            StatTarget::ItemRarity => &mut self.item_rarity_bonus,
            StatTarget::PackSize => &mut self.pack_size_increase,
            StatTarget::MagicPackSize => &mut self.magic_pack_size_increase,
            StatTarget::ExtraEffectiveness => &mut self.extra_effectiveness_percent,
            StatTarget::ExtraMagicPack => &mut self.extra_magic_pack_percent,
            StatTarget::ExtraRarePack => &mut self.extra_rare_pack_percent,
            StatTarget::AdditionalPacks => &mut self.additional_packs,
        }
    }

    /// Adds `value` to the statistic selected by `target`.
    pub fn add(&mut self, target: StatTarget, value: i32) {
        let field = self.get_mut(target);
        *field = field.saturating_add(value.max(0));
    }

    pub const fn mark_extra_rare_monster_modifier(&mut self) {
        self.has_extra_rare_monster_modifier = true;
    }

    pub const fn mark_banned(&mut self) {
        self.has_banned_modifier = true;
    }

    /// Folds another partial result into this one.
    pub fn absorb(&mut self, other: &Self) {
        for target in StatTarget::ALL {
            self.add(target, other.get(target));
        }
        self.has_extra_rare_monster_modifier |= other.has_extra_rare_monster_modifier;
        self.has_banned_modifier |= other.has_banned_modifier;
    }

    /// Returns `true` if nothing has been contributed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
