//! Modifier classification.
//!
//! The host reports modifiers in one of two shapes, depending on which game-data schema
//! it was built against:
//!
//! - **By identifier** - only the modifier's stable name is known, and the meaning of each
//!   entry in `values` is implied by that name ([`IDENTIFIER_RULES`]).
//! - **By stat key** - each value comes with the low-level stat it touches, and the stat
//!   keys are matched by case-insensitive substring ([`STAT_KEY_RULES`]).
//!
//! [`ModifierSource::resolve`] picks the shape once per modifier and
//! [`ModifierSource::contribution`] turns it into a partial [`AggregatedStats`].
//! Anything not recognized contributes nothing.

use waystone_item::RawModifier;

use crate::stats::{AggregatedStats, StatTarget};

/// How a rule matches a modifier identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierPattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl IdentifierPattern {
    #[must_use]
    pub fn matches(self, identifier: &str) -> bool {
        match self {
            Self::Exact(name) => identifier == name,
            Self::Prefix(prefix) => identifier.starts_with(prefix),
        }
    }
}

/// What a recognized modifier adds to the item's statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierEffect {
    /// `values[0]` feeds `primary`; `values[1]`, if present, feeds `secondary`.
    Stat {
        primary: StatTarget,
        secondary: Option<StatTarget>,
    },
    /// Rare monsters get an extra modifier.
    ExtraRareMonsterModifier,
}

impl ModifierEffect {
    const fn single(target: StatTarget) -> Self {
        Self::Stat {
            primary: target,
            secondary: None,
        }
    }

    const fn hybrid(primary: StatTarget, secondary: StatTarget) -> Self {
        Self::Stat {
            primary,
            secondary: Some(secondary),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IdentifierRule {
    pub pattern: IdentifierPattern,
    pub effect: ModifierEffect,
}

/// Recognized modifier identifiers, checked in order.
pub const IDENTIFIER_RULES: &[IdentifierRule] = &[
    IdentifierRule {
        pattern: IdentifierPattern::Exact("MapDroppedItemRarityIncrease"),
        effect: ModifierEffect::single(StatTarget::ItemRarity),
    },
    IdentifierRule {
        pattern: IdentifierPattern::Exact("MapDroppedItemQuantityIncrease"),
        effect: ModifierEffect::hybrid(StatTarget::ItemQuantity, StatTarget::ItemRarity),
    },
    IdentifierRule {
        pattern: IdentifierPattern::Exact("MapRareMonstersAdditionalModifier"),
        effect: ModifierEffect::ExtraRareMonsterModifier,
    },
    IdentifierRule {
        pattern: IdentifierPattern::Exact("MapPackSizeIncrease"),
        effect: ModifierEffect::single(StatTarget::PackSize),
    },
    IdentifierRule {
        pattern: IdentifierPattern::Exact("MapMagicPackSizeIncrease"),
        effect: ModifierEffect::single(StatTarget::MagicPackSize),
    },
    IdentifierRule {
        pattern: IdentifierPattern::Exact("MapTotalEffectivenessIncrease"),
        effect: ModifierEffect::single(StatTarget::ExtraEffectiveness),
    },
    IdentifierRule {
        pattern: IdentifierPattern::Exact("MapMagicPackIncrease"),
        effect: ModifierEffect::single(StatTarget::ExtraMagicPack),
    },
    IdentifierRule {
        pattern: IdentifierPattern::Exact("MapMagicRarePackIncrease"),
        effect: ModifierEffect::hybrid(StatTarget::ExtraRarePack, StatTarget::ExtraMagicPack),
    },
    IdentifierRule {
        pattern: IdentifierPattern::Exact("MapRarePackIncrease"),
        effect: ModifierEffect::single(StatTarget::ExtraRarePack),
    },
    IdentifierRule {
        pattern: IdentifierPattern::Prefix("MapMonsterAdditionalPacks"),
        effect: ModifierEffect::single(StatTarget::AdditionalPacks),
    },
];

/// Recognized stat key fragments (lower-case), checked in order.
///
/// Only the first matching fragment applies to a key.
pub const STAT_KEY_RULES: &[(&str, ModifierEffect)] = &[
    (
        "map_item_drop_quantity",
        ModifierEffect::single(StatTarget::ItemQuantity),
    ),
    (
        "map_item_drop_rarity",
        ModifierEffect::single(StatTarget::ItemRarity),
    ),
    (
        "map_number_of_rare_packs",
        ModifierEffect::single(StatTarget::ExtraRarePack),
    ),
    (
        "map_rare_monsters_additional_modifier",
        ModifierEffect::ExtraRareMonsterModifier,
    ),
    (
        "map_pack_size",
        ModifierEffect::single(StatTarget::PackSize),
    ),
    (
        "map_number_of_magic_packs",
        ModifierEffect::single(StatTarget::ExtraMagicPack),
    ),
    (
        "map_total_effectiveness",
        ModifierEffect::single(StatTarget::ExtraEffectiveness),
    ),
    (
        "map_monster_additional_packs",
        ModifierEffect::single(StatTarget::AdditionalPacks),
    ),
];

/// A modifier viewed through the lookup strategy that fits its shape.
#[derive(Debug, Clone, Copy)]
pub enum ModifierSource<'a> {
    ByIdentifier(&'a RawModifier),
    ByStatKey(&'a RawModifier),
}

impl<'a> ModifierSource<'a> {
    /// Uses stat keys when the modifier carries any, the identifier otherwise.
    #[must_use]
    pub fn resolve(modifier: &'a RawModifier) -> Self {
        if modifier.has_stat_keys() {
            Self::ByStatKey(modifier)
        } else {
            Self::ByIdentifier(modifier)
        }
    }

    #[must_use]
    pub fn contribution(self) -> AggregatedStats {
        let mut stats = AggregatedStats::default();
        match self {
            Self::ByIdentifier(modifier) => {
                if let Some(rule) = IDENTIFIER_RULES
                    .iter()
                    .find(|rule| rule.pattern.matches(&modifier.identifier))
                {
                    apply_identifier_effect(&mut stats, rule.effect, modifier);
                }
            }
            Self::ByStatKey(modifier) => {
                for (key, value) in modifier.stat_pairs() {
                    if let Some(effect) = stat_key_effect(key) {
                        apply_stat_key_effect(&mut stats, effect, value);
                    }
                }
            }
        }
        stats
    }
}

/// Classifies one modifier into its partial contribution.
#[must_use]
pub fn classify_modifier(modifier: &RawModifier) -> AggregatedStats {
    ModifierSource::resolve(modifier).contribution()
}

#[must_use]
pub fn stat_key_effect(key: &str) -> Option<ModifierEffect> {
    let key = key.to_ascii_lowercase();
    STAT_KEY_RULES
        .iter()
        .find(|(fragment, _)| key.contains(fragment))
        .map(|(_, effect)| *effect)
}

fn apply_identifier_effect(
    stats: &mut AggregatedStats,
    effect: ModifierEffect,
    modifier: &RawModifier,
) {
    match effect {
        ModifierEffect::Stat { primary, secondary } => {
            if let Some(value) = modifier.try_value(0) {
                stats.add(primary, value);
            }
            if let (Some(target), Some(value)) = (secondary, modifier.try_value(1)) {
                stats.add(target, value);
            }
        }
        // the identifier alone grants the modifier
        ModifierEffect::ExtraRareMonsterModifier => stats.mark_extra_rare_monster_modifier(),
    }
}

fn apply_stat_key_effect(stats: &mut AggregatedStats, effect: ModifierEffect, value: i32) {
    match effect {
        ModifierEffect::Stat { primary, .. } => stats.add(primary, value),
        ModifierEffect::ExtraRareMonsterModifier => {
            if value > 0 {
                stats.mark_extra_rare_monster_modifier();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_identifier(identifier: &str, values: Vec<i32>) -> AggregatedStats {
        classify_modifier(&RawModifier::new(identifier, "", values))
    }

    fn by_stat_keys(keys: &[&str], values: Vec<i32>) -> AggregatedStats {
        classify_modifier(&RawModifier::new("Unused", "", values).with_stat_keys(keys.iter().copied()))
    }

    #[test]
    fn test_hybrid_quantity_rarity() {
        let stats = by_identifier("MapDroppedItemQuantityIncrease", vec![8, 2]);
        assert_eq!(stats.item_quantity, 8);
        assert_eq!(stats.item_rarity_bonus, 2);
    }

    #[test]
    fn test_hybrid_with_single_value() {
        let stats = by_identifier("MapDroppedItemQuantityIncrease", vec![8]);
        assert_eq!(stats.item_quantity, 8);
        assert_eq!(stats.item_rarity_bonus, 0);
    }

    #[test]
    fn test_hybrid_rare_magic_pack() {
        let stats = by_identifier("MapMagicRarePackIncrease", vec![15, 25]);
        assert_eq!(stats.extra_rare_pack_percent, 15);
        assert_eq!(stats.extra_magic_pack_percent, 25);
    }

    #[test]
    fn test_additional_packs_prefix_family() {
        let stats = by_identifier("MapMonsterAdditionalPacksTier3", vec![3]);
        assert_eq!(stats.additional_packs, 3);
        let stats = by_identifier("MapMonsterAdditionalPacks", vec![1]);
        assert_eq!(stats.additional_packs, 1);
    }

    #[test]
    fn test_single_identifiers() {
        let cases = [
            ("MapDroppedItemRarityIncrease", StatTarget::ItemRarity),
            ("MapPackSizeIncrease", StatTarget::PackSize),
            ("MapMagicPackSizeIncrease", StatTarget::MagicPackSize),
            ("MapTotalEffectivenessIncrease", StatTarget::ExtraEffectiveness),
            ("MapMagicPackIncrease", StatTarget::ExtraMagicPack),
            ("MapRarePackIncrease", StatTarget::ExtraRarePack),
        ];
        for (identifier, target) in cases {
            let stats = by_identifier(identifier, vec![7]);
            assert_eq!(stats.get(target), 7, "{identifier}");
            let total = StatTarget::ALL.iter().map(|t| stats.get(*t)).sum::<i32>();
            assert_eq!(total, 7, "{identifier} fed more than one stat");
        }
    }

    #[test]
    fn test_extra_rare_monster_modifier_by_identifier() {
        let stats = by_identifier("MapRareMonstersAdditionalModifier", vec![]);
        assert!(stats.has_extra_rare_monster_modifier);
    }

    #[test]
    fn test_missing_values_contribute_nothing() {
        assert!(by_identifier("MapPackSizeIncrease", vec![]).is_empty());
        assert!(by_identifier("MapMonsterAdditionalPacksTier1", vec![]).is_empty());
    }

    #[test]
    fn test_unknown_identifier_contributes_nothing() {
        assert!(by_identifier("MapMonsterDamageIncrease", vec![40]).is_empty());
        assert!(by_identifier("", vec![40]).is_empty());
    }

    #[test]
    fn test_stat_keys_position_aligned() {
        let stats = by_stat_keys(
            &["map_item_drop_quantity_+%", "map_item_drop_rarity_+%"],
            vec![12, 30],
        );
        assert_eq!(stats.item_quantity, 12);
        assert_eq!(stats.item_rarity_bonus, 30);
    }

    #[test]
    fn test_stat_keys_case_insensitive() {
        let stats = by_stat_keys(&["MAP_PACK_SIZE_+%"], vec![20]);
        assert_eq!(stats.pack_size_increase, 20);
    }

    #[test]
    fn test_stat_keys_cover_all_fragments() {
        let stats = by_stat_keys(
            &[
                "map_number_of_rare_packs_+%",
                "map_number_of_magic_packs_+%",
                "map_total_effectiveness_+%",
                "map_monster_additional_packs_count",
            ],
            vec![10, 20, 30, 2],
        );
        assert_eq!(stats.extra_rare_pack_percent, 10);
        assert_eq!(stats.extra_magic_pack_percent, 20);
        assert_eq!(stats.extra_effectiveness_percent, 30);
        assert_eq!(stats.additional_packs, 2);
    }

    #[test]
    fn test_stat_key_rare_monster_flag_needs_positive_value() {
        let stats = by_stat_keys(&["map_rare_monsters_additional_modifier"], vec![1]);
        assert!(stats.has_extra_rare_monster_modifier);
        let stats = by_stat_keys(&["map_rare_monsters_additional_modifier"], vec![0]);
        assert!(!stats.has_extra_rare_monster_modifier);
    }

    #[test]
    fn test_stat_keys_short_values() {
        let stats = by_stat_keys(
            &["map_item_drop_quantity_+%", "map_item_drop_rarity_+%"],
            vec![9],
        );
        assert_eq!(stats.item_quantity, 9);
        assert_eq!(stats.item_rarity_bonus, 0);
    }

    #[test]
    fn test_stat_keys_take_precedence_over_identifier() {
        let modifier = RawModifier::new("MapPackSizeIncrease", "", vec![5])
            .with_stat_keys(["map_item_drop_rarity_+%"]);
        let stats = classify_modifier(&modifier);
        assert_eq!(stats.pack_size_increase, 0);
        assert_eq!(stats.item_rarity_bonus, 5);
    }

    #[test]
    fn test_unknown_stat_key_contributes_nothing() {
        assert!(by_stat_keys(&["map_monster_damage_+%"], vec![40]).is_empty());
    }

    #[test]
    fn test_degenerate_values_never_panic() {
        let stats = by_identifier("MapDroppedItemRarityIncrease", vec![-20]);
        assert!(stats.is_empty());
        let stats = by_identifier("MapMagicRarePackIncrease", vec![]);
        assert!(stats.is_empty());
        let stats = by_identifier("MapMagicRarePackIncrease", vec![4]);
        assert_eq!(stats.extra_rare_pack_percent, 4);
        assert_eq!(stats.extra_magic_pack_percent, 0);
    }

    #[test]
    fn test_resolve_picks_shape() {
        let plain = RawModifier::new("MapPackSizeIncrease", "", vec![5]);
        assert!(matches!(
            ModifierSource::resolve(&plain),
            ModifierSource::ByIdentifier(_)
        ));
        let keyed = plain.clone().with_stat_keys(["map_pack_size_+%"]);
        assert!(matches!(
            ModifierSource::resolve(&keyed),
            ModifierSource::ByStatKey(_)
        ));
    }
}
