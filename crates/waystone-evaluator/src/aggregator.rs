//! Folding an item's modifiers into [`AggregatedStats`].

use waystone_item::{ItemSnapshot, RawModifier};

use crate::{banned::BannedModifierList, modifier_source::classify_modifier, stats::AggregatedStats};

/// Aggregates all modifiers of `snapshot`.
///
/// Prefix and suffix counts are not part of the result; they are read from the
/// snapshot directly.
#[must_use]
pub fn aggregate(snapshot: &ItemSnapshot, banned: &BannedModifierList) -> AggregatedStats {
    aggregate_modifiers(snapshot.modifiers(), banned)
}

/// Aggregates a list of modifiers.
///
/// Contributions are summed, so the result does not depend on modifier order.
#[must_use]
pub fn aggregate_modifiers(modifiers: &[RawModifier], banned: &BannedModifierList) -> AggregatedStats {
    let mut stats = AggregatedStats::default();
    for modifier in modifiers {
        if !stats.has_banned_modifier && banned.is_banned(&modifier.display_text) {
            stats.mark_banned();
        }
        stats.absorb(&classify_modifier(modifier));
    }
    stats
}
