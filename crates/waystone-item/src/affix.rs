use serde::{Deserialize, Serialize};

use crate::RawModifier;

/// Number of prefixes and suffixes rolled on an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixCounts {
    pub prefixes: u32,
    pub suffixes: u32,
}

impl AffixCounts {
    #[must_use]
    pub const fn new(prefixes: u32, suffixes: u32) -> Self {
        Self { prefixes, suffixes }
    }

    /// Counts affixes from a listing the host has already split into prefixes and suffixes.
    ///
    /// The delirium stack modifier can show up among the prefixes; it is not counted.
    #[must_use]
    pub fn from_split(prefixes: &[RawModifier], suffixes: &[RawModifier]) -> Self {
        Self {
            prefixes: count(prefixes.iter().filter(|m| !m.is_delirium_stack())),
            suffixes: count(suffixes.iter()),
        }
    }

    /// Derives affix counts from display text alone.
    ///
    /// A modifier is a suffix when [`RawModifier::reads_as_suffix`] holds, otherwise a
    /// prefix, except for the delirium stack modifier which is neither.
    #[must_use]
    pub fn from_display_text(modifiers: &[RawModifier]) -> Self {
        let mut counts = Self::default();
        for modifier in modifiers {
            if modifier.reads_as_suffix() {
                counts.suffixes += 1;
            } else if !modifier.is_delirium_stack() {
                counts.prefixes += 1;
            }
        }
        counts
    }
}

fn count<'a, I>(modifiers: I) -> u32
where
    I: Iterator<Item = &'a RawModifier>,
{
    u32::try_from(modifiers.count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DELIRIUM_STACK_GROUP;

    fn modifier(display_text: &str) -> RawModifier {
        RawModifier::new("Test", display_text, vec![1])
    }

    #[test]
    fn test_from_display_text() {
        let modifiers = vec![
            modifier("Bountiful"),
            modifier("of Penetration"),
            modifier("Populated"),
            modifier("Of the Swarm"),
            modifier("Delirious").with_group(DELIRIUM_STACK_GROUP),
        ];
        let counts = AffixCounts::from_display_text(&modifiers);
        assert_eq!(counts, AffixCounts::new(2, 2));
    }

    #[test]
    fn test_from_display_text_empty() {
        assert_eq!(AffixCounts::from_display_text(&[]), AffixCounts::default());
    }

    #[test]
    fn test_from_split_ignores_delirium_stack() {
        let prefixes = vec![
            modifier("Bountiful"),
            modifier("Delirious").with_group(DELIRIUM_STACK_GROUP),
        ];
        let suffixes = vec![modifier("of Penetration")];
        assert_eq!(
            AffixCounts::from_split(&prefixes, &suffixes),
            AffixCounts::new(1, 1)
        );
    }

    #[test]
    fn test_from_split_trusts_listing_over_text() {
        // "of"-named modifier listed as a prefix stays a prefix
        let prefixes = vec![modifier("of Odd Naming")];
        assert_eq!(AffixCounts::from_split(&prefixes, &[]), AffixCounts::new(1, 0));
    }
}
