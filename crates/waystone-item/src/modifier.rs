use serde::{Deserialize, Serialize};

/// Group tag carried by the delirium stack modifier.
///
/// Modifiers in this group are neither prefixes nor suffixes.
pub const DELIRIUM_STACK_GROUP: &str = "AfflictionMapDeliriumStacks";

/// A single modifier line on an item.
///
/// `values` holds one integer per effect the modifier grants. When `stat_keys` is
/// non-empty the two sequences are aligned by position; otherwise the meaning of each
/// slot is implied by `identifier`. Either sequence may be shorter than expected;
/// [`RawModifier::try_value`] and [`RawModifier::stat_pairs`] only yield slots that exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawModifier {
    pub identifier: String,
    #[serde(default)]
    pub display_text: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub stat_keys: Vec<String>,
    #[serde(default)]
    pub values: Vec<i32>,
}

impl RawModifier {
    #[must_use]
    pub fn new<I, D>(identifier: I, display_text: D, values: Vec<i32>) -> Self
    where
        I: Into<String>,
        D: Into<String>,
    {
        Self {
            identifier: identifier.into(),
            display_text: display_text.into(),
            group: None,
            stat_keys: vec![],
            values,
        }
    }

    #[must_use]
    pub fn with_group<G>(mut self, group: G) -> Self
    where
        G: Into<String>,
    {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_stat_keys<K, S>(mut self, stat_keys: K) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stat_keys = stat_keys.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the value in `slot` only if the modifier actually carries it.
    #[must_use]
    pub fn try_value(&self, slot: usize) -> Option<i32> {
        self.values.get(slot).copied()
    }

    #[must_use]
    pub fn has_stat_keys(&self) -> bool {
        !self.stat_keys.is_empty()
    }

    /// Position-aligned `(stat_key, value)` pairs.
    ///
    /// Keys without a matching value are dropped.
    pub fn stat_pairs(&self) -> impl Iterator<Item = (&str, i32)> {
        self.stat_keys
            .iter()
            .zip(&self.values)
            .map(|(key, value)| (key.as_str(), *value))
    }

    #[must_use]
    pub fn is_delirium_stack(&self) -> bool {
        self.group.as_deref() == Some(DELIRIUM_STACK_GROUP)
    }

    /// Legacy suffix test: suffix display names start with the word "of".
    ///
    /// This misfires on prefixes whose name happens to start with "of", which is why
    /// it is only used when the host cannot tell prefixes and suffixes apart.
    #[must_use]
    pub fn reads_as_suffix(&self) -> bool {
        self.display_text
            .get(..2)
            .is_some_and(|head| head.eq_ignore_ascii_case("of"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_value_missing_slot() {
        let modifier = RawModifier::new("MapDroppedItemQuantityIncrease", "Bountiful", vec![8]);
        assert_eq!(modifier.try_value(0), Some(8));
        assert_eq!(modifier.try_value(1), None);
    }

    #[test]
    fn test_stat_pairs_truncate_to_shorter_side() {
        let modifier = RawModifier::new("Anything", "", vec![5])
            .with_stat_keys(["map_item_drop_quantity_+%", "map_item_drop_rarity_+%"]);
        let pairs = modifier.stat_pairs().collect::<Vec<_>>();
        assert_eq!(pairs, vec![("map_item_drop_quantity_+%", 5)]);
    }

    #[test]
    fn test_reads_as_suffix() {
        assert!(RawModifier::new("X", "of Penetration", vec![]).reads_as_suffix());
        assert!(RawModifier::new("X", "OF the Hunt", vec![]).reads_as_suffix());
        assert!(!RawModifier::new("X", "Bountiful", vec![]).reads_as_suffix());
        assert!(!RawModifier::new("X", "o", vec![]).reads_as_suffix());
        assert!(!RawModifier::new("X", "", vec![]).reads_as_suffix());
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let json = r#"{ "identifier": "MapPackSizeIncrease", "values": [12] }"#;
        let modifier: RawModifier = serde_json::from_str(json).unwrap();
        assert_eq!(modifier.identifier, "MapPackSizeIncrease");
        assert!(modifier.display_text.is_empty());
        assert!(modifier.group.is_none());
        assert!(!modifier.has_stat_keys());
        assert_eq!(modifier.values, vec![12]);
    }

    #[test]
    fn test_delirium_stack_group() {
        let modifier =
            RawModifier::new("MapDelirium", "Delirious", vec![20]).with_group(DELIRIUM_STACK_GROUP);
        assert!(modifier.is_delirium_stack());
        assert!(!RawModifier::new("MapDelirium", "Delirious", vec![]).is_delirium_stack());
    }
}
