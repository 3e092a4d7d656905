use serde::{Deserialize, Serialize};
use waystone_item::{AffixCounts, ItemLocation, ItemSnapshot, Rarity, RawModifier};

/// One waystone as exported by the host.
///
/// Affix counts are resolved in this order: explicit `prefix_count` and `suffix_count`
/// (both required), then the `prefixes`/`suffixes` listing, then the display-text
/// heuristic over `modifiers`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub tier: i32,
    pub rarity: Rarity,
    #[serde(default)]
    pub corrupted: bool,
    #[serde(default)]
    pub location: ItemLocation,
    #[serde(default)]
    pub modifiers: Vec<RawModifier>,
    #[serde(default)]
    pub prefix_count: Option<u32>,
    #[serde(default)]
    pub suffix_count: Option<u32>,
    #[serde(default)]
    pub prefixes: Option<Vec<RawModifier>>,
    #[serde(default)]
    pub suffixes: Option<Vec<RawModifier>>,
}

impl ItemRecord {
    pub fn to_snapshot(&self) -> ItemSnapshot {
        let prefixes = self.prefixes.clone().unwrap_or_default();
        let suffixes = self.suffixes.clone().unwrap_or_default();
        let is_split = self.prefixes.is_some() || self.suffixes.is_some();

        match (self.prefix_count, self.suffix_count) {
            (Some(prefix_count), Some(suffix_count)) => {
                let mut modifiers = prefixes;
                modifiers.extend(suffixes);
                modifiers.extend(self.modifiers.iter().cloned());
                ItemSnapshot::new(
                    self.tier,
                    self.rarity,
                    self.corrupted,
                    self.location,
                    modifiers,
                    Some(AffixCounts::new(prefix_count, suffix_count)),
                )
            }
            _ if is_split => ItemSnapshot::from_split(
                self.tier,
                self.rarity,
                self.corrupted,
                self.location,
                prefixes,
                suffixes,
                self.modifiers.clone(),
            ),
            _ => ItemSnapshot::new(
                self.tier,
                self.rarity,
                self.corrupted,
                self.location,
                self.modifiers.clone(),
                None,
            ),
        }
    }
}
