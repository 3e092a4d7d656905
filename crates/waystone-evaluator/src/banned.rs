//! Banned-modifier filtering.
//!
//! Users list modifier texts they never want to run as one comma-separated string. The
//! string is parsed into a [`BannedModifierList`], and any item carrying a modifier whose
//! display text contains one of the entries is classified as banned.
//!
//! The parsed list is shared through [`SharedBannedModifiers`]. Reloading builds a new
//! list and swaps it in whole, so a pass that already holds the previous list keeps
//! seeing it unchanged.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

/// Parsed, lower-cased banned modifier substrings in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BannedModifierList {
    entries: Vec<String>,
}

impl BannedModifierList {
    /// Parses a comma-separated banned modifier string.
    ///
    /// Each piece is trimmed and lower-cased; empty pieces are dropped. Order is kept and
    /// duplicates are left in place. Parsing the same string always yields the same list.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .split(',')
            .map(|piece| piece.trim().to_lowercase())
            .filter(|piece| !piece.is_empty())
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if any entry occurs in `display_text`, ignoring case.
    #[must_use]
    pub fn is_banned(&self, display_text: &str) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let text = display_text.to_lowercase();
        self.entries.iter().any(|entry| text.contains(entry.as_str()))
    }
}

/// The banned modifier list currently in effect.
#[derive(Debug, Default)]
pub struct SharedBannedModifiers {
    current: RwLock<Arc<BannedModifierList>>,
}

impl SharedBannedModifiers {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            current: RwLock::new(Arc::new(BannedModifierList::parse(raw))),
        }
    }

    /// Returns the list in effect right now.
    #[must_use]
    pub fn load(&self) -> Arc<BannedModifierList> {
        Arc::clone(&self.current.read())
    }

    /// Re-parses `raw` and replaces the current list with the result.
    pub fn reload(&self, raw: &str) -> Arc<BannedModifierList> {
        let list = Arc::new(BannedModifierList::parse(raw));
        *self.current.write() = Arc::clone(&list);
        tracing::info!(entries = list.len(), "reloaded banned modifiers");
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let list = BannedModifierList::parse("  Foo , bar,,BAZ ");
        assert_eq!(list.entries(), ["foo", "bar", "baz"]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = "unwavering, penetration ,";
        assert_eq!(BannedModifierList::parse(raw), BannedModifierList::parse(raw));
    }

    #[test]
    fn test_parse_whitespace_only_is_empty() {
        assert!(BannedModifierList::parse("   ").is_empty());
        assert!(BannedModifierList::parse(" , ,\t,").is_empty());
        assert!(BannedModifierList::parse("").is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let list = BannedModifierList::parse("foo, FOO");
        assert_eq!(list.entries(), ["foo", "foo"]);
    }

    #[test]
    fn test_is_banned_case_insensitive_substring() {
        let list = BannedModifierList::parse("penetration");
        assert!(list.is_banned("of Penetration"));
        assert!(list.is_banned("PENETRATION"));
        assert!(!list.is_banned("of Piercing"));
    }

    #[test]
    fn test_empty_list_bans_nothing() {
        let list = BannedModifierList::default();
        assert!(!list.is_banned("anything"));
        assert!(!list.is_banned(""));
    }

    #[test]
    fn test_reload_swaps_whole_list() {
        let shared = SharedBannedModifiers::new("foo");
        let before = shared.load();
        shared.reload("bar, baz");
        let after = shared.load();

        assert_eq!(before.entries(), ["foo"]);
        assert_eq!(after.entries(), ["bar", "baz"]);
    }

    #[test]
    fn test_reload_depends_only_on_input() {
        let shared = SharedBannedModifiers::new("foo, bar");
        shared.reload("baz");
        shared.reload("baz");
        assert_eq!(shared.load().entries(), ["baz"]);
    }
}
