use super::Loc;
use crate::error::ParseError;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Tracks the first line each key of one table appeared on.
///
/// One guard per table; duplicate detection never crosses tables.
pub(super) struct DuplicateGuard<K> {
    label: &'static str,
    first_seen: HashMap<K, u32>,
}

impl<K: Eq + Hash + Display> DuplicateGuard<K> {
    pub(super) fn new(label: &'static str) -> Self {
        DuplicateGuard {
            label,
            first_seen: HashMap::new(),
        }
    }

    /// Record `key` at `loc`, or fail naming the line it was first used on.
    pub(super) fn check(&mut self, key: K, loc: Loc<'_>) -> Result<(), ParseError> {
        if let Some(first) = self.first_seen.get(&key) {
            return Err(loc
                .err(format!(
                    "The {} {} was previously used on line {}",
                    self.label, key, first
                ))
                .with_text(key.to_string()));
        }
        self.first_seen.insert(key, loc.line);
        Ok(())
    }
}
