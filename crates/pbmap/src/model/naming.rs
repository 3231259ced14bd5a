use std::collections::HashMap;

use super::kind::Kind;

/// Per-kind uid counters.
///
/// Each named kind counts from 0 and never hands out the same number twice,
/// even after the entity that received it has been dropped.
#[derive(Debug, Default, Clone)]
pub struct UidSequencer {
    next_by_kind: HashMap<Kind, u64>,
}

impl UidSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` for kinds that carry no uid.
    pub fn next_uid(&mut self, kind: Kind) -> Option<String> {
        let prefix = kind.uid_prefix()?;
        let counter = self.next_by_kind.entry(kind).or_insert(0);
        let uid = format!("{prefix}_{counter}");
        *counter += 1;
        Some(uid)
    }

    /// Moves the counter past `uid` when it looks like one this sequencer
    /// would generate, so later uids cannot collide with it.
    pub fn observe(&mut self, kind: Kind, uid: &str) {
        let Some(prefix) = kind.uid_prefix() else {
            return;
        };
        let number = uid
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|digits| digits.parse::<u64>().ok());
        if let Some(number) = number {
            let counter = self.next_by_kind.entry(kind).or_insert(0);
            *counter = (*counter).max(number.saturating_add(1));
        }
    }

    /// Number of uids already issued for `kind`.
    pub fn issued(&self, kind: Kind) -> u64 {
        self.next_by_kind.get(&kind).copied().unwrap_or(0)
    }
}
