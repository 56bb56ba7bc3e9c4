//! Process-wide log-reference registry.
//!
//! Tables are registered once at startup and looked up by code afterwards.
//! The registry keeps the first descriptor seen for each code: re-registering
//! an identical entry is a no-op and a conflicting one is logged and dropped.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{OnceLock, RwLock};
use tracing::{debug, warn};

use super::LogRef;

/// Outcome of registering one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationSummary {
    /// Entries inserted for the first time.
    pub added: usize,
    /// Entries identical to one already registered.
    pub unchanged: usize,
    /// Codes already registered with a different descriptor.
    pub conflicts: Vec<u32>,
    /// Entries ignored because they follow the end marker.
    pub skipped: usize,
}

/// Thread-safe map from code to log reference.
#[derive(Debug, Default)]
pub struct LogRefRegistry {
    refs: RwLock<BTreeMap<u32, LogRef>>,
}

impl LogRefRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every entry up to the first end marker.
    ///
    /// A table without an end marker is registered to its last entry.
    pub fn add(&self, refs: &[LogRef]) -> RegistrationSummary {
        let end = refs.iter().position(LogRef::is_end);
        let (live, skipped) = match end {
            Some(index) => (&refs[..index], refs.len() - index - 1),
            None => {
                debug!(len = refs.len(), "Log reference table has no end marker");
                (refs, 0)
            }
        };

        let mut summary = RegistrationSummary {
            skipped,
            ..RegistrationSummary::default()
        };

        {
            let mut map = self.refs.write().unwrap_or_else(|e| e.into_inner());
            for entry in live {
                match map.entry(entry.code) {
                    Entry::Vacant(slot) => {
                        slot.insert(*entry);
                        summary.added += 1;
                    }
                    Entry::Occupied(existing) if existing.get() == entry => {
                        summary.unchanged += 1;
                    }
                    Entry::Occupied(existing) => {
                        warn!(
                            code = entry.code,
                            kept = existing.get().title,
                            ignored = entry.title,
                            "Conflicting log reference ignored"
                        );
                        summary.conflicts.push(entry.code);
                    }
                }
            }
        }

        if skipped > 0 {
            debug!(skipped, "Ignoring log references after end marker");
        }
        debug!(
            added = summary.added,
            unchanged = summary.unchanged,
            conflicts = summary.conflicts.len(),
            "Registered log reference table"
        );

        summary
    }

    pub fn get(&self, code: u32) -> Option<LogRef> {
        self.refs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&code)
            .copied()
    }

    pub fn len(&self) -> usize {
        self.refs.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered codes in ascending order.
    pub fn codes(&self) -> Vec<u32> {
        self.refs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .copied()
            .collect()
    }

    /// Every registered entry, ordered by code.
    pub fn snapshot(&self) -> Vec<LogRef> {
        self.refs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .copied()
            .collect()
    }

    pub fn clear(&self) {
        self.refs.write().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

static GLOBAL: OnceLock<LogRefRegistry> = OnceLock::new();

/// The process-wide registry.
pub fn global() -> &'static LogRefRegistry {
    GLOBAL.get_or_init(LogRefRegistry::new)
}

/// Register a table with the process-wide registry.
pub fn log_ref_add(refs: &[LogRef]) -> RegistrationSummary {
    global().add(refs)
}

/// Look a code up in the process-wide registry.
pub fn log_ref_get(code: u32) -> Option<LogRef> {
    global().get(code)
}

/// Drop everything from the process-wide registry.
pub fn log_ref_fini() {
    global().clear();
}
