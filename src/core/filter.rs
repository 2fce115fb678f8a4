//! Facility filter
//!
//! The filter is compiled at most once per logger. After the first pattern
//! compiles, later patterns are ignored for the rest of the logger's life.
//! A pattern that fails to compile leaves filtering off; the same bad
//! pattern is not retried, but a different one will be.

use super::error::SakError;
use parking_lot::Mutex;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Default)]
pub struct FacilityFilter {
    compiled: OnceLock<Regex>,
    rejected: Mutex<Option<String>>,
}

impl FacilityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    /// Source of the compiled pattern, if any
    pub fn pattern(&self) -> Option<&str> {
        self.compiled.get().map(Regex::as_str)
    }

    /// Compile `pattern` unless a filter is already in place.
    ///
    /// Returns the compile error the first time a given bad pattern is seen.
    pub fn try_compile(&self, pattern: &str) -> Option<SakError> {
        if self.is_compiled() || pattern.is_empty() {
            return None;
        }

        let mut rejected = self.rejected.lock();
        if rejected.as_deref() == Some(pattern) {
            return None;
        }

        match Regex::new(pattern) {
            Ok(re) => {
                // Losing a race to another caller is fine; first one wins.
                let _ = self.compiled.set(re);
                *rejected = None;
                None
            }
            Err(e) => {
                *rejected = Some(pattern.to_string());
                Some(SakError::filter_pattern(pattern, e))
            }
        }
    }

    /// True when no filter is compiled or the facility matches it
    pub fn allows(&self, facility: &str) -> bool {
        self.compiled.get().map_or(true, |re| re.is_match(facility))
    }
}
