//! Environment lookups
//!
//! The logger re-reads two variables on every call. Reads go through
//! `EnvSource` so a logger can be pointed at a fixed set of values instead of
//! the process environment.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Overrides the debug level on every call when set
pub const LEVEL_OVERRIDE_VAR: &str = "SAK_LOG_DLOVERRIDE";

/// Regex applied to the facility before anything reaches stderr
pub const FACILITY_FILTER_VAR: &str = "SAK_LOG_FFILTER";

pub trait EnvSource: Send + Sync {
    /// Value of `key`, or `None` when unset or not valid unicode
    fn var(&self, key: &str) -> Option<String>;

    /// Like `var`, but an empty value counts as unset
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment
///
/// ```
/// use sak::{EnvSource, MapEnv, LEVEL_OVERRIDE_VAR};
///
/// let env = MapEnv::new().with_var(LEVEL_OVERRIDE_VAR, "3");
/// assert_eq!(env.var(LEVEL_OVERRIDE_VAR).as_deref(), Some("3"));
/// env.remove(LEVEL_OVERRIDE_VAR);
/// assert!(env.var(LEVEL_OVERRIDE_VAR).is_none());
/// ```
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.write().remove(key);
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.read().get(key).cloned()
    }
}
