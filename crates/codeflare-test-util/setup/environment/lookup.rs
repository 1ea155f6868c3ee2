use std::collections::HashMap;
use std::env;

/// Read access to a set of environment variables
pub trait EnvLookup {
    /// Current value of `key`, `None` when unset.
    /// A variable set to the empty string is `Some("")`.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Wrapper over the OS environment variables
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEnv;

impl EnvLookup for OsEnv {
    // non utf-8 values still count as set
    fn lookup(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// In-memory environment, so tests never touch the process environment
#[derive(Debug, Default, Clone)]
pub struct FixedEnv {
    vars: HashMap<String, String>,
}

impl FixedEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for FixedEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvLookup for FixedEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
