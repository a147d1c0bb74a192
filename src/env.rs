//! Environment variable access with a test override hook.
//!
//! Production code constructs [`Env::real`], which reads the process
//! environment. Loader tests construct [`Env::mock`] with fixed values,
//! so they never have to mutate process-global state.

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Read from a fixed set of key-value pairs.
    #[cfg(test)]
    pub fn mock<const N: usize>(vars: [(&str, &str); N]) -> Self {
        Self {
            overrides: Some(
                vars.iter()
                    .map(|&(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }
}
