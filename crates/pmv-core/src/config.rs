//! PMV Configuration
//!
//! Limits and tracing switches for the variable store.
//! Configuration specifies constraints only; enforcement is handled by the store.

/// Value store configuration
#[derive(Debug, Clone)]
pub struct PmvConfig {
    /// Maximum number of named variables held at once
    pub max_variables: usize,

    /// Emit the rendered text of values in debug events
    pub trace_values: bool,
}

impl Default for PmvConfig {
    fn default() -> Self {
        PmvConfig {
            max_variables: 256,
            trace_values: true,
        }
    }
}

impl PmvConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }
}
