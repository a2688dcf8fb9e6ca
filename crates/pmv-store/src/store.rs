use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use pmv_core::{BoxedValue, PmvConfig, PmvError, PmvResult, ValuePrinter};
use tracing::{debug, trace};

/// Text used for slots that hold no payload.
pub const EMPTY_LABEL: &str = "<empty>";

/// Key-ordered store of boxed values, bounded by `max_variables`.
#[derive(Debug, Default)]
pub struct VariableStore {
    config: PmvConfig,
    values: BTreeMap<String, BoxedValue>,
}

impl VariableStore {
    pub fn new(config: PmvConfig) -> Self {
        VariableStore { config, values: BTreeMap::new() }
    }

    pub fn config(&self) -> &PmvConfig {
        &self.config
    }

    /// Box `value` and store it under `name`, replacing any previous value.
    pub fn set<T: ValuePrinter + 'static>(&mut self, name: impl Into<String>, value: T) -> PmvResult<()> {
        self.set_boxed(name, BoxedValue::new(value))
    }

    /// Store an already boxed value. A replaced payload is destroyed here.
    pub fn set_boxed(&mut self, name: impl Into<String>, mut value: BoxedValue) -> PmvResult<()> {
        let name = name.into();
        if !self.values.contains_key(&name) {
            self.ensure_capacity()?;
        }
        self.trace_set(&name, &value);

        match self.values.get_mut(&name) {
            Some(slot) => slot.assign(&mut value),
            None => {
                self.values.insert(name, value);
            }
        }
        Ok(())
    }

    fn trace_set(&self, name: &str, value: &BoxedValue) {
        if self.config.trace_values {
            let text = render_or_empty(value);
            debug!(variable = %name, value = %text, "set variable");
        } else {
            debug!(variable = %name, "set variable");
        }
    }

    /// The slot for `name`, inserting an empty one if it does not exist.
    pub fn slot(&mut self, name: &str) -> PmvResult<&mut BoxedValue> {
        if !self.values.contains_key(name) {
            self.ensure_capacity()?;
            trace!(variable = %name, "new empty slot");
        }
        Ok(self.values.entry(name.to_string()).or_default())
    }

    /// Typed access to a stored value.
    pub fn get<T: 'static>(&self, name: &str) -> PmvResult<&T> {
        self.values
            .get(name)
            .ok_or_else(|| PmvError::UnknownVariable(name.to_string()))?
            .try_downcast_ref::<T>()
    }

    pub fn get_boxed(&self, name: &str) -> Option<&BoxedValue> {
        self.values.get(name)
    }

    /// Text form of a stored value.
    pub fn render(&self, name: &str) -> PmvResult<String> {
        self.values
            .get(name)
            .ok_or_else(|| PmvError::UnknownVariable(name.to_string()))?
            .try_to_string()
    }

    /// Remove `name`, handing its box to the caller.
    pub fn remove(&mut self, name: &str) -> Option<BoxedValue> {
        let removed = self.values.remove(name);
        if removed.is_some() {
            debug!(variable = %name, "removed variable");
        }
        removed
    }

    /// Drop every stored value.
    pub fn clear(&mut self) {
        debug!(count = self.values.len(), "clearing variable store");
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// `(name, text)` pairs in key order.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), render_or_empty(value)))
            .collect()
    }

    /// Write the snapshot to `path` as `name: value` lines.
    pub fn persist_snapshot(&self, path: &Path) -> PmvResult<()> {
        let mut f = File::create(path)?;
        for (name, text) in self.snapshot() {
            writeln!(f, "{}: {}", name, text)?;
        }
        debug!(path = %path.display(), count = self.values.len(), "persisted snapshot");
        Ok(())
    }

    fn ensure_capacity(&self) -> PmvResult<()> {
        if self.values.len() >= self.config.max_variables {
            return Err(PmvError::StoreFull(self.config.max_variables));
        }
        Ok(())
    }
}

fn render_or_empty(value: &BoxedValue) -> String {
    value.try_to_string().unwrap_or_else(|_| EMPTY_LABEL.to_string())
}
