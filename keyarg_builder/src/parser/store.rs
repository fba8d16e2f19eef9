use std::collections::HashMap;

use crate::model::ParsedValue;

/// The values captured by parsing, keyed by parameter name.
#[derive(Debug, Default)]
pub(crate) struct ValueStore {
    values: HashMap<String, ParsedValue>,
}

impl ValueStore {
    /// Insert the value, replacing any previous value under the same name.
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: ParsedValue) {
        self.values.insert(name.into(), value);
    }

    pub(crate) fn get(&self, name: &str) -> Option<&ParsedValue> {
        self.values.get(name)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }
}
