//! Catalog data model: profile definitions and id → label tables.

use serde::{Deserialize, Serialize};

/// A named preset bundling a model choice and a thinking level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AgentProfile {
    /// Stable unique identifier, persisted as the selection.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Raw icon registry key; resolved with fallback at render time.
    #[serde(default)]
    pub icon: Option<String>,
    /// Model id, a key into the catalog's model table.
    pub model: String,
    /// Thinking-level id, a key into the catalog's thinking-level table.
    pub thinking_level: String,
}

/// Id → display-label table with unique keys.
///
/// Inserting an existing key replaces its label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: Vec<(String, String)>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the label for `id`.
    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let id = id.into();
        let label = label.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some(entry) => entry.1 = label,
            None => self.entries.push((id, label)),
        }
    }

    /// Look up the display label for `id`.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, label)| label.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LabelTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = LabelTable::new();
        for (id, label) in iter {
            table.insert(id, label);
        }
        table
    }
}
