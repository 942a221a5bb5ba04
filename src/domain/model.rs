use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;

/// One CSV record plus the lowercase text the scorer matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    #[serde(flatten)]
    pub data: HashMap<String, String>,
    #[serde(skip)]
    search_text: String,
}

impl Row {
    /// Builds a row whose search text is the lowercase, space-joined value of
    /// `search_cols`. Missing columns contribute an empty string.
    pub fn new<S: AsRef<str>>(data: HashMap<String, String>, search_cols: &[S]) -> Self {
        let search_text = search_cols
            .iter()
            .map(|col| data.get(col.as_ref()).map(String::as_str).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Self { data, search_text }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.data.get(column).map(String::as_str)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

pub const ERROR_FIELD: &str = "error";

/// A projected result handed back to callers, or an error marker.
///
/// Fields keep the order of the projection that produced them, and serialize
/// as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    fields: Vec<(String, String)>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(message: impl Into<String>) -> Self {
        let mut entry = Self::new();
        entry.insert(ERROR_FIELD, message);
        entry
    }

    /// Sets `key`, replacing the value in place if it is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_error(&self) -> bool {
        self.get(ERROR_FIELD).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Renders entries as a pretty-printed JSON array.
pub fn entries_to_json(entries: &[Entry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
