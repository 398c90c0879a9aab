//! Typed key-value record
//!
//! Values keep their type (bool, int, float) so a save reads back exactly as
//! written. Readers always supply a default; a missing or mismatched key never
//! fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single stored value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Float(f32),
}

/// One saved game (or any other flat preferences blob)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, PrefValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), PrefValue::Bool(value));
    }

    pub fn put_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), PrefValue::Int(value));
    }

    pub fn put_float(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), PrefValue::Float(value));
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(PrefValue::Bool(v)) => *v,
            other => Self::fallback(key, other, default),
        }
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(PrefValue::Int(v)) => *v,
            other => Self::fallback(key, other, default),
        }
    }

    /// Ints are accepted for float keys (`1` and `1.0` read the same)
    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.values.get(key) {
            Some(PrefValue::Float(v)) => *v,
            Some(PrefValue::Int(v)) => *v as f32,
            other => Self::fallback(key, other, default),
        }
    }

    /// Unsigned counters; negative values read as the default
    pub fn get_u32(&self, key: &str, default: u32) -> u32 {
        u32::try_from(self.get_int(key, default as i64)).unwrap_or(default)
    }

    fn fallback<T>(key: &str, found: Option<&PrefValue>, default: T) -> T {
        if let Some(value) = found {
            log::debug!("Ignoring {key}: unexpected value {value:?}");
        }
        default
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
