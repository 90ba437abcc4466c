use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const ARRAYS: usize = 1000;
pub const RECORDS: usize = 200;
pub const WIDTH: f64 = 10.0;
pub const HEIGHT: f64 = 16.0;
pub const TEXT: &str = "Hello World";

/// The repeated unit of the workload.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Record {
    pub width: f64,
    pub height: f64,
    pub text: String,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            text: TEXT.to_string(),
        }
    }
}

/// Dimensions of a document: how many named arrays and how many records in each.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Shape {
    pub arrays: usize,
    pub records: usize,
}

impl Shape {
    pub fn new(arrays: usize, records: usize) -> Self {
        Self { arrays, records }
    }

    pub fn key(index: usize) -> String {
        format!("array{}", index)
    }

    pub fn total_records(&self) -> usize {
        self.arrays * self.records
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(ARRAYS, RECORDS)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} arrays x {} records", self.arrays, self.records)
    }
}

/// Top level object of the workload. Keys keep insertion order so the encoded
/// text lists `array0`, `array1`, ... in sequence.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub(crate) arrays: IndexMap<String, Vec<Record>>,
}

impl Document {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arrays: IndexMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: String, records: Vec<Record>) -> Option<Vec<Record>> {
        self.arrays.insert(key, records)
    }

    pub fn get(&self, key: &str) -> Option<&Vec<Record>> {
        self.arrays.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Vec<Record>> {
        self.arrays.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vec<Record>)> {
        self.arrays.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.arrays.values().flatten()
    }
}

/// 1-based line and column inside the decoded text.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

/// Where inside the document a lookup or check failed, e.g. `array3[17].width`.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Location {
    pub key: Option<String>,
    pub index: Option<usize>,
    pub field: Option<&'static str>,
}

impl Location {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn array(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::default()
        }
    }

    pub fn record(key: &str, index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::array(key)
        }
    }

    pub fn field(key: &str, index: usize, field: &'static str) -> Self {
        Self {
            field: Some(field),
            ..Self::record(key, index)
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{}", key)?,
            None => return write!(f, "<root>"),
        }

        if let Some(index) = self.index {
            write!(f, "[{}]", index)?;
        }

        if let Some(field) = self.field {
            write!(f, ".{}", field)?;
        }

        Ok(())
    }
}
