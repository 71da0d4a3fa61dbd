//! Cube label data model and keyword lookup.
//!
//! A label is the structured metadata block attached to a cube: nested named
//! groups of keyed values, some carrying physical units. Reader
//! implementations produce a [`Label`] tree; this module only looks values up
//! in it and never parses raw label text.

use ring_common::{RingError, RingResult};
use serde::{Deserialize, Serialize};

/// A scalar or unit-tagged value stored under a label keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LabelValue {
    Integer(i64),
    Real(f64),
    Text(String),
    /// A numeric value with a physical unit, e.g. `0.5 <km/pixel>`.
    Quantity { value: f64, unit: String },
}

impl LabelValue {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LabelValue::Integer(v) => Some(*v as f64),
            LabelValue::Real(v) => Some(*v),
            LabelValue::Quantity { value, .. } => Some(*value),
            LabelValue::Text(_) => None,
        }
    }

    /// Text view of the value, if it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LabelValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The physical unit, for unit-tagged values.
    pub fn unit(&self) -> Option<&str> {
        match self {
            LabelValue::Quantity { unit, .. } => Some(unit),
            _ => None,
        }
    }
}

/// One entry in a label: either a nested group or a keyword value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LabelEntry {
    Group(Label),
    Value(LabelValue),
}

/// A nested group of keyed label entries, in file order.
///
/// Keyword matching is case-insensitive, following the convention of the
/// label format this models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
    entries: Vec<(String, LabelEntry)>,
}

impl Label {
    /// Create an empty label group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a nested group (builder form).
    pub fn with_group(mut self, name: impl Into<String>, group: Label) -> Self {
        self.entries.push((name.into(), LabelEntry::Group(group)));
        self
    }

    /// Append a keyword value (builder form).
    pub fn with_value(mut self, name: impl Into<String>, value: LabelValue) -> Self {
        self.entries.push((name.into(), LabelEntry::Value(value)));
        self
    }

    /// Append a nested group.
    pub fn push_group(&mut self, name: impl Into<String>, group: Label) {
        self.entries.push((name.into(), LabelEntry::Group(group)));
    }

    /// Append a keyword value.
    pub fn push_value(&mut self, name: impl Into<String>, value: LabelValue) {
        self.entries.push((name.into(), LabelEntry::Value(value)));
    }

    /// Look up a direct child group by name.
    pub fn group(&self, name: &str) -> Option<&Label> {
        self.entries.iter().find_map(|(n, e)| match e {
            LabelEntry::Group(g) if n.eq_ignore_ascii_case(name) => Some(g),
            _ => None,
        })
    }

    /// Look up a direct child value by name.
    pub fn value(&self, name: &str) -> Option<&LabelValue> {
        self.entries.iter().find_map(|(n, e)| match e {
            LabelEntry::Value(v) if n.eq_ignore_ascii_case(name) => Some(v),
            _ => None,
        })
    }

    /// Resolve a value at a nested path, e.g.
    /// `label.keyword(&["IsisCube", "Mapping", "MinimumRingRadius"])`.
    ///
    /// Every path segment but the last must name a group; the last must name
    /// a value. Any miss yields `MissingKeyword` carrying the full path.
    pub fn keyword(&self, path: &[&str]) -> RingResult<&LabelValue> {
        let missing = || RingError::MissingKeyword(path.join("/"));
        let (last, groups) = path.split_last().ok_or_else(missing)?;

        let mut current = self;
        for segment in groups {
            current = current.group(segment).ok_or_else(missing)?;
        }
        current.value(last).ok_or_else(missing)
    }

    /// Find the first value with the given keyword name anywhere in the tree,
    /// depth-first in file order.
    ///
    /// This mirrors flat keyword lookup tools that search a label without
    /// knowing the enclosing group, as used for instrument-level keywords
    /// like `INST_CMPRS_TYPE`.
    pub fn find_keyword(&self, name: &str) -> RingResult<&LabelValue> {
        self.find_keyword_inner(name)
            .ok_or_else(|| RingError::MissingKeyword(name.to_string()))
    }

    fn find_keyword_inner(&self, name: &str) -> Option<&LabelValue> {
        for (n, entry) in &self.entries {
            match entry {
                LabelEntry::Value(v) if n.eq_ignore_ascii_case(name) => return Some(v),
                LabelEntry::Group(g) => {
                    if let Some(v) = g.find_keyword_inner(name) {
                        return Some(v);
                    }
                }
                _ => {}
            }
        }
        None
    }
}
