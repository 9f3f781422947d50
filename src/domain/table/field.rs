use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Value extracted from a record by a field accessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Timestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
    Empty,
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Timestamp(ts) => ts.format(&Rfc3339).unwrap_or_default(),
            FieldValue::Empty => String::new(),
        }
    }

    /// Text and timestamps are ordered; any other pairing compares equal and keeps
    /// input order.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => compare_text(a, b),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Empty)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<OffsetDateTime> for FieldValue {
    fn from(value: OffsetDateTime) -> Self {
        FieldValue::Timestamp(value)
    }
}

/// Base letters only: decomposed, accents dropped, lower-cased ("Émile" -> "emile").
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn decomposed_lower(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

/// Locale-style text ordering in three levels: base letters ignoring case and
/// accents, then unaccented before accented, then lowercase before uppercase.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| decomposed_lower(a).cmp(&decomposed_lower(b)))
        .then_with(|| b.cmp(a))
}

pub type Accessor<T> = Arc<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// A named, explicitly typed path into a record (e.g. `meta.updatedAt`).
pub struct Field<T> {
    pub key: String,
    accessor: Accessor<T>,
}

impl<T> Field<T> {
    pub fn new<F>(key: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            accessor: Arc::new(accessor),
        }
    }

    pub fn value(&self, record: &T) -> FieldValue {
        (self.accessor)(record)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("key", &self.key).finish()
    }
}
