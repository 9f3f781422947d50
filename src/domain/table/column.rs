use super::field::{Accessor, FieldValue};
use super::query::SortDirection;
use serde::Serialize;
use std::sync::Arc;

pub type Renderer<T> = Arc<dyn Fn(&FieldValue, &T) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortIndicator {
    /// Column is not sortable.
    None,
    /// Sortable but not the active sort column.
    Inactive,
    Ascending,
    Descending,
}

/// Column descriptor consumed by the rendering surface.
pub struct TableColumn<T> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub width: Option<String>,
    accessor: Accessor<T>,
    render: Option<Renderer<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub width: Option<String>,
    pub indicator: SortIndicator,
}

impl<T> TableColumn<T> {
    pub fn new<F>(key: impl Into<String>, label: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            width: None,
            accessor: Arc::new(accessor),
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&FieldValue, &T) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn value(&self, record: &T) -> FieldValue {
        (self.accessor)(record)
    }

    pub fn display(&self, record: &T) -> String {
        let value = self.value(record);
        match &self.render {
            Some(render) => render(&value, record),
            None => value.display(),
        }
    }

    /// Next sort state after the header is clicked: same column ascending flips to
    /// descending, anything else starts ascending. `None` if not sortable.
    pub fn next_sort(
        &self,
        current: Option<&str>,
        direction: SortDirection,
    ) -> Option<(String, SortDirection)> {
        if !self.sortable {
            return None;
        }
        let next = if current == Some(self.key.as_str()) && direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Some((self.key.clone(), next))
    }

    pub fn indicator(&self, current: Option<&str>, direction: SortDirection) -> SortIndicator {
        if !self.sortable {
            SortIndicator::None
        } else if current != Some(self.key.as_str()) {
            SortIndicator::Inactive
        } else if direction == SortDirection::Asc {
            SortIndicator::Ascending
        } else {
            SortIndicator::Descending
        }
    }

    pub fn header(&self, current: Option<&str>, direction: SortDirection) -> ColumnHeader {
        ColumnHeader {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            width: self.width.clone(),
            indicator: self.indicator(current, direction),
        }
    }
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            width: self.width.clone(),
            accessor: Arc::clone(&self.accessor),
            render: self.render.clone(),
        }
    }
}

impl<T> std::fmt::Debug for TableColumn<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .finish()
    }
}

/// Renders each row into one display string per column.
pub fn render_rows<T>(columns: &[TableColumn<T>], rows: &[T]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| columns.iter().map(|c| c.display(row)).collect())
        .collect()
}
