use super::field::{Field, FieldValue};
use super::pagination::PaginationInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Filter value meaning "no constraint on this field".
pub const ALL_FILTER: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableQuery {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub sort_by: Option<String>,
    pub sort_direction: SortDirection,
    pub page: u32,
    pub limit: u32,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort_by: None,
            sort_direction: SortDirection::Asc,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn sorted_by(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(key.into());
        self.sort_direction = direction;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Filters that actually constrain: empty values and [`ALL_FILTER`] are skipped.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter(|(_, v)| !v.is_empty() && v.as_str() != ALL_FILTER)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Exact,
    Contains,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage<T> {
    pub rows: Vec<T>,
    pub pagination: PaginationInfo,
}

/// Search, filter, sort and paginate an in-memory record set.
///
/// Stages run in that order: search and categorical filters reduce the set,
/// `total` is counted, then the reduced set is sorted and sliced. The input
/// slice is never modified.
pub struct TableEngine<T> {
    fields: Vec<Field<T>>,
    searchable: Vec<String>,
    filters: Vec<(String, FilterMode)>,
    default_sort: Option<String>,
    max_page_size: u32,
}

impl<T> Default for TableEngine<T> {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            searchable: Vec::new(),
            filters: Vec::new(),
            default_sort: None,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl<T> Clone for TableEngine<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            searchable: self.searchable.clone(),
            filters: self.filters.clone(),
            default_sort: self.default_sort.clone(),
            max_page_size: self.max_page_size,
        }
    }
}

impl<T> std::fmt::Debug for TableEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableEngine")
            .field("fields", &self.fields)
            .field("searchable", &self.searchable)
            .field("filters", &self.filters)
            .field("default_sort", &self.default_sort)
            .field("max_page_size", &self.max_page_size)
            .finish()
    }
}

impl<T: Clone> TableEngine<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<F>(mut self, key: &str, accessor: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.fields.push(Field::new(key, accessor));
        self
    }

    pub fn searchable(mut self, keys: &[&str]) -> Self {
        self.searchable = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn filterable(mut self, key: &str, mode: FilterMode) -> Self {
        self.filters.push((key.to_string(), mode));
        self
    }

    pub fn default_sort(mut self, key: &str) -> Self {
        self.default_sort = Some(key.to_string());
        self
    }

    pub fn max_page_size(mut self, max: u32) -> Self {
        self.max_page_size = max.max(1);
        self
    }

    fn lookup(&self, key: &str) -> Option<&Field<T>> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn value(&self, key: &str, record: &T) -> Option<FieldValue> {
        self.lookup(key).map(|f| f.value(record))
    }

    /// `needle` must already be lower-cased; an empty needle matches everything.
    fn matches_search(&self, record: &T, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.searchable.iter().any(|key| {
            self.value(key, record)
                .and_then(|v| v.as_text().map(|s| s.to_lowercase().contains(needle)))
                .unwrap_or(false)
        })
    }

    fn matches_filters(&self, record: &T, query: &TableQuery) -> bool {
        query.active_filters().all(|(key, expected)| {
            let Some((_, mode)) = self.filters.iter().find(|(k, _)| k == key) else {
                // Undeclared filter keys do not constrain.
                return true;
            };
            let actual = self.value(key, record).map(|v| v.display()).unwrap_or_default();
            match mode {
                FilterMode::Exact => actual == expected,
                FilterMode::Contains => actual.contains(expected),
            }
        })
    }

    pub fn query(&self, records: &[T], query: &TableQuery) -> TablePage<T> {
        let needle = query.search.to_lowercase();

        let mut matched: Vec<&T> = records
            .iter()
            .filter(|r| self.matches_search(r, &needle))
            .filter(|r| self.matches_filters(r, query))
            .collect();

        let sort_key = query.sort_by.as_deref().or(self.default_sort.as_deref());
        if let Some(field) = sort_key.and_then(|k| self.lookup(k)) {
            let mut keyed: Vec<(FieldValue, &T)> =
                matched.into_iter().map(|r| (field.value(r), r)).collect();
            // sort_by is stable, so equal keys keep their input order.
            keyed.sort_by(|(a, _), (b, _)| {
                let ordering = a.compare(b);
                match query.sort_direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
            matched = keyed.into_iter().map(|(_, r)| r).collect();
        }

        let limit = query.limit.clamp(1, self.max_page_size);
        let pagination = PaginationInfo::new(query.page, limit, matched.len() as u64);

        let start = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let rows = matched
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        TablePage { rows, pagination }
    }
}
