pub mod column;
pub mod field;
pub mod pagination;
pub mod query;

pub use column::{render_rows, ColumnHeader, SortIndicator, TableColumn};
pub use field::{compare_text, Field, FieldValue};
pub use pagination::{page_window, PageItem, PageWindow, PaginationInfo, MAX_VISIBLE_PAGES};
pub use query::{
    FilterMode, SortDirection, TableEngine, TablePage, TableQuery, ALL_FILTER, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
