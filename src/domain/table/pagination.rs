use serde::{Deserialize, Serialize};

pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Pagination metadata for one query result.
///
/// `total_pages` is `ceil(total / limit)`, which is `0` for an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl PaginationInfo {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(u64::from(limit));
        Self {
            page: page.max(1),
            limit,
            total,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// 1-based inclusive bounds for "Showing X to Y of Z"; `None` when the page is empty.
    pub fn showing(&self) -> Option<(u64, u64)> {
        let start = self.offset() + 1;
        if start > self.total {
            return None;
        }
        let end = (self.offset() + u64::from(self.limit)).min(self.total);
        Some((start, end))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn window(&self) -> PageWindow {
        page_window(self.page, self.total_pages)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PageItem {
    Page { number: u32, current: bool },
    Ellipsis,
}

/// Page-number controls to display around the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub current: u32,
    pub total_pages: u32,
    pub pages: Vec<u32>,
    pub first_page_link: bool,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
    pub last_page_link: bool,
}

impl PageWindow {
    /// Flattened controls: optional first page, ellipsis, window, ellipsis, last page.
    pub fn items(&self) -> Vec<PageItem> {
        let page = |number: u32| PageItem::Page {
            number,
            current: number == self.current,
        };

        let mut items = Vec::with_capacity(self.pages.len() + 4);
        if self.first_page_link {
            items.push(page(1));
        }
        if self.leading_ellipsis {
            items.push(PageItem::Ellipsis);
        }
        items.extend(self.pages.iter().map(|n| page(*n)));
        if self.trailing_ellipsis {
            items.push(PageItem::Ellipsis);
        }
        if self.last_page_link {
            items.push(page(self.total_pages));
        }
        items
    }
}

/// At most [`MAX_VISIBLE_PAGES`] consecutive pages centred on `page`. A window
/// clipped at one end grows at the other until it is full or runs out of pages.
pub fn page_window(page: u32, total_pages: u32) -> PageWindow {
    if total_pages == 0 {
        return PageWindow {
            current: page.max(1),
            total_pages: 0,
            pages: Vec::new(),
            first_page_link: false,
            leading_ellipsis: false,
            trailing_ellipsis: false,
            last_page_link: false,
        };
    }

    let current = page.clamp(1, total_pages);
    let half = MAX_VISIBLE_PAGES / 2;

    let mut start = current.saturating_sub(half).max(1);
    let mut end = current.saturating_add(half).min(total_pages);

    if end - start + 1 < MAX_VISIBLE_PAGES {
        if start == 1 {
            end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
        } else {
            start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
        }
    }

    PageWindow {
        current,
        total_pages,
        pages: (start..=end).collect(),
        first_page_link: start > 1,
        leading_ellipsis: start > 2,
        trailing_ellipsis: end + 1 < total_pages,
        last_page_link: end < total_pages,
    }
}
