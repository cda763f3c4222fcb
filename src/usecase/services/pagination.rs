use std::ops::Range;

pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 10;
const MAX_PAGE_BUTTONS: usize = 5;

pub fn is_valid_page_size(size: usize) -> bool {
    PAGE_SIZES.contains(&size)
}

/// One page of a list. `page` is 1-based and always within
/// `1..=max(total_pages, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pagination {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = if is_valid_page_size(page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        let last = total.div_ceil(page_size).max(1);
        Self {
            page: page.clamp(1, last),
            page_size,
            total,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (self.page * self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        let total_pages = self.total_pages();
        if total_pages == 0 {
            return Vec::new();
        }
        let mut start = self.page.saturating_sub(2).max(1);
        let end = (start + MAX_PAGE_BUTTONS - 1).min(total_pages);
        if end + 1 - start < MAX_PAGE_BUTTONS {
            start = (end + 1).saturating_sub(MAX_PAGE_BUTTONS).max(1);
        }
        (start..=end).collect()
    }

    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "Tidak ada data".to_string();
        }
        let range = self.range();
        format!(
            "Menampilkan {} sampai {} dari {} data",
            range.start + 1,
            range.end,
            self.total
        )
    }
}
