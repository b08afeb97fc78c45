use std::ops::Range;

pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 15];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        let page_size = if PAGE_SIZE_OPTIONS.contains(&page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            page_index: 0,
            page_size,
        }
    }

    /// Number of pages for `total` rows. An empty table still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&mut self, page_index: usize, total: usize) {
        self.page_index = page_index.min(self.page_count(total) - 1);
    }

    pub fn next_page(&mut self, total: usize) {
        self.set_page(self.page_index + 1, total);
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Returns false for sizes outside [`PAGE_SIZE_OPTIONS`].
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return false;
        }
        self.page_size = page_size;
        self.page_index = 0;
        true
    }

    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    pub fn clamp(&mut self, total: usize) {
        self.set_page(self.page_index, total);
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn summary(&self, total: usize) -> String {
        if total == 0 {
            return "Showing 0 entries".to_string();
        }
        let range = self.range(total);
        format!(
            "Showing {} to {} of {} entries",
            range.start + 1,
            range.end,
            total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_of_twelve_by_five() {
        let mut pagination = PaginationState::new(5);
        assert_eq!(pagination.page_count(12), 3);
        assert_eq!(pagination.range(12), 0..5);

        pagination.set_page(1, 12);
        assert_eq!(pagination.range(12), 5..10);

        pagination.set_page(2, 12);
        assert_eq!(pagination.range(12), 10..12);
        assert_eq!(pagination.summary(12), "Showing 11 to 12 of 12 entries");
    }

    #[test]
    fn test_set_page_clamps() {
        let mut pagination = PaginationState::new(5);
        pagination.set_page(9, 12);
        assert_eq!(pagination.page_index, 2);

        pagination.set_page(3, 0);
        assert_eq!(pagination.page_index, 0);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut pagination = PaginationState::new(5);
        pagination.set_page(2, 12);
        assert!(pagination.set_page_size(10));
        assert_eq!(pagination.page_index, 0);
        assert_eq!(pagination.range(12), 0..10);
    }

    #[test]
    fn test_rejects_unknown_page_size() {
        let mut pagination = PaginationState::new(5);
        pagination.set_page(1, 12);
        assert!(!pagination.set_page_size(7));
        assert_eq!(pagination.page_size, 5);
        assert_eq!(pagination.page_index, 1);

        assert_eq!(PaginationState::new(42).page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut pagination = PaginationState::new(10);
        assert!(!pagination.can_previous());
        assert!(pagination.can_next(12));

        pagination.next_page(12);
        assert_eq!(pagination.page_index, 1);
        assert!(!pagination.can_next(12));

        pagination.next_page(12);
        assert_eq!(pagination.page_index, 1);

        pagination.previous_page();
        pagination.previous_page();
        assert_eq!(pagination.page_index, 0);
    }

    #[test]
    fn test_empty_summary() {
        let pagination = PaginationState::default();
        assert_eq!(pagination.summary(0), "Showing 0 entries");
        assert_eq!(pagination.range(0), 0..0);
    }
}
