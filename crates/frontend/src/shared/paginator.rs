//! Клиентская пагинация загруженного списка.
//!
//! Состояние: только `(items, page_size, current_page)`; видимая страница
//! пересчитывается при каждом чтении.

use thiserror::Error;

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Варианты для селектора размера страницы
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginatorError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    /// 1-based, всегда в `[1, total_pages()]`
    current_page: usize,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl<T: Clone> Paginator<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        let mut paginator = Self::default();
        paginator.initialize(items, page_size);
        paginator
    }

    /// Новый набор данных и размер страницы; текущая страница сбрасывается на 1.
    /// Нулевой размер страницы заменяется на 1.
    pub fn initialize(&mut self, items: Vec<T>, page_size: usize) {
        self.items = items;
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), PaginatorError> {
        if page_size == 0 {
            return Err(PaginatorError::ZeroPageSize);
        }
        self.page_size = page_size;
        self.clamp();
        Ok(())
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn last_page(&mut self) {
        self.current_page = self.total_pages();
    }

    pub fn visible_page(&self) -> Vec<T> {
        let start = (self.current_page - 1) * self.page_size;
        self.items
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect()
    }

    fn clamp(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }
}

impl<T> Paginator<T> {
    pub fn total_item_count(&self) -> usize {
        self.items.len()
    }

    /// Пустой список даёт одну пустую страницу
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// 1-based диапазон позиций на текущей странице, `None` для пустого списка
    pub fn page_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        let last = (self.current_page * self.page_size).min(self.items.len());
        Some((first, last))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_three_items_two_per_page() {
        let mut p = Paginator::new(numbers(3), 2);
        assert_eq!(p.total_pages(), 2);
        assert_eq!(p.visible_page(), vec![1, 2]);
        p.next_page();
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.visible_page(), vec![3]);
    }

    #[test]
    fn test_total_pages_matches_ceil() {
        for len in 0..30 {
            for size in 1..8 {
                let p = Paginator::new(numbers(len), size);
                let expected = if len == 0 { 1 } else { (len + size - 1) / size };
                assert_eq!(p.total_pages(), expected, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn test_pages_reconstruct_items() {
        for len in 0..25 {
            for size in 1..7 {
                let mut p = Paginator::new(numbers(len), size);
                let mut collected = Vec::new();
                for page in 1..=p.total_pages() {
                    p.go_to_page(page);
                    let visible = p.visible_page();
                    assert!(visible.len() <= size);
                    collected.extend(visible);
                }
                assert_eq!(collected, numbers(len));
            }
        }
    }

    #[test]
    fn test_boundaries_do_not_wrap() {
        let mut p = Paginator::new(numbers(10), 3);
        p.prev_page();
        assert_eq!(p.current_page(), 1);
        p.last_page();
        assert_eq!(p.current_page(), 4);
        p.next_page();
        assert_eq!(p.current_page(), 4);
        assert!(!p.has_next());
        p.first_page();
        assert!(!p.has_prev());
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut p = Paginator::new(numbers(10), 3);
        p.go_to_page(0);
        assert_eq!(p.current_page(), 1);
        p.go_to_page(99);
        assert_eq!(p.current_page(), 4);
        p.go_to_page(4);
        assert_eq!(p.current_page(), 4);
    }

    #[test]
    fn test_set_page_size_reclamps_high_page() {
        let mut p = Paginator::new(numbers(20), 2);
        p.go_to_page(10);
        p.set_page_size(5).unwrap();
        assert_eq!(p.current_page(), 4);
        assert_eq!(p.visible_page(), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let mut p = Paginator::new(numbers(5), 2);
        p.go_to_page(2);
        assert_eq!(p.set_page_size(0), Err(PaginatorError::ZeroPageSize));
        assert_eq!(p.page_size(), 2);
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn test_empty_set_is_single_empty_page() {
        let mut p: Paginator<usize> = Paginator::new(Vec::new(), 10);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.current_page(), 1);
        assert!(p.visible_page().is_empty());
        assert_eq!(p.page_range(), None);
        p.next_page();
        p.set_page_size(3).unwrap();
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_initialize_resets_page() {
        let mut p = Paginator::new(numbers(9), 3);
        p.last_page();
        p.initialize(numbers(9), 3);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_item_count(), 9);
    }

    #[test]
    fn test_page_range() {
        let mut p = Paginator::new(numbers(42), 10);
        assert_eq!(p.page_range(), Some((1, 10)));
        p.last_page();
        assert_eq!(p.page_range(), Some((41, 42)));
    }
}
