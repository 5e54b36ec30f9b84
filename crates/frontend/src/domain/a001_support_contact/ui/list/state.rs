use crate::shared::paginator::{Paginator, DEFAULT_PAGE_SIZE};
use contracts::domain::a001_support_contact::aggregate::SupportContact;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SupportContactListState {
    pub paginator: Paginator<SupportContact>,
    pub is_loaded: bool,
    pub is_loading: bool,
    pub load_error: Option<String>,
}

impl Default for SupportContactListState {
    fn default() -> Self {
        Self {
            paginator: Paginator::new(Vec::new(), DEFAULT_PAGE_SIZE),
            is_loaded: false,
            is_loading: false,
            load_error: None,
        }
    }
}

impl SupportContactListState {
    /// Свежий набор с сервера: пагинатор инициализируется заново (страница 1,
    /// размер страницы сохраняется), ошибка загрузки сбрасывается.
    pub fn apply_fetched(&mut self, items: Vec<SupportContact>) {
        let page_size = self.paginator.page_size();
        self.paginator.initialize(items, page_size);
        self.is_loaded = true;
        self.is_loading = false;
        self.load_error = None;
    }

    pub fn apply_failed(&mut self, error: String) {
        self.load_error = Some(error);
        self.is_loading = false;
    }
}

pub fn create_state() -> RwSignal<SupportContactListState> {
    RwSignal::new(SupportContactListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts(n: i64) -> Vec<SupportContact> {
        (1..=n)
            .map(|id| SupportContact {
                id,
                name: format!("Contact {id}"),
                number: String::new(),
                message: String::new(),
                is_brand: false,
                category_name: None,
                category_code: None,
            })
            .collect()
    }

    #[test]
    fn test_fetched_set_resets_to_first_page() {
        let mut state = SupportContactListState::default();
        state.apply_fetched(contacts(25));
        state.paginator.go_to_page(3);
        assert_eq!(state.paginator.current_page(), 3);

        // after deleting one record on page 3
        state.apply_fetched(contacts(24));
        assert_eq!(state.paginator.current_page(), 1);
        assert_eq!(state.paginator.total_pages(), 3);
        assert_eq!(state.paginator.visible_page()[0].id, 1);
    }

    #[test]
    fn test_fetched_set_keeps_page_size() {
        let mut state = SupportContactListState::default();
        state.paginator.set_page_size(5).unwrap();
        state.apply_fetched(contacts(12));
        assert_eq!(state.paginator.page_size(), 5);
        assert_eq!(state.paginator.total_pages(), 3);
    }

    #[test]
    fn test_shrinking_set_recomputes_pages() {
        let mut state = SupportContactListState::default();
        state.apply_fetched(contacts(21));
        state.paginator.last_page();
        assert_eq!(state.paginator.visible_page().len(), 1);

        state.apply_fetched(contacts(3));
        assert_eq!(state.paginator.total_pages(), 1);
        assert_eq!(state.paginator.current_page(), 1);
        assert_eq!(state.paginator.visible_page().len(), 3);

        state.apply_fetched(Vec::new());
        assert_eq!(state.paginator.total_pages(), 1);
        assert!(state.paginator.visible_page().is_empty());
    }

    #[test]
    fn test_fetch_clears_previous_error() {
        let mut state = SupportContactListState::default();
        state.is_loading = true;
        state.apply_failed("HTTP 500".into());
        assert_eq!(state.load_error.as_deref(), Some("HTTP 500"));
        assert!(!state.is_loading);
        assert!(!state.is_loaded);

        state.apply_fetched(contacts(2));
        assert_eq!(state.load_error, None);
        assert!(state.is_loaded);
    }
}
