use super::actions::{ActionCoordinator, ActionError, DraftField, Effect, Notice};
use super::state::{create_state, SupportContactListState};
use crate::domain::a001_support_contact::api;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_support_contact::aggregate::SupportContact;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel списка обращений: пагинатор + координатор модальных окон.
///
/// Координатор возвращает эффекты, здесь они исполняются: запросы уходят в
/// `api`, результаты возвращаются обратно в координатор.
#[derive(Clone, Copy)]
pub struct SupportContactListViewModel {
    pub list: RwSignal<SupportContactListState>,
    pub actions: RwSignal<ActionCoordinator>,
    notifications: NotificationService,
}

impl SupportContactListViewModel {
    pub fn new(notifications: NotificationService) -> Self {
        Self {
            list: create_state(),
            actions: RwSignal::new(ActionCoordinator::new()),
            notifications,
        }
    }

    // ------------------------------------------------------------------
    // Загрузка
    // ------------------------------------------------------------------

    /// Первичная загрузка: набор данных заменяется, страница сбрасывается на 1
    pub fn load(&self) {
        let list = self.list;
        list.update(|s| {
            s.is_loading = true;
            s.load_error = None;
        });
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(items) => {
                    log::debug!("support contacts loaded: {}", items.len());
                    list.update(|s| s.apply_fetched(items));
                }
                Err(e) => {
                    log::error!("failed to load support contacts: {}", e);
                    list.update(|s| s.apply_failed(e));
                }
            }
        });
    }

    /// Перечитывание после мутации: пагинатор инициализируется заново
    fn refresh(&self) {
        let list = self.list;
        let notifications = self.notifications;
        list.update(|s| s.is_loading = true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(items) => list.update(|s| s.apply_fetched(items)),
                Err(e) => {
                    notifications.notify_failure(format!("Failed to reload contacts: {}", e));
                    list.update(|s| s.apply_failed(e));
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Пагинация
    // ------------------------------------------------------------------

    pub fn visible_page(&self) -> Vec<SupportContact> {
        self.list.with(|s| s.paginator.visible_page())
    }

    pub fn go_to_page(&self, page: usize) {
        self.list.update(|s| s.paginator.go_to_page(page));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.list.update(|s| {
            if let Err(e) = s.paginator.set_page_size(page_size) {
                log::warn!("{}", e);
            }
        });
    }

    // ------------------------------------------------------------------
    // Действия над записями
    // ------------------------------------------------------------------

    pub fn open_view(&self, record: SupportContact) {
        self.apply(|c| vec![c.open_view(record)]);
    }

    pub fn open_edit(&self, record: SupportContact) {
        self.apply(|c| vec![c.open_edit(record)]);
    }

    pub fn open_delete(&self, record: SupportContact) {
        self.apply(|c| vec![c.open_delete(record)]);
    }

    pub fn open_create(&self) {
        self.actions.update(|c| c.open_create());
    }

    pub fn cancel(&self) {
        self.actions.update(|c| c.cancel());
    }

    pub fn update_draft(&self, field: DraftField, value: String) {
        self.actions.update(|c| {
            if let Err(e) = c.update_draft(field, value) {
                log::debug!("draft update ignored: {}", e);
            }
        });
    }

    pub fn confirm_edit(&self) {
        self.confirm_with(ActionCoordinator::confirm_edit);
    }

    pub fn confirm_create(&self) {
        self.confirm_with(ActionCoordinator::confirm_create);
    }

    pub fn confirm_delete(&self) {
        self.confirm_with(ActionCoordinator::confirm_delete);
    }

    fn confirm_with(&self, confirm: fn(&mut ActionCoordinator) -> Result<Effect, ActionError>) {
        self.apply(|c| match confirm(c) {
            Ok(effect) => vec![effect],
            // validation message is rendered by the form itself
            Err(ActionError::Validation(_)) => Vec::new(),
            Err(e) => {
                log::debug!("confirm ignored: {}", e);
                Vec::new()
            }
        });
    }

    fn apply(&self, f: impl FnOnce(&mut ActionCoordinator) -> Vec<Effect>) {
        let mut effects = Vec::new();
        self.actions.update(|c| effects = f(c));
        self.run(effects);
    }

    fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Lookup(id) => {
                    let vm = *self;
                    spawn_local(async move {
                        match api::fetch_by_id(id).await {
                            Ok(record) => vm.actions.update(|c| c.lookup_resolved(record)),
                            Err(e) => {
                                log::error!("lookup of contact {} failed: {}", id, e);
                                let message = format!("Failed to load record: {}", e);
                                vm.apply(|c| c.lookup_failed(id, &message).into_iter().collect());
                            }
                        }
                    });
                }
                Effect::Submit(mutation) => {
                    let vm = *self;
                    spawn_local(async move {
                        let outcome = api::submit(&mutation).await;
                        if let Err(e) = &outcome {
                            log::error!("{:?} failed: {}", mutation, e);
                        }
                        vm.apply(|c| c.mutation_settled(&mutation, outcome));
                    });
                }
                Effect::Notify(Notice::Success(message)) => {
                    self.notifications.notify_success(message)
                }
                Effect::Notify(Notice::Failure(message)) => {
                    self.notifications.notify_failure(message)
                }
                Effect::Refresh => self.refresh(),
            }
        }
    }
}
