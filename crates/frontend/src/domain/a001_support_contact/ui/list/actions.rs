//! Состояние модальных окон списка обращений (просмотр / редактирование /
//! удаление / создание).
//!
//! Координатор синхронный: каждая операция меняет `ActionState` и возвращает
//! эффекты (`Effect`), которые исполняет view model. Результаты запросов
//! возвращаются обратно через `lookup_resolved` / `lookup_failed` /
//! `mutation_settled`.
//!
//! Перекрывающиеся действия не сериализуются: если пользователь открыл другое
//! окно до завершения запроса, завершение всё равно переводит состояние в
//! `Idle` и запускает обновление списка.

use crate::domain::a001_support_contact::api::Mutation;
use contracts::domain::a001_support_contact::aggregate::{SupportContact, SupportContactId};
use contracts::domain::a001_support_contact::dto::{
    DraftError, MutationResponse, SupportContactDraft,
};
use std::fmt;
use thiserror::Error;

pub const MSG_UPDATED: &str = "Successfully updated.";
pub const MSG_ADDED: &str = "Successfully added.";
pub const MSG_DELETED: &str = "Successfully Deleted.";
pub const MSG_BACKEND_FAILED: &str = "Request failed.";
pub const MSG_TRANSPORT_FAILED: &str = "Request failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Idle,
    Viewing,
    Editing,
    ConfirmingDelete,
    Creating,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Idle => "Idle",
            ActionKind::Viewing => "Viewing",
            ActionKind::Editing => "Editing",
            ActionKind::ConfirmingDelete => "ConfirmingDelete",
            ActionKind::Creating => "Creating",
        };
        f.write_str(name)
    }
}

/// Активное модальное окно. Одновременно открыто не больше одного.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Viewing {
        record: SupportContact,
        /// Ждём свежую копию с сервера; пока показываем строку списка
        loading: bool,
    },
    Editing {
        record: SupportContact,
        draft: SupportContactDraft,
        error: Option<DraftError>,
        loading: bool,
        submitting: bool,
    },
    ConfirmingDelete {
        record: SupportContact,
        loading: bool,
        submitting: bool,
    },
    Creating {
        draft: SupportContactDraft,
        error: Option<DraftError>,
        submitting: bool,
    },
}

impl ActionState {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionState::Idle => ActionKind::Idle,
            ActionState::Viewing { .. } => ActionKind::Viewing,
            ActionState::Editing { .. } => ActionKind::Editing,
            ActionState::ConfirmingDelete { .. } => ActionKind::ConfirmingDelete,
            ActionState::Creating { .. } => ActionKind::Creating,
        }
    }

    /// Запись, к которой относится окно
    pub fn record(&self) -> Option<&SupportContact> {
        match self {
            ActionState::Viewing { record, .. }
            | ActionState::Editing { record, .. }
            | ActionState::ConfirmingDelete { record, .. } => Some(record),
            ActionState::Idle | ActionState::Creating { .. } => None,
        }
    }

    pub fn draft(&self) -> Option<&SupportContactDraft> {
        match self {
            ActionState::Editing { draft, .. } | ActionState::Creating { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<DraftError> {
        match self {
            ActionState::Editing { error, .. } | ActionState::Creating { error, .. } => *error,
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            ActionState::Viewing { loading, .. }
            | ActionState::Editing { loading, .. }
            | ActionState::ConfirmingDelete { loading, .. } => *loading,
            _ => false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        match self {
            ActionState::Editing { submitting, .. }
            | ActionState::ConfirmingDelete { submitting, .. }
            | ActionState::Creating { submitting, .. } => *submitting,
            _ => false,
        }
    }
}

fn success_message(mutation: &Mutation) -> &'static str {
    match mutation {
        Mutation::Update { .. } => MSG_UPDATED,
        Mutation::Create(_) => MSG_ADDED,
        Mutation::Delete(_) => MSG_DELETED,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

/// Побочные эффекты, которые исполняет view model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Lookup(SupportContactId),
    Submit(Mutation),
    Notify(Notice),
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0}")]
    Validation(#[from] DraftError),
    #[error("not in {expected} state (current: {actual})")]
    InvalidState {
        expected: ActionKind,
        actual: ActionKind,
    },
    #[error("request already in progress")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionCoordinator {
    state: ActionState,
}

impl ActionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ActionState {
        &self.state
    }

    fn invalid(&self, expected: ActionKind) -> ActionError {
        ActionError::InvalidState {
            expected,
            actual: self.state.kind(),
        }
    }

    // ------------------------------------------------------------------
    // Открытие / закрытие окон
    // ------------------------------------------------------------------

    pub fn open_view(&mut self, record: SupportContact) -> Effect {
        let id = record.id;
        self.state = ActionState::Viewing {
            record,
            loading: true,
        };
        Effect::Lookup(id)
    }

    pub fn open_edit(&mut self, record: SupportContact) -> Effect {
        let id = record.id;
        self.state = ActionState::Editing {
            draft: SupportContactDraft::from(&record),
            record,
            error: None,
            loading: true,
            submitting: false,
        };
        Effect::Lookup(id)
    }

    pub fn open_delete(&mut self, record: SupportContact) -> Effect {
        let id = record.id;
        self.state = ActionState::ConfirmingDelete {
            record,
            loading: true,
            submitting: false,
        };
        Effect::Lookup(id)
    }

    pub fn open_create(&mut self) {
        self.state = ActionState::Creating {
            draft: SupportContactDraft::default(),
            error: None,
            submitting: false,
        };
    }

    /// Закрывает окно, несохранённый черновик теряется
    pub fn cancel(&mut self) {
        self.state = ActionState::Idle;
    }

    pub fn update_draft(&mut self, field: DraftField, value: String) -> Result<(), ActionError> {
        match &mut self.state {
            ActionState::Editing { draft, .. } | ActionState::Creating { draft, .. } => {
                match field {
                    DraftField::Name => draft.name = value,
                    DraftField::Code => draft.code = value,
                }
                Ok(())
            }
            _ => Err(self.invalid(ActionKind::Editing)),
        }
    }

    // ------------------------------------------------------------------
    // Подтверждение
    // ------------------------------------------------------------------

    pub fn confirm_edit(&mut self) -> Result<Effect, ActionError> {
        let ActionState::Editing {
            record,
            draft,
            error,
            submitting,
            ..
        } = &mut self.state
        else {
            return Err(self.invalid(ActionKind::Editing));
        };
        if *submitting {
            return Err(ActionError::AlreadySubmitting);
        }
        if let Err(e) = draft.validate() {
            *error = Some(e);
            return Err(e.into());
        }
        *error = None;
        *submitting = true;
        Ok(Effect::Submit(Mutation::Update {
            id: record.id,
            draft: draft.clone(),
        }))
    }

    pub fn confirm_create(&mut self) -> Result<Effect, ActionError> {
        let ActionState::Creating {
            draft,
            error,
            submitting,
        } = &mut self.state
        else {
            return Err(self.invalid(ActionKind::Creating));
        };
        if *submitting {
            return Err(ActionError::AlreadySubmitting);
        }
        if let Err(e) = draft.validate() {
            *error = Some(e);
            return Err(e.into());
        }
        *error = None;
        *submitting = true;
        Ok(Effect::Submit(Mutation::Create(draft.clone())))
    }

    pub fn confirm_delete(&mut self) -> Result<Effect, ActionError> {
        let ActionState::ConfirmingDelete {
            record, submitting, ..
        } = &mut self.state
        else {
            return Err(self.invalid(ActionKind::ConfirmingDelete));
        };
        if *submitting {
            return Err(ActionError::AlreadySubmitting);
        }
        *submitting = true;
        Ok(Effect::Submit(Mutation::Delete(record.id)))
    }

    // ------------------------------------------------------------------
    // Завершение запросов
    // ------------------------------------------------------------------

    /// Свежая копия записи. Применяется только если окно всё ещё открыто для
    /// той же записи; черновик пересобирается, только если его не меняли.
    pub fn lookup_resolved(&mut self, fresh: SupportContact) {
        match &mut self.state {
            ActionState::Viewing { record, loading }
            | ActionState::ConfirmingDelete {
                record, loading, ..
            } if record.id == fresh.id => {
                *record = fresh;
                *loading = false;
            }
            ActionState::Editing {
                record,
                draft,
                loading,
                ..
            } if record.id == fresh.id => {
                if *draft == SupportContactDraft::from(&*record) {
                    *draft = SupportContactDraft::from(&fresh);
                }
                *record = fresh;
                *loading = false;
            }
            _ => {}
        }
    }

    /// Окно остаётся открытым со снимком из списка
    pub fn lookup_failed(&mut self, id: SupportContactId, message: &str) -> Option<Effect> {
        match &mut self.state {
            ActionState::Viewing { record, loading }
            | ActionState::Editing {
                record, loading, ..
            }
            | ActionState::ConfirmingDelete {
                record, loading, ..
            } if record.id == id => {
                *loading = false;
                Some(Effect::Notify(Notice::Failure(message.to_string())))
            }
            _ => None,
        }
    }

    /// Итог create/update/delete. Окно закрывается и список перечитывается
    /// при любом исходе, в том числе при отказе бэкенда.
    pub fn mutation_settled(
        &mut self,
        mutation: &Mutation,
        outcome: Result<MutationResponse, String>,
    ) -> Vec<Effect> {
        let notice = match outcome {
            Ok(resp) if resp.success => Notice::Success(success_message(mutation).to_string()),
            Ok(resp) => Notice::Failure(
                resp.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| MSG_BACKEND_FAILED.to_string()),
            ),
            Err(_) => Notice::Failure(MSG_TRANSPORT_FAILED.to_string()),
        };
        self.state = ActionState::Idle;
        vec![Effect::Notify(notice), Effect::Refresh]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: SupportContactId) -> SupportContact {
        SupportContact {
            id,
            name: format!("Contact {id}"),
            number: "555-0100".into(),
            message: "hello".into(),
            is_brand: id % 2 == 0,
            category_name: Some("Food".into()),
            category_code: Some("F01".into()),
        }
    }

    #[test]
    fn test_open_view_requests_lookup() {
        let mut c = ActionCoordinator::new();
        assert_eq!(c.open_view(record(1)), Effect::Lookup(1));
        assert_eq!(c.state().kind(), ActionKind::Viewing);
        assert!(c.state().is_loading());

        let mut fresh = record(1);
        fresh.category_name = Some("Drinks".into());
        c.lookup_resolved(fresh.clone());
        assert_eq!(c.state().record(), Some(&fresh));
        assert!(!c.state().is_loading());
    }

    #[test]
    fn test_stale_lookup_is_ignored() {
        let mut c = ActionCoordinator::new();
        c.open_view(record(1));
        c.open_view(record(2));
        c.lookup_resolved(record(1));
        assert_eq!(c.state().record().map(|r| r.id), Some(2));
        assert!(c.state().is_loading());
    }

    #[test]
    fn test_open_edit_copies_editable_fields() {
        let mut c = ActionCoordinator::new();
        c.open_edit(record(1));
        assert_eq!(
            c.state().draft(),
            Some(&SupportContactDraft::new("Food", "F01"))
        );
    }

    #[test]
    fn test_lookup_reseeds_untouched_draft_only() {
        let mut c = ActionCoordinator::new();
        c.open_edit(record(1));
        let mut fresh = record(1);
        fresh.category_code = Some("F02".into());
        c.lookup_resolved(fresh.clone());
        assert_eq!(c.state().draft().unwrap().code, "F02");

        c.open_edit(record(1));
        c.update_draft(DraftField::Name, "Typed".into()).unwrap();
        c.lookup_resolved(fresh);
        assert_eq!(
            c.state().draft(),
            Some(&SupportContactDraft::new("Typed", "F01"))
        );
    }

    #[test]
    fn test_edit_then_cancel_discards_draft() {
        let mut c = ActionCoordinator::new();
        c.open_edit(record(1));
        c.update_draft(DraftField::Name, "Changed".into()).unwrap();
        c.cancel();
        assert_eq!(c.state(), &ActionState::Idle);
        assert_eq!(
            c.confirm_edit(),
            Err(ActionError::InvalidState {
                expected: ActionKind::Editing,
                actual: ActionKind::Idle,
            })
        );
    }

    #[test]
    fn test_empty_name_fails_validation_and_stays_editing() {
        let mut c = ActionCoordinator::new();
        c.open_edit(record(1));
        c.update_draft(DraftField::Name, String::new()).unwrap();
        let err = c.confirm_edit().unwrap_err();
        assert_eq!(err, ActionError::Validation(DraftError::MissingName));
        assert_eq!(err.to_string(), "Enter the name.");
        assert_eq!(c.state().kind(), ActionKind::Editing);
        assert_eq!(c.state().error(), Some(DraftError::MissingName));
        assert!(!c.state().is_submitting());
    }

    #[test]
    fn test_only_first_validation_error_is_reported() {
        let mut c = ActionCoordinator::new();
        c.open_create();
        assert_eq!(
            c.confirm_create(),
            Err(ActionError::Validation(DraftError::MissingName))
        );
        c.update_draft(DraftField::Name, "Food".into()).unwrap();
        assert_eq!(
            c.confirm_create(),
            Err(ActionError::Validation(DraftError::MissingCode))
        );
        assert_eq!(c.state().error(), Some(DraftError::MissingCode));
    }

    #[test]
    fn test_error_cleared_when_state_changes() {
        let mut c = ActionCoordinator::new();
        c.open_create();
        let _ = c.confirm_create();
        assert!(c.state().error().is_some());
        c.open_edit(record(4));
        assert_eq!(c.state().error(), None);
    }

    #[test]
    fn test_confirm_edit_submits_once() {
        let mut c = ActionCoordinator::new();
        c.open_edit(record(3));
        c.update_draft(DraftField::Code, "F09".into()).unwrap();
        let effect = c.confirm_edit().unwrap();
        assert_eq!(
            effect,
            Effect::Submit(Mutation::Update {
                id: 3,
                draft: SupportContactDraft::new("Food", "F09"),
            })
        );
        assert!(c.state().is_submitting());
        assert_eq!(c.confirm_edit(), Err(ActionError::AlreadySubmitting));
    }

    #[test]
    fn test_whitespace_name_is_submitted_as_is() {
        let mut c = ActionCoordinator::new();
        c.open_edit(record(3));
        c.update_draft(DraftField::Name, " ".into()).unwrap();
        assert_eq!(
            c.confirm_edit(),
            Ok(Effect::Submit(Mutation::Update {
                id: 3,
                draft: SupportContactDraft::new(" ", "F01"),
            }))
        );
    }

    #[test]
    fn test_update_draft_outside_form_is_rejected() {
        let mut c = ActionCoordinator::new();
        c.open_view(record(1));
        assert!(c.update_draft(DraftField::Name, "x".into()).is_err());
        c.open_delete(record(1));
        assert!(c.update_draft(DraftField::Code, "x".into()).is_err());
    }

    #[test]
    fn test_entering_new_state_discards_previous_draft() {
        let mut c = ActionCoordinator::new();
        c.open_create();
        c.update_draft(DraftField::Name, "Unsaved".into()).unwrap();
        c.open_view(record(2));
        c.open_create();
        assert_eq!(c.state().draft(), Some(&SupportContactDraft::default()));
    }

    #[test]
    fn test_delete_backend_failure_notifies_and_refreshes() {
        let mut c = ActionCoordinator::new();
        c.open_delete(record(5));
        let Effect::Submit(mutation) = c.confirm_delete().unwrap() else {
            panic!("expected submit");
        };
        assert_eq!(mutation, Mutation::Delete(5));

        let effects = c.mutation_settled(&mutation, Ok(MutationResponse::failed("not found")));
        assert_eq!(
            effects,
            vec![
                Effect::Notify(Notice::Failure("not found".into())),
                Effect::Refresh
            ]
        );
        assert_eq!(c.state(), &ActionState::Idle);
    }

    #[test]
    fn test_successful_mutations_use_fixed_messages() {
        let cases = [
            (Mutation::Create(SupportContactDraft::new("a", "b")), MSG_ADDED),
            (
                Mutation::Update {
                    id: 1,
                    draft: SupportContactDraft::new("a", "b"),
                },
                MSG_UPDATED,
            ),
            (Mutation::Delete(1), MSG_DELETED),
        ];
        for (mutation, message) in cases {
            let mut c = ActionCoordinator::new();
            let effects = c.mutation_settled(&mutation, Ok(MutationResponse::ok("saved")));
            assert_eq!(effects[0], Effect::Notify(Notice::Success(message.into())));
            assert_eq!(effects[1], Effect::Refresh);
        }
    }

    #[test]
    fn test_transport_failure_uses_generic_message() {
        let mut c = ActionCoordinator::new();
        c.open_create();
        c.update_draft(DraftField::Name, "n".into()).unwrap();
        c.update_draft(DraftField::Code, "c".into()).unwrap();
        let Effect::Submit(mutation) = c.confirm_create().unwrap() else {
            panic!("expected submit");
        };
        let effects = c.mutation_settled(&mutation, Err("HTTP 502".into()));
        assert_eq!(
            effects[0],
            Effect::Notify(Notice::Failure(MSG_TRANSPORT_FAILED.into()))
        );
        assert_eq!(c.state(), &ActionState::Idle);
    }

    #[test]
    fn test_backend_failure_without_message() {
        let mut c = ActionCoordinator::new();
        let effects = c.mutation_settled(
            &Mutation::Delete(1),
            Ok(MutationResponse {
                success: false,
                message: None,
            }),
        );
        assert_eq!(
            effects[0],
            Effect::Notify(Notice::Failure(MSG_BACKEND_FAILED.into()))
        );
    }

    #[test]
    fn test_lookup_failure_keeps_modal_open() {
        let mut c = ActionCoordinator::new();
        c.open_delete(record(8));
        let effect = c.lookup_failed(8, "HTTP 404");
        assert_eq!(
            effect,
            Some(Effect::Notify(Notice::Failure("HTTP 404".into())))
        );
        assert_eq!(c.state().kind(), ActionKind::ConfirmingDelete);
        assert!(!c.state().is_loading());
        assert_eq!(c.lookup_failed(9, "HTTP 404"), None);
    }
}
