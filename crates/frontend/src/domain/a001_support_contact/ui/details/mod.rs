use super::list::actions::{ActionKind, DraftField};
use super::list::view_model::SupportContactListViewModel;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;

/// Активное модальное окно списка (или ничего в состоянии `Idle`).
///
/// Перерисовывается только при смене вида окна, чтобы ввод в форме не
/// сбрасывал фокус.
#[component]
pub fn ActionModal(vm: SupportContactListViewModel) -> impl IntoView {
    let kind = Memo::new(move |_| vm.actions.with(|c| c.state().kind()));
    let on_close = Callback::new(move |_| vm.cancel());

    move || match kind.get() {
        ActionKind::Idle => view! { <></> }.into_any(),
        ActionKind::Viewing => view! {
            <ModalFrame on_close=on_close modal_class="support-modal">
                <ViewBody vm=vm />
            </ModalFrame>
        }
        .into_any(),
        ActionKind::ConfirmingDelete => view! {
            <ModalFrame on_close=on_close modal_class="support-modal">
                <DeleteBody vm=vm />
            </ModalFrame>
        }
        .into_any(),
        ActionKind::Editing => view! {
            <ModalFrame on_close=on_close modal_class="support-modal" width="20rem">
                <DraftForm vm=vm on_submit=Callback::new(move |_| vm.confirm_edit()) />
            </ModalFrame>
        }
        .into_any(),
        ActionKind::Creating => view! {
            <ModalFrame on_close=on_close modal_class="support-modal" width="20rem">
                <DraftForm vm=vm on_submit=Callback::new(move |_| vm.confirm_create()) />
            </ModalFrame>
        }
        .into_any(),
    }
}

#[component]
fn CloseButton(vm: SupportContactListViewModel) -> impl IntoView {
    view! {
        <button class="modal-btn modal-btn--close" on:click=move |_| vm.cancel()>
            {icon("x")}
            <span>"CLOSE"</span>
        </button>
    }
}

#[component]
fn ViewBody(vm: SupportContactListViewModel) -> impl IntoView {
    let record = move || vm.actions.with(|c| c.state().record().cloned());
    let loading = move || vm.actions.with(|c| c.state().is_loading());

    view! {
        <div class="support-modal__body">
            {move || record().map(|r| view! {
                <p>"ID : " {r.id}</p>
                <p>"Name : " {r.category_name.unwrap_or_default()}</p>
                <p>"Code : " {r.category_code.unwrap_or_default()}</p>
            })}
            <Show when=loading>
                <p class="support-modal__hint">"Loading..."</p>
            </Show>
        </div>
        <div class="support-modal__divider"></div>
        <div class="support-modal__actions">
            <CloseButton vm=vm />
        </div>
    }
}

#[component]
fn DeleteBody(vm: SupportContactListViewModel) -> impl IntoView {
    let name = move || {
        vm.actions
            .with(|c| c.state().record().map(|r| r.name.clone()))
            .unwrap_or_default()
    };
    let submitting = move || vm.actions.with(|c| c.state().is_submitting());

    view! {
        <div class="support-modal__body">
            <p>{move || format!("Are you Sure you want to delete {}?", name())}</p>
        </div>
        <div class="support-modal__divider"></div>
        <div class="support-modal__actions">
            <CloseButton vm=vm />
            <button
                class="modal-btn modal-btn--confirm"
                disabled=submitting
                on:click=move |_| vm.confirm_delete()
            >
                {icon("trash")}
                <span>"Delete"</span>
            </button>
        </div>
    }
}

/// Форма черновика (редактирование и создание)
#[component]
fn DraftForm(vm: SupportContactListViewModel, on_submit: Callback<()>) -> impl IntoView {
    let field = move |f: DraftField| {
        vm.actions.with(|c| {
            c.state()
                .draft()
                .map(|d| match f {
                    DraftField::Name => d.name.clone(),
                    DraftField::Code => d.code.clone(),
                })
                .unwrap_or_default()
        })
    };
    let error = move || vm.actions.with(|c| c.state().error());
    let submitting = move || vm.actions.with(|c| c.state().is_submitting());

    view! {
        <div class="support-modal__body">
            <input
                type="text"
                name="name"
                class="support-modal__input"
                placeholder="Enter the name.."
                autocomplete="off"
                prop:value=move || field(DraftField::Name)
                on:input=move |ev| vm.update_draft(DraftField::Name, event_target_value(&ev))
            />
            <input
                type="text"
                name="code"
                class="support-modal__input"
                placeholder="Enter the code.."
                autocomplete="off"
                prop:value=move || field(DraftField::Code)
                on:input=move |ev| vm.update_draft(DraftField::Code, event_target_value(&ev))
            />
        </div>
        {move || error().map(|e| view! { <div class="notice-alert">{e.to_string()}</div> })}
        <div class="support-modal__divider"></div>
        <div class="support-modal__actions">
            <CloseButton vm=vm />
            <button
                class="modal-btn modal-btn--confirm"
                disabled=submitting
                on:click=move |_| on_submit.run(())
            >
                {icon("check")}
                <span>"SUBMIT"</span>
            </button>
        </div>
    }
}
