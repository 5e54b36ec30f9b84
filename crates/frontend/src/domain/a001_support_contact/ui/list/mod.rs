pub mod actions;
pub mod state;
pub mod view_model;

use self::view_model::SupportContactListViewModel;
use crate::domain::a001_support_contact::ui::details::ActionModal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_support_contact::aggregate::SupportContact;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn SupportContactList() -> impl IntoView {
    let vm = SupportContactListViewModel::new(use_notifications());
    vm.load();

    let list = vm.list;
    let current_page = Signal::derive(move || list.with(|s| s.paginator.current_page()));
    let total_pages = Signal::derive(move || list.with(|s| s.paginator.total_pages()));
    let total_count = Signal::derive(move || list.with(|s| s.paginator.total_item_count()));
    let page_size = Signal::derive(move || list.with(|s| s.paginator.page_size()));

    view! {
        <div class="support-page">
            <div class="support-page__header">
                <h1 class="support-page__title">{SupportContact::element_name()}</h1>
                <div class="support-page__spacer"></div>
                <button class="button button--secondary" on:click=move |_| vm.load() title="Reload">
                    {icon("refresh")}
                </button>
                <button class="button button--primary" on:click=move |_| vm.open_create()>
                    {icon("plus")}
                    <span>"ADD NEW"</span>
                </button>
            </div>
            <div class="support-page__divider"></div>

            {move || list.with(|s| s.load_error.clone()).map(|e| view! {
                <div class="error">{format!("Failed to load contacts: {}", e)}</div>
            })}

            <Show when=move || list.with(|s| s.is_loading && !s.is_loaded)>
                <div class="support-page__hint">"Loading..."</div>
            </Show>

            <Show when=move || list.with(|s| s.is_loaded && s.paginator.total_item_count() == 0)>
                <div class="support-page__hint">"No contacts yet."</div>
            </Show>

            <div class="support-page__cards">
                <For
                    each=move || vm.visible_page()
                    key=|row| row.id
                    children=move |row| view! { <ContactCard vm=vm record=row /> }
                />
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |page| vm.go_to_page(page))
                on_page_size_change=Callback::new(move |size| vm.set_page_size(size))
            />

            <ActionModal vm=vm />
        </div>
    }
}

#[component]
fn ContactCard(vm: SupportContactListViewModel, record: SupportContact) -> impl IntoView {
    let badge_class = if record.is_brand {
        "badge badge--brand"
    } else {
        "badge badge--influencer"
    };
    let for_view = record.clone();
    let for_edit = record.clone();
    let for_delete = record.clone();

    view! {
        <div class="contact-card">
            <div class="contact-card__head">
                <div>{format!("{}.", record.id)}</div>
                <div>{record.name.clone()}</div>
                <div class="contact-card__spacer"></div>
                <div class=badge_class>{record.kind_label()}</div>
            </div>
            <div>{record.number.clone()}</div>
            <div class="contact-card__message">{format!("Message : {}", record.message)}</div>
            <div class="contact-card__actions">
                <button
                    class="icon-btn"
                    title="View"
                    on:click=move |_| vm.open_view(for_view.clone())
                >
                    {icon("eye")}
                </button>
                <button
                    class="icon-btn"
                    title="Edit"
                    on:click=move |_| vm.open_edit(for_edit.clone())
                >
                    {icon("edit")}
                </button>
                <button
                    class="icon-btn icon-btn--danger"
                    title="Delete"
                    on:click=move |_| vm.open_delete(for_delete.clone())
                >
                    {icon("trash")}
                </button>
            </div>
        </div>
    }
}
