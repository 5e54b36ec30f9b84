use crate::routes::routes::AppRoutes;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts for mutation outcomes, shared by every page
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}
