use crate::domain::a001_support_contact::ui::list::SupportContactList;
use crate::shared::notifications::NotificationHost;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Путь страницы обращений в админке
pub const SUPPORT_PATH: &str = "/admin/home/support";

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <a href=SUPPORT_PATH>"Back to contacts"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=SUPPORT_PATH /> } />
                    <Route path=path!("/admin/home/support") view=SupportContactList />
                </Routes>
            </main>
            <NotificationHost />
        </Router>
    }
}
