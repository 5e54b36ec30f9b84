use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a notice stays on screen (ms)
const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Failure,
}

impl NotificationLevel {
    fn class(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "toast toast--success",
            NotificationLevel::Failure => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    id: u64,
    level: NotificationLevel,
    message: String,
}

/// Fire-and-forget toast notifications.
///
/// Provided once at the app root; each notice disappears on its own after
/// `AUTO_DISMISS_MS` or when clicked.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);
        self.push(NotificationLevel::Success, message);
    }

    pub fn notify_failure(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.push(NotificationLevel::Failure, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, level: NotificationLevel, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Notification { id, level, message }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)")
}

/// Renders active notices. Must be mounted exactly once.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="toast-container">
            <For
                each=move || svc.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div
                            class=n.level.class()
                            role="status"
                            on:click=move |_| svc.dismiss(id)
                        >
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
