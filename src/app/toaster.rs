use leptos::prelude::*;

use crate::toast::{Severity, Toast, ToastQueue, Toaster, TOAST_DURATION};

/// Context handle for the page's toast surface.
#[derive(Clone, Copy)]
pub struct ToastHandle(RwSignal<ToastQueue>);

impl Toaster for ToastHandle {
    fn show(&self, title: &str, description: &str, severity: Severity) {
        let queue = self.0;
        if let Some(id) = queue.try_update(|q| q.push(title, description, severity)) {
            set_timeout(
                move || {
                    queue.try_update(|q| q.dismiss(id));
                },
                TOAST_DURATION,
            );
        }
    }
}

pub fn provide_toaster() -> ToastHandle {
    let handle = ToastHandle(RwSignal::new(ToastQueue::new()));
    provide_context(handle);
    handle
}

#[component]
pub fn Toasts() -> impl IntoView {
    let ToastHandle(queue) = expect_context::<ToastHandle>();

    view! {
        <div
            class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || queue.with(|q| q.visible().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.severity {
                        Severity::Default => "bg-card text-foreground border-border",
                        Severity::Destructive => "bg-destructive text-destructive-foreground border-destructive",
                    };
                    view! {
                        <div class=format!(
                            "relative rounded-xl border p-4 pr-8 shadow-lg {class}",
                        )>
                            <div class="text-sm font-semibold">{toast.title}</div>
                            <div class="text-sm opacity-90">{toast.description}</div>
                            <button
                                class="absolute top-2 right-2 text-xs opacity-70 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| queue.update(|q| q.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
