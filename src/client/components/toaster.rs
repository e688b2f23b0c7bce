use dioxus::prelude::*;

use crate::client::store::toast::{use_toasts, ToastKind};

/// Fixed-position notification stack. Clicking a toast dismisses it.
#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();

    rsx!(
        div { class: "toast toast-end z-50",
            for toast in toasts.read().toasts.clone() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "alert alert-success cursor-pointer",
                        ToastKind::Error => "alert alert-error cursor-pointer",
                    },
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    span { "{toast.message}" }
                }
            }
        }
    )
}
