use dioxus::prelude::*;

/// Inline confirmation required before irreversible deletes.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                p { "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-error",
                        onclick: move |_| on_confirm.call(()),
                        "Eliminar"
                    }
                }
            }
        }
    )
}
