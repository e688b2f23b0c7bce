use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

/// Modal dialog shell. Render it conditionally; the close button and the
/// backdrop both invoke `on_close`.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-2xl",
                div { class: "flex justify-between items-center mb-4",
                    h3 { class: "font-bold text-lg", "{title}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 16, height: 16, icon: FaXmark }
                    }
                }
                {children}
            }
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    )
}
