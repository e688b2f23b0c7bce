use dioxus::prelude::*;

/// Summary tile: a label, a headline number, and an icon slot.
#[component]
pub fn StatCard(title: String, value: String, children: Element) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body p-4",
                div { class: "flex items-center justify-between",
                    div {
                        p { class: "text-sm text-base-content/60", "{title}" }
                        p { class: "text-2xl font-bold", "{value}" }
                    }
                    {children}
                }
            }
        }
    )
}
