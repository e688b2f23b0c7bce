use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

/// Empty-collection prompt with a filter reset action.
#[component]
pub fn EmptyState(message: String, on_reset: EventHandler<()>) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body py-12 items-center text-center",
                Icon { width: 48, height: 48, icon: FaMagnifyingGlass, class: "text-base-300" }
                p { class: "text-base-content/60 mb-2", "{message}" }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_reset.call(()),
                    "Limpiar filtros"
                }
            }
        }
    )
}
