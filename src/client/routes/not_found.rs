use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            p { class: "text-4xl font-bold", "404" }
            p { class: "text-base-content/60", "La página /{path} no existe" }
            Link {
                to: Route::Dashboard {},
                class: "btn btn-primary",
                "Ir al Dashboard"
            }
        }
    )
}
