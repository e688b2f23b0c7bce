use dioxus::prelude::*;

/// Screen shell: offsets content below the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-6 md:p-8 {class}",
            {children}
        }
    )
}
