use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBox, FaCalendarDays, FaHouse, FaPaw, FaRightFromBracket,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::router::Route;
use crate::client::store::session::{supabase_client, use_session};

#[component]
pub fn Navbar() -> Element {
    let mut session = use_session();
    let route = use_route::<Route>();
    let nav = navigator();

    let sign_out = move |_| {
        let state = session.read().clone();
        spawn(async move {
            // Token revocation is best effort; the local session goes away
            // regardless.
            if let Err(err) = supabase_client(&state).sign_out().await {
                tracing::warn!("sign out request failed: {err}");
            }
            session.write().clear();
            nav.replace(Route::Auth {});
        });
    };

    let link_class = |active: bool| {
        if active {
            "btn btn-ghost btn-sm gap-2 btn-active"
        } else {
            "btn btn-ghost btn-sm gap-2"
        }
    };

    rsx!(
        div { class: "navbar bg-base-200 fixed z-40",
            div { class: "navbar-start",
                div { class: "flex items-center gap-2 px-2",
                    Icon { width: 24, height: 24, icon: FaPaw, class: "text-primary" }
                    p { class: "text-xl font-semibold", "VetCare" }
                }
            }
            div { class: "navbar-center",
                ul { class: "flex gap-1",
                    li {
                        Link {
                            to: Route::Dashboard {},
                            class: link_class(route == Route::Dashboard {}),
                            Icon { width: 16, height: 16, icon: FaHouse }
                            "Dashboard"
                        }
                    }
                    li {
                        Link {
                            to: Route::Patients {},
                            class: link_class(route == Route::Patients {}),
                            Icon { width: 16, height: 16, icon: FaPaw }
                            "Pacientes"
                        }
                    }
                    li {
                        Link {
                            to: Route::Appointments {},
                            class: link_class(route == Route::Appointments {}),
                            Icon { width: 16, height: 16, icon: FaCalendarDays }
                            "Citas"
                        }
                    }
                    li {
                        Link {
                            to: Route::Inventory {},
                            class: link_class(route == Route::Inventory {}),
                            Icon { width: 16, height: 16, icon: FaBox }
                            "Inventario"
                        }
                    }
                }
            }
            div { class: "navbar-end gap-2",
                if let Some(user) = session.read().user.as_ref() {
                    p { class: "text-sm hidden md:block", {user.display_name().to_string()} }
                }
                button {
                    class: "btn btn-outline btn-sm gap-2",
                    onclick: sign_out,
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                    "Cerrar Sesión"
                }
            }
        }
    )
}
