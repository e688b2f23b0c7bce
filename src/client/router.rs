use dioxus::prelude::*;

use crate::client::components::ProtectedLayout;
use crate::client::routes::{Appointments, Auth, Dashboard, Inventory, NotFound, Patients};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]

    #[route("/auth")]
    Auth {},

    #[layout(ProtectedLayout)]

    #[route("/dashboard")]
    Dashboard {},

    #[route("/pacientes")]
    Patients {},

    #[route("/citas")]
    Appointments {},

    #[route("/inventario")]
    Inventory {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
