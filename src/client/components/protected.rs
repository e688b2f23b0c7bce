use dioxus::prelude::*;

use crate::client::components::Navbar;
use crate::client::router::Route;
use crate::client::store::session::use_session;

/// Gate layout wrapping every protected screen.
///
/// While the session resolves, rendering is suspended behind a skeleton and no
/// screen mounts (so no data request fires). Once resolved without an
/// identity, navigation is replaced with the login screen.
#[component]
pub fn ProtectedLayout() -> Element {
    let session = use_session();
    let nav = navigator();

    use_effect(move || {
        let state = session.read();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Auth {});
        }
    });

    let state = session.read();
    rsx!(
        if state.loading {
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        } else if state.user.is_some() {
            Navbar {}
            Outlet::<Route> {}
        }
    )
}
