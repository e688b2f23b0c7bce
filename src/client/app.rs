use dioxus::prelude::*;

use crate::client::components::Toaster;
use crate::client::router::Route;
use crate::client::store::session::SessionState;
use crate::client::store::toast::ToastStack;

/// Application root: provides the session and notification contexts, resolves
/// the initial session, and mounts the router.
#[component]
pub fn App() -> Element {
    let mut session = use_context_provider(|| Signal::new(SessionState::start()));
    use_context_provider(|| Signal::new(ToastStack::default()));

    // No token is persisted across reloads, so the initial lookup resolves to
    // signed-out; sign-in and sign-up update the state from then on.
    use_effect(move || {
        session.write().resolve(None);
    });

    rsx!(
        Toaster {}
        Router::<Route> {}
    )
}
