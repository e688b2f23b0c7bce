use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPaw;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::router::Route;
use crate::client::store::session::{supabase_client, use_session};
use crate::client::store::toast::use_toasts;
use crate::supabase::{Credentials, Error};

/// Public login screen with sign-in and sign-up tabs.
#[component]
pub fn Auth() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let nav = navigator();

    let mut signing_up = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut busy = use_signal(|| false);

    // An authenticated visit forwards straight to the dashboard.
    use_effect(move || {
        if session.read().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let sign_in = move |_| {
        let credentials = Credentials {
            email: email.read().clone(),
            password: password.read().clone(),
            full_name: None,
        };
        if let Err(err) = credentials.validate() {
            toasts.write().error(err.to_string());
            return;
        }

        let state = session.read().clone();
        busy.set(true);
        spawn(async move {
            let client = supabase_client(&state);
            match client.sign_in(&credentials).await {
                Ok(new_session) => {
                    session.write().resolve(Some(new_session));
                    toasts.write().success("Inicio de sesión exitoso");
                    nav.push(Route::Dashboard {});
                }
                Err(Error::Auth(message)) if message.contains("Invalid login credentials") => {
                    toasts.write().error("Email o contraseña incorrectos");
                }
                Err(Error::Auth(message)) => {
                    toasts.write().error(message);
                }
                Err(err) => {
                    tracing::error!("sign in failed: {err}");
                    toasts.write().error("Error al iniciar sesión");
                }
            }
            busy.set(false);
        });
    };

    let sign_up = move |_| {
        let credentials = Credentials {
            email: email.read().clone(),
            password: password.read().clone(),
            full_name: Some(full_name.read().clone()),
        };
        if let Err(err) = credentials.validate() {
            toasts.write().error(err.to_string());
            return;
        }

        let state = session.read().clone();
        busy.set(true);
        spawn(async move {
            let client = supabase_client(&state);
            match client.sign_up(&credentials).await {
                Ok(Some(new_session)) => {
                    session.write().resolve(Some(new_session));
                    toasts.write().success("Cuenta creada exitosamente");
                    nav.push(Route::Dashboard {});
                }
                Ok(None) => {
                    toasts
                        .write()
                        .success("Cuenta creada. Revisa tu correo para confirmarla");
                }
                Err(Error::Auth(message)) if message.contains("already registered") => {
                    toasts.write().error("Este email ya está registrado");
                }
                Err(Error::Auth(message)) => {
                    toasts.write().error(message);
                }
                Err(err) => {
                    tracing::error!("sign up failed: {err}");
                    toasts.write().error("Error al crear cuenta");
                }
            }
            busy.set(false);
        });
    };

    rsx!(
        Title { "Acceso | VetCare" }
        Meta {
            name: "description",
            content: "Gestión integral para clínicas veterinarias"
        }
        div { class: "min-h-screen flex items-center justify-center bg-base-200 p-4",
            div { class: "card shadow-md w-full max-w-md bg-base-100",
                div { class: "card-body",
                    div { class: "flex flex-col items-center gap-2 mb-4",
                        div { class: "w-16 h-16 rounded-2xl bg-primary flex items-center justify-center",
                            Icon { width: 32, height: 32, icon: FaPaw, class: "text-primary-content" }
                        }
                        h1 { class: "text-2xl font-bold", "VetCare Sistema" }
                        p { class: "text-sm text-base-content/60",
                            "Gestión integral para clínicas veterinarias"
                        }
                    }

                    div { class: "tabs tabs-boxed grid grid-cols-2 mb-4",
                        a {
                            class: if !signing_up() { "tab tab-active" } else { "tab" },
                            onclick: move |_| signing_up.set(false),
                            "Iniciar Sesión"
                        }
                        a {
                            class: if signing_up() { "tab tab-active" } else { "tab" },
                            onclick: move |_| signing_up.set(true),
                            "Registrarse"
                        }
                    }

                    div { class: "flex flex-col gap-4",
                        if signing_up() {
                            label { class: "form-control",
                                span { class: "label-text mb-1", "Nombre Completo" }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "text",
                                    placeholder: "Juan Pérez",
                                    value: "{full_name}",
                                    oninput: move |e| full_name.set(e.value()),
                                }
                            }
                        }
                        label { class: "form-control",
                            span { class: "label-text mb-1", "Email" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "email",
                                placeholder: "tu@email.com",
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        label { class: "form-control",
                            span { class: "label-text mb-1", "Contraseña" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "password",
                                placeholder: "••••••••",
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                            }
                        }
                        if signing_up() {
                            button {
                                class: "btn btn-primary w-full",
                                disabled: busy(),
                                onclick: sign_up,
                                if busy() { "Creando cuenta..." } else { "Crear Cuenta" }
                            }
                        } else {
                            button {
                                class: "btn btn-primary w-full",
                                disabled: busy(),
                                onclick: sign_in,
                                if busy() { "Iniciando..." } else { "Iniciar Sesión" }
                            }
                        }
                    }
                }
            }
        }
    )
}
