use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCat, FaDog, FaHeart, FaMagnifyingGlass, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::patients::{OwnerFormModal, PetCard, PetDetailModal, PetFormModal};
use crate::client::components::{ConfirmDialog, EmptyState, Page, StatCard};
use crate::client::store::session::{supabase_client, use_session};
use crate::client::store::toast::use_toasts;
use crate::client::util::{backend_message, owners, pets};
use crate::model::owner::{Owner, OwnerForm};
use crate::model::pet::{pet_stats, Pet, PetFilter, PetForm};
use crate::model::ActiveFilter;

#[component]
pub fn Patients() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();

    let mut filter = use_signal(PetFilter::default);
    let mut form = use_signal(PetForm::default);
    let mut owner_form = use_signal(OwnerForm::default);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut show_form = use_signal(|| false);
    let mut show_owner_form = use_signal(|| false);
    let mut detail = use_signal(|| Option::<Pet>::None);
    let mut pending_delete = use_signal(|| Option::<Pet>::None);

    let mut pets_res = use_resource(move || {
        let client = supabase_client(&session.read());
        async move { pets::fetch_pets(&client).await }
    });
    let mut owners_res = use_resource(move || {
        let client = supabase_client(&session.read());
        async move { owners::fetch_owners(&client).await }
    });

    let (all_pets, loading, load_failed): (Vec<Pet>, bool, bool) =
        match &*pets_res.read_unchecked() {
            Some(Ok(rows)) => (rows.clone(), false, false),
            Some(Err(err)) => {
                tracing::error!("failed to load pets: {err}");
                (Vec::new(), false, true)
            }
            None => (Vec::new(), true, false),
        };
    let owner_list: Vec<Owner> = match &*owners_res.read_unchecked() {
        Some(Ok(rows)) => rows.clone(),
        Some(Err(err)) => {
            tracing::error!("failed to load owners: {err}");
            Vec::new()
        }
        None => Vec::new(),
    };

    let stats = pet_stats(&all_pets);
    let visible: Vec<Pet> = filter
        .read()
        .apply(&all_pets)
        .into_iter()
        .cloned()
        .collect();

    let open_create = move |_| {
        form.set(PetForm::default());
        editing.set(None);
        show_form.set(true);
    };

    let open_edit = move |pet: Pet| {
        form.set(PetForm::from_pet(&pet));
        editing.set(Some(pet.id.clone()));
        detail.set(None);
        show_form.set(true);
    };

    let save_pet = move |_| {
        let payload = match form.read().validate() {
            Ok(payload) => payload,
            Err(err) => {
                toasts.write().error(err.to_string());
                return;
            }
        };

        let state = session.read().clone();
        let editing_id = editing.read().clone();
        spawn(async move {
            let client = supabase_client(&state);
            let result = match &editing_id {
                Some(id) => pets::update_pet(&client, id, &payload).await,
                None => {
                    let mut payload = payload;
                    payload.created_by = state.user.as_ref().map(|u| u.id.clone());
                    pets::create_pet(&client, &payload).await
                }
            };
            match result {
                Ok(()) => {
                    toasts.write().success(if editing_id.is_some() {
                        "Paciente actualizado correctamente"
                    } else {
                        "Paciente registrado correctamente"
                    });
                    show_form.set(false);
                    form.set(PetForm::default());
                    editing.set(None);
                    pets_res.restart();
                }
                Err(err) => {
                    tracing::error!("failed to save pet: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al guardar paciente"));
                }
            }
        });
    };

    let save_owner = move |_| {
        let payload = match owner_form.read().validate() {
            Ok(payload) => payload,
            Err(err) => {
                toasts.write().error(err.to_string());
                return;
            }
        };

        let state = session.read().clone();
        spawn(async move {
            let client = supabase_client(&state);
            let mut payload = payload;
            payload.created_by = state.user.as_ref().map(|u| u.id.clone());
            match owners::create_owner(&client, &payload).await {
                Ok(()) => {
                    toasts.write().success("Dueño registrado correctamente");
                    owner_form.set(OwnerForm::default());
                    show_owner_form.set(false);
                    owners_res.restart();
                }
                Err(err) => {
                    tracing::error!("failed to save owner: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al registrar dueño"));
                }
            }
        });
    };

    let toggle_pet = move |pet: Pet| {
        let state = session.read().clone();
        spawn(async move {
            let client = supabase_client(&state);
            match pets::set_pet_active(&client, &pet.id, !pet.active).await {
                Ok(()) => {
                    toasts.write().success(if pet.active {
                        "Paciente desactivado correctamente"
                    } else {
                        "Paciente activado correctamente"
                    });
                    pets_res.restart();
                }
                Err(err) => {
                    tracing::error!("failed to toggle pet status: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al cambiar estado del paciente"));
                }
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(pet) = pending_delete.read().clone() else {
            return;
        };
        let state = session.read().clone();
        spawn(async move {
            let client = supabase_client(&state);
            match pets::delete_pet(&client, &pet.id).await {
                Ok(()) => {
                    toasts.write().success("Paciente eliminado correctamente");
                    pets_res.restart();
                }
                Err(err) => {
                    tracing::error!("failed to delete pet: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al eliminar paciente"));
                }
            }
            pending_delete.set(None);
        });
    };

    let empty_message = if filter.read().is_filtered() {
        "No se encontraron pacientes con los filtros aplicados"
    } else {
        "No hay pacientes registrados"
    }
    .to_string();
    let search_text = filter.read().search.clone();

    rsx!(
        Title { "Pacientes | VetCare" }
        Meta {
            name: "description",
            content: "Administra las mascotas y sus historiales médicos"
        }
        Page {
            div { class: "flex flex-col md:flex-row md:items-center justify-between mb-8 gap-4",
                div {
                    h1 { class: "text-3xl font-bold mb-2", "Gestión de Pacientes" }
                    p { class: "text-base-content/60",
                        "Administra las mascotas y sus historiales médicos"
                    }
                }
                div { class: "flex items-center gap-3",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| show_owner_form.set(true),
                        "Nuevo Dueño"
                    }
                    button {
                        class: "btn btn-primary gap-2",
                        onclick: open_create,
                        Icon { width: 16, height: 16, icon: FaPlus }
                        "Nuevo Paciente"
                    }
                }
            }

            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-6",
                StatCard { title: "Total Pacientes", value: stats.total.to_string(),
                    Icon { width: 32, height: 32, icon: FaHeart, class: "text-red-500" }
                }
                StatCard { title: "Activos", value: stats.active.to_string(),
                    Icon { width: 32, height: 32, icon: FaDog, class: "text-blue-500" }
                }
                StatCard { title: "Perros", value: stats.dogs.to_string(),
                    Icon { width: 32, height: 32, icon: FaDog, class: "text-yellow-500" }
                }
                StatCard { title: "Gatos", value: stats.cats.to_string(),
                    Icon { width: 32, height: 32, icon: FaCat, class: "text-gray-500" }
                }
            }

            div { class: "tabs tabs-boxed w-fit mb-6",
                a {
                    class: if filter.read().tab == ActiveFilter::Active { "tab tab-active" } else { "tab" },
                    onclick: move |_| filter.write().tab = ActiveFilter::Active,
                    "Activos ({stats.active})"
                }
                a {
                    class: if filter.read().tab == ActiveFilter::Inactive { "tab tab-active" } else { "tab" },
                    onclick: move |_| filter.write().tab = ActiveFilter::Inactive,
                    "Inactivos ({stats.inactive})"
                }
                a {
                    class: if filter.read().tab == ActiveFilter::All { "tab tab-active" } else { "tab" },
                    onclick: move |_| filter.write().tab = ActiveFilter::All,
                    "Todos ({stats.total})"
                }
            }

            div { class: "card shadow-sm mb-6",
                div { class: "card-body p-4",
                    div { class: "flex flex-col md:flex-row gap-4",
                        label { class: "input input-bordered flex items-center gap-2 flex-1",
                            Icon { width: 16, height: 16, icon: FaMagnifyingGlass, class: "text-base-content/60" }
                            input {
                                class: "grow",
                                placeholder: "Buscar por nombre, especie, raza o dueño...",
                                value: "{search_text}",
                                oninput: move |e| filter.write().search = e.value(),
                            }
                        }
                        div { class: "flex gap-2",
                            select {
                                class: "select select-bordered",
                                onchange: move |e| {
                                    let value = e.value();
                                    filter.write().species =
                                        if value.is_empty() { None } else { Some(value) };
                                },
                                option { value: "", "Todas las especies" }
                                option { value: "perro", "Perro" }
                                option { value: "gato", "Gato" }
                                option { value: "ave", "Ave" }
                                option { value: "conejo", "Conejo" }
                                option { value: "otro", "Otro" }
                            }
                            select {
                                class: "select select-bordered",
                                onchange: move |e| {
                                    filter.write().status = match e.value().as_str() {
                                        "activos" => ActiveFilter::Active,
                                        "inactivos" => ActiveFilter::Inactive,
                                        _ => ActiveFilter::All,
                                    };
                                },
                                option { value: "", "Todos los estados" }
                                option { value: "activos", "Activos" }
                                option { value: "inactivos", "Inactivos" }
                            }
                        }
                    }
                }
            }

            if load_failed {
                div { class: "alert alert-error mb-6",
                    span { "Error al cargar pacientes" }
                }
            }

            if loading {
                div { class: "text-center py-12",
                    p { class: "text-base-content/60", "Cargando pacientes..." }
                }
            } else if visible.is_empty() {
                EmptyState {
                    message: empty_message,
                    on_reset: move |_| filter.write().reset(),
                }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for pet in visible {
                        PetCard {
                            key: "{pet.id}",
                            pet: pet.clone(),
                            on_view: move |pet| detail.set(Some(pet)),
                            on_edit: open_edit,
                            on_toggle: toggle_pet,
                            on_delete: move |pet| pending_delete.set(Some(pet)),
                        }
                    }
                }
            }

            if show_form() {
                PetFormModal {
                    form,
                    owners: owner_list.clone(),
                    editing: editing.read().is_some(),
                    on_save: save_pet,
                    on_close: move |_| show_form.set(false),
                    on_new_owner: move |_| {
                        show_form.set(false);
                        show_owner_form.set(true);
                    },
                }
            }
            if show_owner_form() {
                OwnerFormModal {
                    form: owner_form,
                    on_save: save_owner,
                    on_close: move |_| show_owner_form.set(false),
                }
            }
            if let Some(pet) = detail() {
                PetDetailModal {
                    pet,
                    on_edit: open_edit,
                    on_close: move |_| detail.set(None),
                }
            }
            if let Some(pet) = pending_delete() {
                ConfirmDialog {
                    message: format!(
                        "¿Estás seguro de eliminar a {}? Esta acción no se puede deshacer.",
                        pet.name
                    ),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    )
}
