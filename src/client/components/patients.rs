//! Screen-specific pieces for the patients screen: cards, the pet and owner
//! form modals, and the detail modal.

use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCat, FaDog, FaDove, FaDownload, FaEllipsisVertical, FaFish, FaHeart, FaPenToSquare,
    FaPhone, FaTrash, FaUser,
};
use dioxus_free_icons::Icon;

use crate::client::components::Modal;
use crate::export::{self, report, TEXT_MIME};
use crate::model::owner::{Owner, OwnerForm};
use crate::model::pet::{species_label, Pet, PetForm, GENDERS, SPECIES};

pub fn species_icon(species: &str) -> Element {
    match species.to_lowercase().as_str() {
        "perro" => rsx!(Icon { width: 20, height: 20, icon: FaDog }),
        "gato" => rsx!(Icon { width: 20, height: 20, icon: FaCat }),
        "ave" => rsx!(Icon { width: 20, height: 20, icon: FaDove }),
        "pez" => rsx!(Icon { width: 20, height: 20, icon: FaFish }),
        _ => rsx!(Icon { width: 20, height: 20, icon: FaHeart }),
    }
}

pub fn gender_badge_class(gender: Option<&str>) -> &'static str {
    match gender {
        Some("macho") => "badge badge-info",
        Some("hembra") => "badge badge-secondary",
        _ => "badge badge-ghost",
    }
}

fn active_badge_class(active: bool) -> &'static str {
    if active {
        "badge badge-success"
    } else {
        "badge badge-ghost"
    }
}

#[component]
pub fn PetCard(
    pet: Pet,
    on_view: EventHandler<Pet>,
    on_edit: EventHandler<Pet>,
    on_toggle: EventHandler<Pet>,
    on_delete: EventHandler<Pet>,
) -> Element {
    let export_href = export::data_url(TEXT_MIME, &report::patient_report(&pet));
    let export_name = report::patient_file_name(&pet, Utc::now().date_naive());
    let subtitle = match &pet.breed {
        Some(breed) => format!("{} • {breed}", species_label(&pet.species)),
        None => species_label(&pet.species),
    };

    let view = pet.clone();
    let edit = pet.clone();
    let toggle = pet.clone();
    let delete = pet.clone();
    let history = pet.clone();

    rsx!(
        div { class: "card shadow-sm hover:shadow-md transition-shadow",
            div { class: "card-body",
                div { class: "flex justify-between items-start",
                    div { class: "flex-1",
                        div { class: "flex items-center gap-2 mb-2",
                            span { class: active_badge_class(pet.active),
                                if pet.active { "Activo" } else { "Inactivo" }
                            }
                            if let Some(gender) = pet.gender.as_deref() {
                                span { class: gender_badge_class(Some(gender)), "{gender}" }
                            }
                        }
                        h2 { class: "card-title text-xl flex items-center gap-2",
                            {species_icon(&pet.species)}
                            "{pet.name}"
                        }
                        p { class: "text-sm text-base-content/60", "{subtitle}" }
                    }

                    div { class: "dropdown dropdown-end",
                        label { tabindex: "0", class: "btn btn-ghost btn-sm btn-circle",
                            Icon { width: 16, height: 16, icon: FaEllipsisVertical }
                        }
                        ul {
                            tabindex: "0",
                            class: "dropdown-content menu bg-base-100 rounded-box z-10 w-52 p-2 shadow",
                            li {
                                a { onclick: move |_| on_view.call(view.clone()), "Ver detalles" }
                            }
                            li {
                                a { onclick: move |_| on_edit.call(edit.clone()),
                                    Icon { width: 14, height: 14, icon: FaPenToSquare }
                                    "Editar"
                                }
                            }
                            li {
                                a { href: "{export_href}", download: "{export_name}",
                                    Icon { width: 14, height: 14, icon: FaDownload }
                                    "Exportar datos"
                                }
                            }
                            li {
                                a { onclick: move |_| on_toggle.call(toggle.clone()),
                                    if pet.active { "Desactivar" } else { "Activar" }
                                }
                            }
                            li {
                                a {
                                    class: "text-error",
                                    onclick: move |_| on_delete.call(delete.clone()),
                                    Icon { width: 14, height: 14, icon: FaTrash }
                                    "Eliminar"
                                }
                            }
                        }
                    }
                }

                div { class: "flex flex-col gap-2 mt-2 text-sm",
                    div { class: "flex items-center gap-2",
                        Icon { width: 14, height: 14, icon: FaUser, class: "text-base-content/60" }
                        span { {pet.owner_name().unwrap_or("Sin dueño").to_string()} }
                    }
                    div { class: "flex items-center gap-2",
                        Icon { width: 14, height: 14, icon: FaPhone, class: "text-base-content/60" }
                        span {
                            {pet.owners.as_ref().map(|o| o.phone.clone()).unwrap_or_else(|| "Sin teléfono".into())}
                        }
                    }
                    div { class: "flex items-center gap-4",
                        if let Some(age) = pet.age {
                            span { "{age} años" }
                        }
                        if let Some(weight) = pet.weight {
                            span { class: "font-medium", "{weight} kg" }
                        }
                    }
                    div { class: "flex justify-between items-center pt-2",
                        span { class: "text-base-content/60", "Citas registradas:" }
                        span { class: "badge badge-outline", "{pet.appointment_count}" }
                    }
                }

                button {
                    class: "btn btn-outline w-full mt-4",
                    onclick: move |_| on_view.call(history.clone()),
                    "Ver Historial Completo"
                }
            }
        }
    )
}

#[component]
pub fn PetFormModal(
    form: Signal<PetForm>,
    owners: Vec<Owner>,
    editing: bool,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
    on_new_owner: EventHandler<()>,
) -> Element {
    let title = if editing { "Editar Paciente" } else { "Nuevo Paciente" }.to_string();
    let f = form.read().clone();

    rsx!(
        Modal { title, on_close: move |_| on_close.call(()),
            div { class: "flex flex-col gap-4",
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Nombre *" }
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Nombre de la mascota",
                            value: "{f.name}",
                            oninput: move |e| form.write().name = e.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Especie *" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{f.species}",
                            onchange: move |e| form.write().species = e.value(),
                            for species in SPECIES.iter().copied() {
                                option { value: species, {species_label(species)} }
                            }
                        }
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Raza" }
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Raza de la mascota",
                            value: "{f.breed}",
                            oninput: move |e| form.write().breed = e.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Dueño *" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{f.owner_id}",
                            onchange: move |e| form.write().owner_id = e.value(),
                            option { value: "", "Seleccionar dueño" }
                            for owner in owners {
                                option {
                                    key: "{owner.id}",
                                    value: "{owner.id}",
                                    "{owner.full_name} ({owner.phone})"
                                }
                            }
                        }
                        p { class: "text-xs text-base-content/60 mt-1",
                            "¿No encuentras al dueño? "
                            a {
                                class: "link",
                                onclick: move |_| on_new_owner.call(()),
                                "Regístralo aquí"
                            }
                        }
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Edad (años)" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "number",
                            min: "0",
                            max: "50",
                            placeholder: "Edad",
                            value: "{f.age}",
                            oninput: move |e| form.write().age = e.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Peso (kg)" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "number",
                            min: "0",
                            step: "0.1",
                            placeholder: "Peso",
                            value: "{f.weight}",
                            oninput: move |e| form.write().weight = e.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Género" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{f.gender}",
                            onchange: move |e| form.write().gender = e.value(),
                            for gender in GENDERS.iter().copied() {
                                option { value: gender, {species_label(gender)} }
                            }
                        }
                    }
                }

                label { class: "form-control",
                    span { class: "label-text mb-1", "Color" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Color del pelaje/plumaje",
                        value: "{f.color}",
                        oninput: move |e| form.write().color = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text mb-1", "Historial Médico" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: "2",
                        placeholder: "Enfermedades previas, tratamientos, cirugías...",
                        value: "{f.medical_history}",
                        oninput: move |e| form.write().medical_history = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text mb-1", "Alergias" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: "2",
                        placeholder: "Alergias conocidas a medicamentos o alimentos",
                        value: "{f.allergies}",
                        oninput: move |e| form.write().allergies = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text mb-1", "URL de Foto (opcional)" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "https://ejemplo.com/foto.jpg",
                        value: "{f.photo_url}",
                        oninput: move |e| form.write().photo_url = e.value(),
                    }
                }

                div { class: "modal-action",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_save.call(()),
                        if editing { "Actualizar Paciente" } else { "Registrar Paciente" }
                    }
                }
            }
        }
    )
}

#[component]
pub fn OwnerFormModal(
    form: Signal<OwnerForm>,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let f = form.read().clone();

    rsx!(
        Modal { title: "Nuevo Dueño", on_close: move |_| on_close.call(()),
            p { class: "text-sm text-base-content/60 mb-4",
                "Registra un nuevo dueño para asociarlo a mascotas"
            }
            div { class: "flex flex-col gap-4",
                label { class: "form-control",
                    span { class: "label-text mb-1", "Nombre Completo *" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Nombre del dueño",
                        value: "{f.full_name}",
                        oninput: move |e| form.write().full_name = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text mb-1", "Teléfono *" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Teléfono de contacto",
                        value: "{f.phone}",
                        oninput: move |e| form.write().phone = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text mb-1", "Email" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        placeholder: "correo@ejemplo.com",
                        value: "{f.email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text mb-1", "Dirección" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Dirección completa",
                        value: "{f.address}",
                        oninput: move |e| form.write().address = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text mb-1", "RFC" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "RFC (opcional para facturación)",
                        value: "{f.rfc}",
                        oninput: move |e| form.write().rfc = e.value(),
                    }
                }

                div { class: "modal-action",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_save.call(()),
                        "Registrar Dueño"
                    }
                }
            }
        }
    )
}

#[component]
pub fn PetDetailModal(
    pet: Pet,
    on_edit: EventHandler<Pet>,
    on_close: EventHandler<()>,
) -> Element {
    let export_href = export::data_url(TEXT_MIME, &report::patient_report(&pet));
    let export_name = report::patient_file_name(&pet, Utc::now().date_naive());
    let edit = pet.clone();
    let unspecified = "No especificado".to_string();

    rsx!(
        Modal {
            title: format!("Detalles del Paciente: {}", pet.name),
            on_close: move |_| on_close.call(()),
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                div { class: "card bg-base-200",
                    div { class: "card-body p-4",
                        h3 { class: "font-semibold flex items-center gap-2",
                            {species_icon(&pet.species)}
                            "Información Básica"
                        }
                        div { class: "text-sm flex flex-col gap-1 mt-2",
                            p { {format!("Especie: {}", species_label(&pet.species))} }
                            p { {format!("Raza: {}", pet.breed.clone().unwrap_or_else(|| "No especificada".into()))} }
                            p { {format!("Edad: {}", pet.age.map(|a| format!("{a} años")).unwrap_or_else(|| "No especificada".into()))} }
                            p { {format!("Peso: {}", pet.weight.map(|w| format!("{w} kg")).unwrap_or_else(|| unspecified.clone()))} }
                            p { {format!("Género: {}", pet.gender.clone().unwrap_or_else(|| unspecified.clone()))} }
                            p { {format!("Color: {}", pet.color.clone().unwrap_or_else(|| unspecified.clone()))} }
                        }
                    }
                }
                div { class: "card bg-base-200",
                    div { class: "card-body p-4",
                        h3 { class: "font-semibold", "Dueño" }
                        div { class: "text-sm flex flex-col gap-1 mt-2",
                            p { {format!("Nombre: {}", pet.owner_name().unwrap_or("No especificado"))} }
                            p { {format!("Teléfono: {}", pet.owners.as_ref().map(|o| o.phone.clone()).unwrap_or_else(|| unspecified.clone()))} }
                            p { {format!("Email: {}", pet.owners.as_ref().and_then(|o| o.email.clone()).unwrap_or_else(|| unspecified.clone()))} }
                            p { {format!("Dirección: {}", pet.owners.as_ref().and_then(|o| o.address.clone()).unwrap_or_else(|| unspecified.clone()))} }
                            p { {format!("RFC: {}", pet.owners.as_ref().and_then(|o| o.rfc.clone()).unwrap_or_else(|| unspecified.clone()))} }
                        }
                    }
                }
                div { class: "card bg-base-200",
                    div { class: "card-body p-4",
                        h3 { class: "font-semibold", "Información Adicional" }
                        div { class: "text-sm flex flex-col gap-1 mt-2",
                            p { {format!("Estado: {}", if pet.active { "Activo" } else { "Inactivo" })} }
                            p { "Citas registradas: {pet.appointment_count}" }
                            p { {format!("Registrado: {}", pet.created_at.format("%d/%m/%Y %H:%M"))} }
                            p { {format!("Última actualización: {}", pet.updated_at.format("%d/%m/%Y %H:%M"))} }
                        }
                    }
                }
            }

            if let Some(history) = pet.medical_history.as_ref() {
                div { class: "card bg-base-200 mt-4",
                    div { class: "card-body p-4",
                        h3 { class: "font-semibold", "Historial Médico" }
                        p { class: "text-sm whitespace-pre-line", "{history}" }
                    }
                }
            }
            if let Some(allergies) = pet.allergies.as_ref() {
                div { class: "card bg-base-200 mt-4",
                    div { class: "card-body p-4",
                        h3 { class: "font-semibold", "Alergias" }
                        p { class: "text-sm whitespace-pre-line", "{allergies}" }
                    }
                }
            }

            div { class: "modal-action",
                a {
                    class: "btn btn-outline",
                    href: "{export_href}",
                    download: "{export_name}",
                    Icon { width: 14, height: 14, icon: FaDownload }
                    "Exportar Datos"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_edit.call(edit.clone()),
                    Icon { width: 14, height: 14, icon: FaPenToSquare }
                    "Editar Paciente"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_close.call(()),
                    "Cerrar"
                }
            }
        }
    )
}
