//! Screen-specific pieces for the appointments screen: cards, the form modal,
//! and the detail modal.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendarDays, FaCircleCheck, FaCirclePlay, FaCircleXmark, FaClock, FaDownload,
    FaEllipsisVertical, FaPaw, FaPenToSquare, FaStethoscope, FaTrash, FaUser,
};
use dioxus_free_icons::Icon;

use crate::client::components::Modal;
use crate::export::{self, calendar, CALENDAR_MIME};
use crate::model::appointment::{
    date_badge, Appointment, AppointmentForm, AppointmentPet, AppointmentStatus, DURATION_CHOICES,
};
use crate::model::staff::StaffProfile;

pub fn status_badge_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Programada => "badge badge-info gap-1",
        AppointmentStatus::EnProgreso => "badge badge-warning gap-1",
        AppointmentStatus::Completada => "badge badge-success gap-1",
        AppointmentStatus::Cancelada => "badge badge-error gap-1",
    }
}

pub fn status_icon(status: AppointmentStatus) -> Element {
    match status {
        AppointmentStatus::Programada => rsx!(Icon { width: 12, height: 12, icon: FaClock }),
        AppointmentStatus::EnProgreso => rsx!(Icon { width: 12, height: 12, icon: FaCirclePlay }),
        AppointmentStatus::Completada => rsx!(Icon { width: 12, height: 12, icon: FaCircleCheck }),
        AppointmentStatus::Cancelada => rsx!(Icon { width: 12, height: 12, icon: FaCircleXmark }),
    }
}

/// Menu copy for each legal status change.
pub fn transition_label(next: AppointmentStatus) -> &'static str {
    match next {
        AppointmentStatus::EnProgreso => "Iniciar consulta",
        AppointmentStatus::Completada => "Marcar como completada",
        AppointmentStatus::Cancelada => "Cancelar cita",
        AppointmentStatus::Programada => "Reprogramar",
    }
}

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Spanish long-form date, e.g. "viernes 7 de agosto".
pub fn spanish_date(at: DateTime<Utc>) -> String {
    use chrono::Datelike;
    let weekday = WEEKDAYS[at.weekday().num_days_from_monday() as usize];
    let month = MONTHS[at.month0() as usize];
    format!("{weekday} {} de {month}", at.day())
}

#[component]
pub fn AppointmentCard(
    appointment: Appointment,
    now: DateTime<Utc>,
    on_view: EventHandler<Appointment>,
    on_edit: EventHandler<Appointment>,
    on_transition: EventHandler<(Appointment, AppointmentStatus)>,
    on_delete: EventHandler<Appointment>,
) -> Element {
    let export_href = export::data_url(CALENDAR_MIME, &calendar::appointment_event(&appointment));
    let export_name = calendar::event_file_name(&appointment);
    let badge = date_badge(appointment.appointment_date, now);
    let pet_line = match appointment.pets.as_ref() {
        Some(pet) => format!(
            "{} • {}",
            pet.breed.clone().unwrap_or_else(|| "Sin raza".into()),
            pet.species
        ),
        None => "Sin mascota".into(),
    };

    let view = appointment.clone();
    let edit = appointment.clone();
    let delete = appointment.clone();
    let details = appointment.clone();
    let transitions: Vec<(AppointmentStatus, Appointment)> = appointment
        .status
        .allowed_transitions()
        .iter()
        .map(|&next| (next, appointment.clone()))
        .collect();

    rsx!(
        div { class: "card shadow-sm hover:shadow-md transition-shadow",
            div { class: "card-body",
                div { class: "flex justify-between items-start",
                    div { class: "flex-1",
                        div { class: "flex items-center gap-2 mb-2",
                            span { class: status_badge_class(appointment.status),
                                {status_icon(appointment.status)}
                                {appointment.status.label()}
                            }
                            if let Some(badge) = badge {
                                span { class: "badge badge-outline", "{badge}" }
                            }
                        }
                        h2 { class: "card-title text-xl flex items-center gap-2",
                            Icon { width: 20, height: 20, icon: FaPaw, class: "text-primary" }
                            {appointment.pet_name().unwrap_or("Sin mascota").to_string()}
                        }
                        p { class: "text-sm text-base-content/60", "{pet_line}" }
                    }

                    div { class: "dropdown dropdown-end",
                        label { tabindex: "0", class: "btn btn-ghost btn-sm btn-circle",
                            Icon { width: 16, height: 16, icon: FaEllipsisVertical }
                        }
                        ul {
                            tabindex: "0",
                            class: "dropdown-content menu bg-base-100 rounded-box z-10 w-56 p-2 shadow",
                            li {
                                a { onclick: move |_| on_view.call(view.clone()), "Ver detalles" }
                            }
                            li {
                                a { onclick: move |_| on_edit.call(edit.clone()),
                                    Icon { width: 14, height: 14, icon: FaPenToSquare }
                                    "Editar"
                                }
                            }
                            // Only legal transitions are offered; the write
                            // path re-validates them anyway.
                            for (next, target) in transitions {
                                li {
                                    a {
                                        class: if next == AppointmentStatus::Cancelada { "text-error" } else { "" },
                                        onclick: move |_| on_transition.call((target.clone(), next)),
                                        {transition_label(next)}
                                    }
                                }
                            }
                            li {
                                a { href: "{export_href}", download: "{export_name}",
                                    Icon { width: 14, height: 14, icon: FaDownload }
                                    "Exportar a calendario"
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
                    div { class: "flex items-center gap-2 flex-wrap",
                        Icon { width: 14, height: 14, icon: FaCalendarDays, class: "text-base-content/60" }
                        span { class: "font-medium", {spanish_date(appointment.appointment_date)} }
                        span { class: "text-base-content/60",
                            {appointment.appointment_date.format("• %H:%M").to_string()}
                        }
                        span { class: "badge badge-outline", {format!("{} min", appointment.duration())} }
                    }
                    div { class: "flex items-center gap-2",
                        Icon { width: 14, height: 14, icon: FaStethoscope, class: "text-base-content/60" }
                        span {
                            {appointment.veterinarian_name.clone().unwrap_or_else(|| "Sin veterinario".into())}
                        }
                    }
                    div { class: "flex items-center gap-2",
                        Icon { width: 14, height: 14, icon: FaUser, class: "text-base-content/60" }
                        span { {appointment.owner_name().unwrap_or("Sin dueño").to_string()} }
                    }
                    div { class: "pt-2",
                        p { class: "text-base-content/60", "{appointment.reason}" }
                        if let Some(notes) = appointment.notes.as_ref() {
                            p { class: "text-xs text-base-content/50 mt-1", "{notes}" }
                        }
                    }
                }

                button {
                    class: "btn btn-outline w-full mt-4",
                    onclick: move |_| on_view.call(details.clone()),
                    "Ver Detalles Completos"
                }
            }
        }
    )
}

#[component]
pub fn AppointmentFormModal(
    form: Signal<AppointmentForm>,
    pets: Vec<AppointmentPet>,
    vets: Vec<StaffProfile>,
    editing: bool,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let title = if editing { "Editar Cita" } else { "Nueva Cita" }.to_string();
    let f = form.read().clone();

    rsx!(
        Modal { title, on_close: move |_| on_close.call(()),
            div { class: "flex flex-col gap-4",
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Mascota *" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{f.pet_id}",
                            onchange: move |e| form.write().pet_id = e.value(),
                            option { value: "", "Seleccionar mascota" }
                            for pet in pets {
                                option {
                                    key: "{pet.id}",
                                    value: "{pet.id}",
                                    {format!(
                                        "{} ({} • {})",
                                        pet.name,
                                        pet.species,
                                        pet.breed.clone().unwrap_or_else(|| "Sin raza".into())
                                    )}
                                }
                            }
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Veterinario *" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{f.veterinarian_id}",
                            onchange: move |e| form.write().veterinarian_id = e.value(),
                            option { value: "", "Seleccionar veterinario" }
                            for vet in vets {
                                option {
                                    key: "{vet.id}",
                                    value: "{vet.id}",
                                    "{vet.full_name}"
                                }
                            }
                        }
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Fecha y Hora *" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "datetime-local",
                            value: "{f.appointment_date}",
                            oninput: move |e| form.write().appointment_date = e.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text mb-1", "Duración (minutos) *" }
                        select {
                            class: "select select-bordered w-full",
                            value: "{f.duration_minutes}",
                            onchange: move |e| {
                                form.write().duration_minutes = e.value().parse().unwrap_or(30);
                            },
                            for minutes in DURATION_CHOICES.iter().copied() {
                                option {
                                    key: "{minutes}",
                                    value: "{minutes}",
                                    "{minutes} minutos"
                                }
                            }
                        }
                    }
                }

                label { class: "form-control",
                    span { class: "label-text mb-1", "Motivo de la cita *" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: "3",
                        placeholder: "Describa el motivo de la consulta...",
                        value: "{f.reason}",
                        oninput: move |e| form.write().reason = e.value(),
                    }
                }
                label { class: "form-control",
                    span { class: "label-text mb-1", "Notas adicionales" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: "2",
                        placeholder: "Observaciones, síntomas, historial reciente...",
                        value: "{f.notes}",
                        oninput: move |e| form.write().notes = e.value(),
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
                        if editing { "Actualizar Cita" } else { "Crear Cita" }
                    }
                }
            }
        }
    )
}

#[component]
pub fn AppointmentDetailModal(
    appointment: Appointment,
    on_edit: EventHandler<Appointment>,
    on_close: EventHandler<()>,
) -> Element {
    let export_href = export::data_url(CALENDAR_MIME, &calendar::appointment_event(&appointment));
    let export_name = calendar::event_file_name(&appointment);
    let edit = appointment.clone();
    let unspecified = "No especificado".to_string();
    let pet = appointment.pets.as_ref();

    rsx!(
        Modal { title: "Detalles de la Cita", on_close: move |_| on_close.call(()),
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                div { class: "card bg-base-200",
                    div { class: "card-body p-4",
                        h3 { class: "font-semibold flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaPaw }
                            "Mascota"
                        }
                        div { class: "text-sm flex flex-col gap-1 mt-2",
                            p { {format!("Nombre: {}", appointment.pet_name().unwrap_or("No especificado"))} }
                            p { {format!("Especie: {}", pet.map(|p| p.species.clone()).unwrap_or_else(|| unspecified.clone()))} }
                            p { {format!("Raza: {}", pet.and_then(|p| p.breed.clone()).unwrap_or_else(|| "No especificada".into()))} }
                        }
                    }
                }
                div { class: "card bg-base-200",
                    div { class: "card-body p-4",
                        h3 { class: "font-semibold flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaUser }
                            "Dueño"
                        }
                        div { class: "text-sm flex flex-col gap-1 mt-2",
                            p { {format!("Nombre: {}", appointment.owner_name().unwrap_or("No especificado"))} }
                            p { {format!(
                                "Teléfono: {}",
                                pet.and_then(|p| p.owners.as_ref())
                                    .map(|o| o.phone.clone())
                                    .unwrap_or_else(|| unspecified.clone())
                            )} }
                        }
                    }
                }
                div { class: "card bg-base-200",
                    div { class: "card-body p-4",
                        h3 { class: "font-semibold flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaStethoscope }
                            "Veterinario"
                        }
                        div { class: "text-sm flex flex-col gap-1 mt-2",
                            p { {format!(
                                "Nombre: {}",
                                appointment.veterinarian_name.clone().unwrap_or_else(|| unspecified.clone())
                            )} }
                            p { {format!(
                                "ID: {}",
                                appointment.veterinarian_id.clone().unwrap_or_else(|| unspecified.clone())
                            )} }
                        }
                    }
                }
            }

            div { class: "card bg-base-200 mt-4",
                div { class: "card-body p-4",
                    h3 { class: "font-semibold flex items-center gap-2",
                        Icon { width: 16, height: 16, icon: FaCalendarDays }
                        "Información de la Cita"
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-2 text-sm mt-2",
                        p { {format!(
                            "Fecha y hora: {} a las {}",
                            spanish_date(appointment.appointment_date),
                            appointment.appointment_date.format("%H:%M")
                        )} }
                        p { {format!("Duración: {} minutos", appointment.duration())} }
                        p { {format!("Estado: {}", appointment.status.label())} }
                        p { {format!(
                            "Creada: {}",
                            appointment
                                .created_at
                                .map(|at| at.format("%d/%m/%Y").to_string())
                                .unwrap_or_else(|| "No disponible".into())
                        )} }
                    }
                    div { class: "text-sm mt-2",
                        p { class: "text-base-content/60", "Motivo" }
                        p { class: "font-medium", "{appointment.reason}" }
                    }
                    if let Some(notes) = appointment.notes.as_ref() {
                        div { class: "text-sm mt-2",
                            p { class: "text-base-content/60", "Notas Adicionales" }
                            p { class: "bg-base-100 p-3 rounded-md", "{notes}" }
                        }
                    }
                }
            }

            div { class: "modal-action",
                a {
                    class: "btn btn-outline",
                    href: "{export_href}",
                    download: "{export_name}",
                    Icon { width: 14, height: 14, icon: FaDownload }
                    "Exportar a Calendario"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_edit.call(edit.clone()),
                    "Editar Cita"
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
