use chrono::Utc;
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendarDays, FaCircleCheck, FaClock, FaMagnifyingGlass, FaPlus,
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::appointments::{
    AppointmentCard, AppointmentDetailModal, AppointmentFormModal,
};
use crate::client::components::{ConfirmDialog, EmptyState, Page, StatCard};
use crate::client::store::session::{supabase_client, use_session};
use crate::client::store::toast::use_toasts;
use crate::client::util::appointments::{self, StatusChangeError};
use crate::client::util::{backend_message, staff};
use crate::model::appointment::{
    appointment_stats, Appointment, AppointmentFilter, AppointmentForm, AppointmentPet,
    AppointmentStatus, DateFilter,
};
use crate::model::staff::StaffProfile;

#[component]
pub fn Appointments() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();

    let mut filter = use_signal(AppointmentFilter::default);
    let mut form = use_signal(AppointmentForm::default);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut show_form = use_signal(|| false);
    let mut detail = use_signal(|| Option::<Appointment>::None);
    let mut pending_delete = use_signal(|| Option::<Appointment>::None);

    let mut appointments_res = use_resource(move || {
        let client = supabase_client(&session.read());
        async move { appointments::fetch_appointments(&client).await }
    });
    let pets_res = use_resource(move || {
        let client = supabase_client(&session.read());
        async move { appointments::fetch_active_pets(&client).await }
    });
    let vets_res = use_resource(move || {
        let client = supabase_client(&session.read());
        async move { staff::fetch_veterinarians(&client).await }
    });

    let (all_appointments, loading, load_failed): (Vec<Appointment>, bool, bool) =
        match &*appointments_res.read_unchecked() {
            Some(Ok(rows)) => (rows.clone(), false, false),
            Some(Err(err)) => {
                tracing::error!("failed to load appointments: {err}");
                (Vec::new(), false, true)
            }
            None => (Vec::new(), true, false),
        };
    let picker_pets: Vec<AppointmentPet> = match &*pets_res.read_unchecked() {
        Some(Ok(rows)) => rows.clone(),
        _ => Vec::new(),
    };
    let vets: Vec<StaffProfile> = match &*vets_res.read_unchecked() {
        Some(Ok(rows)) => rows.clone(),
        _ => Vec::new(),
    };

    let now = Utc::now();
    let stats = appointment_stats(&all_appointments, now);
    let visible: Vec<Appointment> = filter
        .read()
        .apply(&all_appointments, now)
        .into_iter()
        .cloned()
        .collect();

    let open_create = move |_| {
        form.set(AppointmentForm::default());
        editing.set(None);
        show_form.set(true);
    };

    let open_edit = move |appointment: Appointment| {
        form.set(AppointmentForm::from_appointment(&appointment));
        editing.set(Some(appointment.id.clone()));
        detail.set(None);
        show_form.set(true);
    };

    let save_appointment = move |_| {
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
                Some(id) => {
                    let mut payload = payload;
                    payload.updated_at = Some(Utc::now());
                    appointments::update_appointment(&client, id, &payload).await
                }
                None => {
                    let mut payload = payload;
                    payload.status = Some(AppointmentStatus::Programada);
                    payload.created_by = state.user.as_ref().map(|u| u.id.clone());
                    appointments::create_appointment(&client, &payload).await
                }
            };
            match result {
                Ok(()) => {
                    toasts.write().success(if editing_id.is_some() {
                        "Cita actualizada correctamente"
                    } else {
                        "Cita creada correctamente"
                    });
                    show_form.set(false);
                    form.set(AppointmentForm::default());
                    editing.set(None);
                    appointments_res.restart();
                }
                Err(err) => {
                    tracing::error!("failed to save appointment: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al guardar la cita"));
                }
            }
        });
    };

    let change_status = move |(appointment, next): (Appointment, AppointmentStatus)| {
        let state = session.read().clone();
        spawn(async move {
            let client = supabase_client(&state);
            match appointments::transition_appointment(&client, &appointment, next, Utc::now())
                .await
            {
                Ok(()) => {
                    toasts.write().success(match next {
                        AppointmentStatus::EnProgreso => "Consulta iniciada",
                        AppointmentStatus::Completada => "Cita completada",
                        AppointmentStatus::Cancelada => "Cita cancelada",
                        AppointmentStatus::Programada => "Cita reprogramada",
                    });
                    appointments_res.restart();
                }
                Err(StatusChangeError::Invalid(err)) => {
                    toasts.write().error(err.to_string());
                }
                Err(StatusChangeError::Backend(err)) => {
                    tracing::error!("failed to update appointment status: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al actualizar el estado"));
                }
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(appointment) = pending_delete.read().clone() else {
            return;
        };
        let state = session.read().clone();
        spawn(async move {
            let client = supabase_client(&state);
            match appointments::delete_appointment(&client, &appointment.id).await {
                Ok(()) => {
                    toasts.write().success("Cita eliminada correctamente");
                    appointments_res.restart();
                }
                Err(err) => {
                    tracing::error!("failed to delete appointment: {err}");
                    toasts
                        .write()
                        .error(backend_message(&err, "Error al eliminar la cita"));
                }
            }
            pending_delete.set(None);
        });
    };

    let empty_message = if filter.read().is_filtered() {
        "No se encontraron citas con los filtros aplicados"
    } else {
        "No hay citas programadas"
    }
    .to_string();
    let search_text = filter.read().search.clone();

    rsx!(
        Title { "Citas | VetCare" }
        Meta {
            name: "description",
            content: "Programa y administra las citas veterinarias"
        }
        Page {
            div { class: "flex flex-col md:flex-row md:items-center justify-between mb-8 gap-4",
                div {
                    h1 { class: "text-3xl font-bold mb-2", "Gestión de Citas" }
                    p { class: "text-base-content/60",
                        "Programa y administra las citas veterinarias"
                    }
                }
                button {
                    class: "btn btn-primary gap-2",
                    onclick: open_create,
                    Icon { width: 16, height: 16, icon: FaPlus }
                    "Nueva Cita"
                }
            }

            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-6",
                StatCard { title: "Total Citas", value: stats.total.to_string(),
                    Icon { width: 32, height: 32, icon: FaCalendarDays, class: "text-blue-500" }
                }
                StatCard { title: "Para Hoy", value: stats.today.to_string(),
                    Icon { width: 32, height: 32, icon: FaClock, class: "text-green-500" }
                }
                StatCard { title: "Pendientes", value: stats.pending.to_string(),
                    Icon { width: 32, height: 32, icon: FaClock, class: "text-yellow-500" }
                }
                StatCard { title: "Completadas", value: stats.completed.to_string(),
                    Icon { width: 32, height: 32, icon: FaCircleCheck, class: "text-green-500" }
                }
            }

            div { class: "card shadow-sm mb-6",
                div { class: "card-body p-4",
                    div { class: "flex flex-col md:flex-row gap-4",
                        label { class: "input input-bordered flex items-center gap-2 flex-1",
                            Icon { width: 16, height: 16, icon: FaMagnifyingGlass, class: "text-base-content/60" }
                            input {
                                class: "grow",
                                placeholder: "Buscar por mascota, veterinario o motivo...",
                                value: "{search_text}",
                                oninput: move |e| filter.write().search = e.value(),
                            }
                        }
                        div { class: "flex gap-2",
                            select {
                                class: "select select-bordered",
                                onchange: move |e| {
                                    filter.write().status = match e.value().as_str() {
                                        "programada" => Some(AppointmentStatus::Programada),
                                        "en_progreso" => Some(AppointmentStatus::EnProgreso),
                                        "completada" => Some(AppointmentStatus::Completada),
                                        "cancelada" => Some(AppointmentStatus::Cancelada),
                                        _ => None,
                                    };
                                },
                                option { value: "", "Todos los estados" }
                                for status in AppointmentStatus::ALL {
                                    option { value: status.as_str(), {status.label()} }
                                }
                            }
                            select {
                                class: "select select-bordered",
                                onchange: move |e| {
                                    filter.write().date = match e.value().as_str() {
                                        "today" => DateFilter::Today,
                                        "tomorrow" => DateFilter::Tomorrow,
                                        "upcoming" => DateFilter::Upcoming,
                                        "past" => DateFilter::Past,
                                        _ => DateFilter::All,
                                    };
                                },
                                option { value: "", "Todas las fechas" }
                                option { value: "today", "Hoy" }
                                option { value: "tomorrow", "Mañana" }
                                option { value: "upcoming", "Próximas" }
                                option { value: "past", "Pasadas" }
                            }
                        }
                    }
                }
            }

            if load_failed {
                div { class: "alert alert-error mb-6",
                    span { "Error al cargar las citas" }
                }
            }

            if loading {
                div { class: "text-center py-12",
                    p { class: "text-base-content/60", "Cargando citas..." }
                }
            } else if visible.is_empty() {
                EmptyState {
                    message: empty_message,
                    on_reset: move |_| filter.write().reset(),
                }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for appointment in visible {
                        AppointmentCard {
                            key: "{appointment.id}",
                            appointment: appointment.clone(),
                            now,
                            on_view: move |appointment| detail.set(Some(appointment)),
                            on_edit: open_edit,
                            on_transition: change_status,
                            on_delete: move |appointment| pending_delete.set(Some(appointment)),
                        }
                    }
                }
            }

            if show_form() {
                AppointmentFormModal {
                    form,
                    pets: picker_pets.clone(),
                    vets: vets.clone(),
                    editing: editing.read().is_some(),
                    on_save: save_appointment,
                    on_close: move |_| show_form.set(false),
                }
            }
            if let Some(appointment) = detail() {
                AppointmentDetailModal {
                    appointment,
                    on_edit: open_edit,
                    on_close: move |_| detail.set(None),
                }
            }
            if let Some(appointment) = pending_delete() {
                ConfirmDialog {
                    message: format!(
                        "¿Estás seguro de eliminar la cita de {}?",
                        appointment.pet_name().unwrap_or("esta mascota")
                    ),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    )
}
