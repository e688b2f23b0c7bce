use chrono::Utc;
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBox, FaCalendarDays, FaClock, FaPaw, FaTriangleExclamation, FaUserDoctor,
};
use dioxus_free_icons::Icon;

use crate::client::components::{Page, StatCard};
use crate::client::store::session::{supabase_client, use_session};
use crate::client::util::dashboard::{load_dashboard, DashboardData};
use crate::model::activity::{time_ago, ActivityKind};

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();

    let data_res = use_resource(move || {
        let client = supabase_client(&session.read());
        async move { load_dashboard(&client, Utc::now()).await }
    });
    let data: Option<DashboardData> = data_res.read_unchecked().clone();
    let now = Utc::now();

    let body = match data {
        None => rsx!(
            div { class: "text-center py-12",
                p { class: "text-base-content/60", "Cargando dashboard..." }
            }
        ),
        Some(data) => rsx!(
            if data.degraded {
                div { class: "alert alert-error mb-6",
                    span { "Error al cargar el dashboard" }
                }
            }

            div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4 mb-8",
                StatCard { title: "Pacientes Activos", value: data.stats.total_pets.to_string(),
                    Icon { width: 32, height: 32, icon: FaPaw, class: "text-purple-500" }
                }
                StatCard { title: "Citas Hoy", value: data.stats.today_appointments.to_string(),
                    Icon { width: 32, height: 32, icon: FaCalendarDays, class: "text-blue-500" }
                }
                StatCard { title: "Stock Bajo", value: data.stats.low_stock_items.to_string(),
                    Icon { width: 32, height: 32, icon: FaTriangleExclamation, class: "text-orange-500" }
                }
                StatCard { title: "Veterinarios Activos", value: data.stats.active_vets.to_string(),
                    Icon { width: 32, height: 32, icon: FaUserDoctor, class: "text-green-500" }
                }
                StatCard { title: "Próximas Citas", value: data.stats.upcoming_appointments.to_string(),
                    Icon { width: 32, height: 32, icon: FaClock, class: "text-yellow-500" }
                }
                StatCard { title: "Productos", value: data.stats.total_inventory_items.to_string(),
                    Icon { width: 32, height: 32, icon: FaBox, class: "text-gray-500" }
                }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                div { class: "card shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Próximas Citas" }
                        if data.upcoming.is_empty() {
                            p { class: "text-base-content/60", "No hay citas programadas esta semana" }
                        }
                        ul { class: "flex flex-col gap-3",
                            for appointment in data.upcoming.clone() {
                                li {
                                    key: "{appointment.id}",
                                    class: "flex items-center gap-3",
                                    div { class: "badge badge-outline",
                                        {appointment.appointment_date.format("%d/%m %H:%M").to_string()}
                                    }
                                    div {
                                        p { class: "font-medium",
                                            {appointment.pets.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| "Sin mascota".into())}
                                        }
                                        p { class: "text-sm text-base-content/60", "{appointment.reason}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "card shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Actividad Reciente" }
                        if data.activity.is_empty() {
                            p { class: "text-base-content/60", "Sin actividad en la última semana" }
                        }
                        ul { class: "flex flex-col gap-3",
                            for entry in data.activity.clone() {
                                li {
                                    key: "{entry.id}",
                                    class: "flex items-center gap-3",
                                    {match entry.kind {
                                        ActivityKind::Appointment => rsx!(
                                            Icon { width: 16, height: 16, icon: FaCalendarDays, class: "text-blue-500" }
                                        ),
                                        ActivityKind::Pet => rsx!(
                                            Icon { width: 16, height: 16, icon: FaPaw, class: "text-purple-500" }
                                        ),
                                        ActivityKind::Inventory => rsx!(
                                            Icon { width: 16, height: 16, icon: FaBox, class: "text-orange-500" }
                                        ),
                                    }}
                                    div {
                                        p { class: "text-sm", "{entry.description}" }
                                        p { class: "text-xs text-base-content/60",
                                            {time_ago(entry.timestamp, now)}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        ),
    };

    rsx!(
        Title { "Dashboard | VetCare" }
        Meta {
            name: "description",
            content: "Resumen de pacientes, citas e inventario de la clínica"
        }
        Page {
            h1 { class: "text-3xl font-bold mb-2", "Dashboard" }
            p { class: "text-base-content/60 mb-6", "Resumen general de la clínica" }
            {body}
        }
    )
}
