use dioxus_logger::tracing;
use thiserror::Error as ThisError;

use crate::model::appointment::{
    Appointment, AppointmentPayload, AppointmentPet, AppointmentStatus, InvalidTransition,
    StatusPatch,
};
use crate::model::staff::StaffProfile;
use crate::supabase::{Client, Error, Order};

/// Loads every appointment with its pet (and the pet's owner) embedded,
/// earliest first, then resolves veterinarian names from `profiles` with one
/// `in` query. A failed name lookup degrades to ids without names.
pub async fn fetch_appointments(client: &Client) -> Result<Vec<Appointment>, Error> {
    let mut appointments: Vec<Appointment> = client
        .from("appointments")
        .select("*,pets(id,name,species,breed,owners(full_name,phone))")
        .order("appointment_date", Order::Ascending)
        .fetch()
        .await?;

    let mut vet_ids: Vec<String> = appointments
        .iter()
        .filter_map(|a| a.veterinarian_id.clone())
        .collect();
    vet_ids.sort();
    vet_ids.dedup();

    if !vet_ids.is_empty() {
        match client
            .from("profiles")
            .select("id,full_name")
            .in_list("id", &vet_ids)
            .fetch::<StaffProfile>()
            .await
        {
            Ok(profiles) => {
                for appointment in &mut appointments {
                    if let Some(vet_id) = &appointment.veterinarian_id {
                        appointment.veterinarian_name = profiles
                            .iter()
                            .find(|profile| &profile.id == vet_id)
                            .map(|profile| profile.full_name.clone());
                    }
                }
            }
            Err(err) => tracing::debug!("failed to resolve veterinarian names: {err}"),
        }
    }

    Ok(appointments)
}

/// Active pets for the appointment form picker.
pub async fn fetch_active_pets(client: &Client) -> Result<Vec<AppointmentPet>, Error> {
    client
        .from("pets")
        .select("id,name,species,breed,owners(full_name,phone)")
        .eq("active", true)
        .order("name", Order::Ascending)
        .fetch()
        .await
}

pub async fn create_appointment(
    client: &Client,
    payload: &AppointmentPayload,
) -> Result<(), Error> {
    client.from("appointments").insert(payload).await
}

pub async fn update_appointment(
    client: &Client,
    id: &str,
    payload: &AppointmentPayload,
) -> Result<(), Error> {
    client.from("appointments").eq("id", id).update(payload).await
}

pub async fn delete_appointment(client: &Client, id: &str) -> Result<(), Error> {
    client.from("appointments").eq("id", id).delete().await
}

/// A rejected or failed status change.
#[derive(Debug, ThisError)]
pub enum StatusChangeError {
    #[error(transparent)]
    Invalid(#[from] InvalidTransition),
    #[error(transparent)]
    Backend(#[from] Error),
}

/// Moves an appointment to `next`, validating the transition at the write
/// boundary: an illegal change is rejected before any request is issued.
pub async fn transition_appointment(
    client: &Client,
    appointment: &Appointment,
    next: AppointmentStatus,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<(), StatusChangeError> {
    if !appointment.status.can_transition_to(next) {
        return Err(InvalidTransition {
            from: appointment.status,
            to: next,
        }
        .into());
    }

    client
        .from("appointments")
        .eq("id", &appointment.id)
        .update(&StatusPatch {
            status: next,
            updated_at: now,
        })
        .await?;
    Ok(())
}
