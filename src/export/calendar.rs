//! iCalendar generation for a single appointment.

use chrono::{DateTime, Utc};

use crate::model::appointment::Appointment;

/// Renders the appointment as a one-event iCalendar file. The description
/// carries the visit reason and the veterinarian; the location is the clinic.
pub fn appointment_event(appointment: &Appointment) -> String {
    let start = appointment.appointment_date;
    let end = appointment.ends_at();
    let pet = appointment.pet_name().unwrap_or("Sin mascota");
    let veterinarian = appointment
        .veterinarian_name
        .as_deref()
        .unwrap_or("Sin veterinario");

    [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("SUMMARY:Cita Veterinaria - {pet}"),
        format!(
            "DESCRIPTION:{}\\nVeterinario: {veterinarian}",
            appointment.reason
        ),
        format!("DTSTART:{}", stamp(start)),
        format!("DTEND:{}", stamp(end)),
        "LOCATION:Clínica Veterinaria".to_string(),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ]
    .join("\n")
}

/// Download file name for an appointment export.
pub fn event_file_name(appointment: &Appointment) -> String {
    format!(
        "cita-{}-{}.ics",
        appointment.pet_name().unwrap_or("mascota"),
        appointment.appointment_date.format("%Y-%m-%d")
    )
}

fn stamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::appointment::{AppointmentPet, AppointmentStatus};
    use chrono::TimeZone;

    fn appointment() -> Appointment {
        Appointment {
            id: "a1".into(),
            appointment_date: Utc.with_ymd_and_hms(2026, 8, 7, 15, 30, 0).unwrap(),
            reason: "Vacunación anual".into(),
            status: AppointmentStatus::Programada,
            duration_minutes: Some(45),
            notes: None,
            created_at: None,
            updated_at: None,
            pet_id: Some("pet-1".into()),
            veterinarian_id: Some("vet-1".into()),
            pets: Some(AppointmentPet {
                id: "pet-1".into(),
                name: "Rocky".into(),
                species: "perro".into(),
                breed: None,
                owners: None,
            }),
            veterinarian_name: Some("Dra. Rivera".into()),
        }
    }

    /// Tests the generated event body.
    ///
    /// Expected: envelope lines plus DTEND offset by the duration.
    #[test]
    fn renders_single_event() {
        let ics = appointment_event(&appointment());
        assert!(ics.starts_with("BEGIN:VCALENDAR\nVERSION:2.0\nBEGIN:VEVENT"));
        assert!(ics.contains("SUMMARY:Cita Veterinaria - Rocky"));
        assert!(ics.contains("DESCRIPTION:Vacunación anual\\nVeterinario: Dra. Rivera"));
        assert!(ics.contains("DTSTART:20260807T153000"));
        assert!(ics.contains("DTEND:20260807T161500"));
        assert!(ics.ends_with("END:VEVENT\nEND:VCALENDAR"));
    }

    /// Tests the date-stamped download name.
    ///
    /// Expected: pet name and event date.
    #[test]
    fn names_file_after_pet_and_date() {
        assert_eq!(event_file_name(&appointment()), "cita-Rocky-2026-08-07.ics");
    }
}
