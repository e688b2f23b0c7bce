use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::owner::OwnerContact;
use super::{contains_ci, non_empty};

/// Durations offered by the appointment form, in minutes.
pub const DURATION_CHOICES: &[i32] = &[15, 30, 45, 60, 90, 120];

/// Duration bounds enforced at the write boundary, in minutes.
pub const MIN_DURATION_MINUTES: i32 = 15;
pub const MAX_DURATION_MINUTES: i32 = 240;

/// Appointment lifecycle states as stored in the `status` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Programada,
    EnProgreso,
    Completada,
    Cancelada,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        Self::Programada,
        Self::EnProgreso,
        Self::Completada,
        Self::Cancelada,
    ];

    /// Wire value used in status filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Programada => "programada",
            Self::EnProgreso => "en_progreso",
            Self::Completada => "completada",
            Self::Cancelada => "cancelada",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Programada => "Programada",
            Self::EnProgreso => "En progreso",
            Self::Completada => "Completada",
            Self::Cancelada => "Cancelada",
        }
    }

    /// States reachable from this one. Only scheduled appointments move; every
    /// other state is terminal.
    pub fn allowed_transitions(&self) -> &'static [AppointmentStatus] {
        match self {
            Self::Programada => &[Self::EnProgreso, Self::Completada, Self::Cancelada],
            _ => &[],
        }
    }

    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected status change, checked before the update request is issued.
#[derive(Debug, Error, PartialEq)]
#[error("No se puede cambiar una cita de {from} a {to}")]
pub struct InvalidTransition {
    pub from: AppointmentStatus,
    pub to: AppointmentStatus,
}

/// Pet fields embedded in an appointment row, with the owner contact nested a
/// level deeper.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppointmentPet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    #[serde(default)]
    pub owners: Option<OwnerContact>,
}

/// An appointment row. The veterinarian's name is resolved from a separate
/// `profiles` query and attached after the fact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pet_id: Option<String>,
    pub veterinarian_id: Option<String>,
    #[serde(default)]
    pub pets: Option<AppointmentPet>,
    #[serde(skip)]
    pub veterinarian_name: Option<String>,
}

impl Appointment {
    pub fn duration(&self) -> i32 {
        self.duration_minutes.unwrap_or(30)
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.appointment_date + Duration::minutes(self.duration() as i64)
    }

    pub fn pet_name(&self) -> Option<&str> {
        self.pets.as_ref().map(|p| p.name.as_str())
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.pets
            .as_ref()
            .and_then(|p| p.owners.as_ref())
            .map(|o| o.full_name.as_str())
    }

    /// Free-text match over pet name/species/breed, the veterinarian's name,
    /// and the visit reason.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let pet = self.pets.as_ref();
        pet.is_some_and(|p| contains_ci(&p.name, query))
            || pet.is_some_and(|p| contains_ci(&p.species, query))
            || pet
                .and_then(|p| p.breed.as_deref())
                .is_some_and(|breed| contains_ci(breed, query))
            || self
                .veterinarian_name
                .as_deref()
                .is_some_and(|name| contains_ci(name, query))
            || contains_ci(&self.reason, query)
    }
}

/// Whether the appointment falls on the reference day (UTC calendar).
pub fn is_today(at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    at.date_naive() == now.date_naive()
}

pub fn is_tomorrow(at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    at.date_naive() == now.date_naive() + Duration::days(1)
}

pub fn is_past(at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    at < now
}

/// Relative badge shown on appointment cards.
pub fn date_badge(at: DateTime<Utc>, now: DateTime<Utc>) -> Option<&'static str> {
    if is_today(at, now) {
        Some("Hoy")
    } else if is_tomorrow(at, now) {
        Some("Mañana")
    } else if at > now && at - now < Duration::hours(24) {
        Some("Próximas 24h")
    } else if is_past(at, now) {
        Some("Pasada")
    } else {
        None
    }
}

/// Date bucket selected in the appointments screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Tomorrow,
    Upcoming,
    Past,
}

impl DateFilter {
    pub fn matches(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Today => is_today(at, now),
            Self::Tomorrow => is_tomorrow(at, now),
            // A past time earlier today still counts as upcoming, not past,
            // mirroring the bucket the screen always showed.
            Self::Past => is_past(at, now) && !is_today(at, now),
            Self::Upcoming => !is_past(at, now) || is_today(at, now),
        }
    }
}

/// Write payload for creating or updating an appointment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentPayload {
    pub pet_id: String,
    pub veterinarian_id: String,
    pub appointment_date: NaiveDateTime,
    pub reason: String,
    pub duration_minutes: i32,
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Status-change patch, issued only after the transition guard passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusPatch {
    pub status: AppointmentStatus,
    pub updated_at: DateTime<Utc>,
}

/// Appointment form state (raw field text, as typed).
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentForm {
    pub pet_id: String,
    pub veterinarian_id: String,
    /// `datetime-local` input value, `YYYY-MM-DDTHH:MM`.
    pub appointment_date: String,
    pub reason: String,
    pub duration_minutes: i32,
    pub notes: String,
}

impl Default for AppointmentForm {
    fn default() -> Self {
        Self {
            pet_id: String::new(),
            veterinarian_id: String::new(),
            appointment_date: String::new(),
            reason: String::new(),
            duration_minutes: 30,
            notes: String::new(),
        }
    }
}

impl AppointmentForm {
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            pet_id: appointment.pet_id.clone().unwrap_or_default(),
            veterinarian_id: appointment.veterinarian_id.clone().unwrap_or_default(),
            appointment_date: appointment
                .appointment_date
                .naive_utc()
                .format("%Y-%m-%dT%H:%M")
                .to_string(),
            reason: appointment.reason.clone(),
            duration_minutes: appointment.duration(),
            notes: appointment.notes.clone().unwrap_or_default(),
        }
    }

    /// Validates the form and produces the write payload. The first violation
    /// aborts the submission with no request issued.
    pub fn validate(&self) -> Result<AppointmentPayload, AppointmentFormError> {
        if self.pet_id.is_empty()
            || self.veterinarian_id.is_empty()
            || self.appointment_date.is_empty()
            || self.reason.trim().is_empty()
        {
            return Err(AppointmentFormError::MissingRequired);
        }

        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&self.duration_minutes) {
            return Err(AppointmentFormError::DurationOutOfRange);
        }

        let appointment_date =
            NaiveDateTime::parse_from_str(&self.appointment_date, "%Y-%m-%dT%H:%M")
                .or_else(|_| {
                    NaiveDateTime::parse_from_str(&self.appointment_date, "%Y-%m-%dT%H:%M:%S")
                })
                .map_err(|_| AppointmentFormError::InvalidDate)?;

        Ok(AppointmentPayload {
            pet_id: self.pet_id.clone(),
            veterinarian_id: self.veterinarian_id.clone(),
            appointment_date,
            reason: self.reason.trim().to_string(),
            duration_minutes: self.duration_minutes,
            notes: non_empty(&self.notes),
            status: None,
            created_by: None,
            updated_at: None,
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AppointmentFormError {
    #[error("Completa todos los campos requeridos")]
    MissingRequired,
    #[error("La duración debe estar entre 15 y 240 minutos")]
    DurationOutOfRange,
    #[error("Fecha u hora inválida")]
    InvalidDate,
}

/// Appointments screen filter. Criteria are AND-composed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentFilter {
    pub search: String,
    /// `None` means every status.
    pub status: Option<AppointmentStatus>,
    pub date: DateFilter,
}

impl AppointmentFilter {
    pub fn matches(&self, appointment: &Appointment, now: DateTime<Utc>) -> bool {
        let status_match = self
            .status
            .map_or(true, |status| appointment.status == status);

        appointment.matches_search(&self.search)
            && status_match
            && self.date.matches(appointment.appointment_date, now)
    }

    pub fn apply<'a>(
        &self,
        appointments: &'a [Appointment],
        now: DateTime<Utc>,
    ) -> Vec<&'a Appointment> {
        appointments
            .iter()
            .filter(|appointment| self.matches(appointment, now))
            .collect()
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.status.is_some() || self.date != DateFilter::All
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Header statistics for the appointments screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AppointmentStats {
    pub total: usize,
    pub today: usize,
    pub pending: usize,
    pub completed: usize,
}

pub fn appointment_stats(appointments: &[Appointment], now: DateTime<Utc>) -> AppointmentStats {
    AppointmentStats {
        total: appointments.len(),
        today: appointments
            .iter()
            .filter(|a| is_today(a.appointment_date, now))
            .count(),
        pending: appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Programada)
            .count(),
        completed: appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completada)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
    }

    fn appointment(id: &str, at: DateTime<Utc>, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: id.into(),
            appointment_date: at,
            reason: "Vacunación anual".into(),
            status,
            duration_minutes: Some(30),
            notes: None,
            created_at: Some(at),
            updated_at: None,
            pet_id: Some("pet-1".into()),
            veterinarian_id: Some("vet-1".into()),
            pets: Some(AppointmentPet {
                id: "pet-1".into(),
                name: "Rocky".into(),
                species: "perro".into(),
                breed: None,
                owners: Some(OwnerContact {
                    full_name: "Fernanda Ruiz".into(),
                    phone: "555-0101".into(),
                }),
            }),
            veterinarian_name: Some("Dra. Rivera".into()),
        }
    }

    /// Tests bucket membership for an appointment later the same day.
    ///
    /// Expected: included by Today and Upcoming, excluded by Tomorrow and Past.
    #[test]
    fn today_bucket_includes_same_day() {
        let at = Utc.with_ymd_and_hms(2026, 8, 7, 17, 30, 0).unwrap();
        assert!(DateFilter::Today.matches(at, now()));
        assert!(DateFilter::Upcoming.matches(at, now()));
        assert!(!DateFilter::Tomorrow.matches(at, now()));
        assert!(!DateFilter::Past.matches(at, now()));
    }

    /// Tests that an earlier hour of the current day is still not Past.
    ///
    /// Expected: Past excludes it, Today and Upcoming include it.
    #[test]
    fn past_bucket_excludes_earlier_today() {
        let at = Utc.with_ymd_and_hms(2026, 8, 7, 8, 0, 0).unwrap();
        assert!(!DateFilter::Past.matches(at, now()));
        assert!(DateFilter::Today.matches(at, now()));
        assert!(DateFilter::Upcoming.matches(at, now()));
    }

    /// Tests tomorrow and yesterday classification.
    ///
    /// Expected: next calendar day is Tomorrow, previous day is Past only.
    #[test]
    fn classifies_adjacent_days() {
        let tomorrow = Utc.with_ymd_and_hms(2026, 8, 8, 9, 0, 0).unwrap();
        let yesterday = Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap();
        assert!(DateFilter::Tomorrow.matches(tomorrow, now()));
        assert!(!DateFilter::Today.matches(tomorrow, now()));
        assert!(DateFilter::Past.matches(yesterday, now()));
        assert!(!DateFilter::Upcoming.matches(yesterday, now()));
    }

    /// Tests the relative badge precedence.
    ///
    /// Expected: Hoy before the 24h window, Pasada for older dates, nothing
    /// for dates further out.
    #[test]
    fn resolves_date_badge() {
        let later_today = Utc.with_ymd_and_hms(2026, 8, 7, 20, 0, 0).unwrap();
        let tomorrow = Utc.with_ymd_and_hms(2026, 8, 8, 9, 0, 0).unwrap();
        let next_week = Utc.with_ymd_and_hms(2026, 8, 14, 9, 0, 0).unwrap();
        let last_week = Utc.with_ymd_and_hms(2026, 7, 31, 9, 0, 0).unwrap();

        assert_eq!(date_badge(later_today, now()), Some("Hoy"));
        assert_eq!(date_badge(tomorrow, now()), Some("Mañana"));
        assert_eq!(date_badge(next_week, now()), None);
        assert_eq!(date_badge(last_week, now()), Some("Pasada"));
    }

    /// Tests the legal transitions out of the scheduled state.
    ///
    /// Expected: scheduled reaches the three others; the rest are terminal.
    #[test]
    fn scheduled_is_the_only_open_state() {
        use AppointmentStatus::*;

        assert!(Programada.can_transition_to(EnProgreso));
        assert!(Programada.can_transition_to(Completada));
        assert!(Programada.can_transition_to(Cancelada));
        assert!(!Programada.can_transition_to(Programada));

        for terminal in [EnProgreso, Completada, Cancelada] {
            assert!(terminal.allowed_transitions().is_empty());
        }
    }

    /// Tests rejecting durations outside [15, 240].
    ///
    /// Expected: DurationOutOfRange on both sides, no payload produced.
    #[test]
    fn rejects_duration_out_of_range() {
        let mut form = AppointmentForm {
            pet_id: "pet-1".into(),
            veterinarian_id: "vet-1".into(),
            appointment_date: "2026-08-07T15:30".into(),
            reason: "Consulta".into(),
            duration_minutes: 10,
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(AppointmentFormError::DurationOutOfRange)
        );

        form.duration_minutes = 241;
        assert_eq!(
            form.validate(),
            Err(AppointmentFormError::DurationOutOfRange)
        );

        form.duration_minutes = 240;
        assert!(form.validate().is_ok());
    }

    /// Tests that an empty required field aborts validation.
    ///
    /// Expected: MissingRequired
    #[test]
    fn rejects_missing_fields() {
        let form = AppointmentForm {
            veterinarian_id: "vet-1".into(),
            appointment_date: "2026-08-07T15:30".into(),
            reason: "Consulta".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(AppointmentFormError::MissingRequired));
    }

    /// Tests parsing the datetime-local form value into the payload.
    ///
    /// Expected: naive timestamp preserved, blank notes become None.
    #[test]
    fn parses_form_date() {
        let form = AppointmentForm {
            pet_id: "pet-1".into(),
            veterinarian_id: "vet-1".into(),
            appointment_date: "2026-08-07T15:30".into(),
            reason: "Consulta".into(),
            notes: "   ".into(),
            ..Default::default()
        };
        let payload = form.validate().unwrap();
        assert_eq!(
            payload.appointment_date.format("%Y-%m-%d %H:%M").to_string(),
            "2026-08-07 15:30"
        );
        assert_eq!(payload.notes, None);
    }

    /// Tests filter AND-composition across search, status, and date bucket.
    ///
    /// Expected: only the appointment satisfying all three criteria remains.
    #[test]
    fn filters_combine_with_and() {
        let today = Utc.with_ymd_and_hms(2026, 8, 7, 16, 0, 0).unwrap();
        let tomorrow = Utc.with_ymd_and_hms(2026, 8, 8, 10, 0, 0).unwrap();
        let appointments = vec![
            appointment("a1", today, AppointmentStatus::Programada),
            appointment("a2", tomorrow, AppointmentStatus::Programada),
            appointment("a3", today, AppointmentStatus::Cancelada),
        ];

        let filter = AppointmentFilter {
            search: "rivera".into(),
            status: Some(AppointmentStatus::Programada),
            date: DateFilter::Today,
        };
        let visible = filter.apply(&appointments, now());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a1");
    }

    /// Tests the header statistics.
    ///
    /// Expected: totals per bucket and status.
    #[test]
    fn computes_stats() {
        let today = Utc.with_ymd_and_hms(2026, 8, 7, 16, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
        let appointments = vec![
            appointment("a1", today, AppointmentStatus::Programada),
            appointment("a2", past, AppointmentStatus::Completada),
            appointment("a3", past, AppointmentStatus::Cancelada),
        ];
        let stats = appointment_stats(&appointments, now());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.today, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completed, 1);
    }
}
