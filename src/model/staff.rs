use serde::Deserialize;

/// The only role with special treatment: staff offered by the appointment
/// form's veterinarian picker and counted on the dashboard.
pub const VETERINARIAN_ROLE: &str = "veterinario";

/// A staff identity row from the `profiles` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StaffProfile {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub role: Option<String>,
}
