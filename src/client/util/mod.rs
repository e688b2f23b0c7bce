//! Per-entity request helpers over the backend client. Each screen pairs one
//! of these loaders with a `use_resource` and restarts it after every write.

pub mod appointments;
pub mod dashboard;
pub mod inventory;
pub mod owners;
pub mod pets;
pub mod staff;

use crate::supabase::Error;

/// User-facing message for a failed backend request: auth errors carry their
/// own message, everything else gets the screen's translated fallback.
pub fn backend_message(error: &Error, fallback: &str) -> String {
    if error.is_auth() {
        error.to_string()
    } else {
        fallback.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the error-message special case for auth failures.
    ///
    /// Expected: auth messages pass through, API errors are replaced.
    #[test]
    fn auth_errors_pass_through() {
        let auth = Error::Auth("Invalid login credentials".into());
        assert_eq!(
            backend_message(&auth, "Error al cargar pacientes"),
            "Invalid login credentials"
        );

        let api = Error::Api {
            status: 500,
            message: "internal".into(),
        };
        assert_eq!(
            backend_message(&api, "Error al cargar pacientes"),
            "Error al cargar pacientes"
        );
    }
}
