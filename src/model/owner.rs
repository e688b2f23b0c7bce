use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::non_empty;

/// A pet owner as stored in the `owners` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Owner {
    pub id: String,
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub rfc: Option<String>,
}

/// Owner contact fields embedded in an appointment's pet join.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwnerContact {
    pub full_name: String,
    pub phone: String,
}

/// Write payload for creating an owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerPayload {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,
    pub rfc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Owner quick-create form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub rfc: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum OwnerFormError {
    #[error("Nombre y teléfono son obligatorios")]
    MissingRequired,
}

impl OwnerForm {
    /// Validates the form and produces the write payload. No request is issued
    /// when validation fails.
    pub fn validate(&self) -> Result<OwnerPayload, OwnerFormError> {
        if self.full_name.trim().is_empty() || self.phone.trim().is_empty() {
            return Err(OwnerFormError::MissingRequired);
        }

        Ok(OwnerPayload {
            full_name: self.full_name.trim().to_string(),
            email: non_empty(&self.email),
            phone: self.phone.trim().to_string(),
            address: non_empty(&self.address),
            rfc: non_empty(&self.rfc),
            created_by: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a name-and-phone-only form is accepted and optional fields
    /// become nulls.
    ///
    /// Expected: Ok with None email/address/rfc.
    #[test]
    fn accepts_minimal_owner() {
        let form = OwnerForm {
            full_name: "María López".into(),
            phone: "555-0101".into(),
            ..Default::default()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.full_name, "María López");
        assert_eq!(payload.email, None);
        assert_eq!(payload.address, None);
        assert_eq!(payload.rfc, None);
    }

    /// Tests rejecting a form without a phone number.
    ///
    /// Expected: MissingRequired
    #[test]
    fn rejects_missing_phone() {
        let form = OwnerForm {
            full_name: "María López".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(OwnerFormError::MissingRequired));
    }
}
