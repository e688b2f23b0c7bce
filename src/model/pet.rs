use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::owner::Owner;
use super::{contains_ci, non_empty, ActiveFilter};

/// Species offered by the patient form. The column itself is free text, so the
/// stored value is kept as a string and matched case-insensitively.
pub const SPECIES: &[&str] = &[
    "perro", "gato", "ave", "conejo", "hamster", "tortuga", "otro",
];

pub const GENDERS: &[&str] = &["macho", "hembra"];

/// Display form of a species value: first letter uppercased.
pub fn species_label(species: &str) -> String {
    let mut chars = species.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// A patient (pet) row with its embedded owner and a derived appointment count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
    pub color: Option<String>,
    pub owner_id: String,
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    pub photo_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub owners: Option<Owner>,
    /// Loaded with a separate count query per pet, not stored in the row.
    #[serde(skip)]
    pub appointment_count: u64,
}

impl Pet {
    pub fn owner_name(&self) -> Option<&str> {
        self.owners.as_ref().map(|o| o.full_name.as_str())
    }

    /// Free-text match over the display fields: pet name, species, breed, and
    /// the owner's full name.
    pub fn matches_search(&self, query: &str) -> bool {
        query.is_empty()
            || contains_ci(&self.name, query)
            || contains_ci(&self.species, query)
            || self
                .breed
                .as_deref()
                .is_some_and(|breed| contains_ci(breed, query))
            || self
                .owner_name()
                .is_some_and(|name| contains_ci(name, query))
    }
}

/// Write payload for creating or updating a pet. Cleared optional fields are
/// serialized as nulls so an update can erase them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetPayload {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
    pub color: Option<String>,
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    pub photo_url: Option<String>,
    pub owner_id: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Patient form state (raw field text, as typed).
#[derive(Debug, Clone, PartialEq)]
pub struct PetForm {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub weight: String,
    pub gender: String,
    pub color: String,
    pub medical_history: String,
    pub allergies: String,
    pub photo_url: String,
    pub owner_id: String,
}

impl Default for PetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: "perro".into(),
            breed: String::new(),
            age: String::new(),
            weight: String::new(),
            gender: "macho".into(),
            color: String::new(),
            medical_history: String::new(),
            allergies: String::new(),
            photo_url: String::new(),
            owner_id: String::new(),
        }
    }
}

impl PetForm {
    /// Pre-fills the form from an existing row for editing.
    pub fn from_pet(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            species: pet.species.clone(),
            breed: pet.breed.clone().unwrap_or_default(),
            age: pet.age.map(|a| a.to_string()).unwrap_or_default(),
            weight: pet.weight.map(|w| w.to_string()).unwrap_or_default(),
            gender: pet.gender.clone().unwrap_or_else(|| "macho".into()),
            color: pet.color.clone().unwrap_or_default(),
            medical_history: pet.medical_history.clone().unwrap_or_default(),
            allergies: pet.allergies.clone().unwrap_or_default(),
            photo_url: pet.photo_url.clone().unwrap_or_default(),
            owner_id: pet.owner_id.clone(),
        }
    }

    /// Validates the form and produces the write payload. The first violation
    /// aborts the submission with no request issued.
    pub fn validate(&self) -> Result<PetPayload, PetFormError> {
        if self.name.trim().is_empty()
            || self.species.trim().is_empty()
            || self.owner_id.is_empty()
        {
            return Err(PetFormError::MissingRequired);
        }

        let age = match non_empty(&self.age) {
            Some(raw) => {
                let age: i32 = raw.parse().map_err(|_| PetFormError::AgeOutOfRange)?;
                if !(0..=50).contains(&age) {
                    return Err(PetFormError::AgeOutOfRange);
                }
                Some(age)
            }
            None => None,
        };

        let weight = match non_empty(&self.weight) {
            Some(raw) => {
                let weight: f64 = raw.parse().map_err(|_| PetFormError::WeightNotPositive)?;
                if weight <= 0.0 {
                    return Err(PetFormError::WeightNotPositive);
                }
                Some(weight)
            }
            None => None,
        };

        Ok(PetPayload {
            name: self.name.trim().to_string(),
            species: self.species.clone(),
            breed: non_empty(&self.breed),
            age,
            weight,
            gender: non_empty(&self.gender),
            color: non_empty(&self.color),
            medical_history: non_empty(&self.medical_history),
            allergies: non_empty(&self.allergies),
            photo_url: non_empty(&self.photo_url),
            owner_id: self.owner_id.clone(),
            active: true,
            created_by: None,
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PetFormError {
    #[error("Nombre, especie y dueño son obligatorios")]
    MissingRequired,
    #[error("La edad debe estar entre 0 y 50 años")]
    AgeOutOfRange,
    #[error("El peso debe ser mayor a 0")]
    WeightNotPositive,
}

/// Patients screen filter: free text, species, and the active-state tab plus
/// dropdown. Criteria are AND-composed, so application order is irrelevant.
#[derive(Debug, Clone, PartialEq)]
pub struct PetFilter {
    pub search: String,
    /// `None` means every species.
    pub species: Option<String>,
    pub tab: ActiveFilter,
    pub status: ActiveFilter,
}

impl Default for PetFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            species: None,
            tab: ActiveFilter::Active,
            status: ActiveFilter::All,
        }
    }
}

impl PetFilter {
    pub fn matches(&self, pet: &Pet) -> bool {
        let species_match = self
            .species
            .as_deref()
            .map_or(true, |species| pet.species.eq_ignore_ascii_case(species));

        pet.matches_search(&self.search)
            && species_match
            && self.tab.matches(pet.active)
            && self.status.matches(pet.active)
    }

    pub fn apply<'a>(&self, pets: &'a [Pet]) -> Vec<&'a Pet> {
        pets.iter().filter(|pet| self.matches(pet)).collect()
    }

    /// Whether anything deviates from the widest view, for the empty-state copy.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
            || self.species.is_some()
            || self.tab != ActiveFilter::All
            || self.status != ActiveFilter::All
    }

    pub fn reset(&mut self) {
        *self = Self {
            tab: ActiveFilter::All,
            ..Self::default()
        };
    }
}

/// Header statistics for the patients screen, derived from the unfiltered set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PetStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub dogs: usize,
    pub cats: usize,
}

pub fn pet_stats(pets: &[Pet]) -> PetStats {
    PetStats {
        total: pets.len(),
        active: pets.iter().filter(|p| p.active).count(),
        inactive: pets.iter().filter(|p| !p.active).count(),
        dogs: pets
            .iter()
            .filter(|p| p.species.eq_ignore_ascii_case("perro"))
            .count(),
        cats: pets
            .iter()
            .filter(|p| p.species.eq_ignore_ascii_case("gato"))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pet(name: &str, species: &str, active: bool, owner: &str) -> Pet {
        let at = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        Pet {
            id: format!("pet-{name}"),
            name: name.into(),
            species: species.into(),
            breed: Some("criollo".into()),
            age: Some(4),
            weight: Some(12.5),
            gender: Some("macho".into()),
            color: None,
            owner_id: "owner-1".into(),
            medical_history: None,
            allergies: None,
            photo_url: None,
            active,
            created_at: at,
            updated_at: at,
            owners: Some(Owner {
                id: "owner-1".into(),
                full_name: owner.into(),
                phone: "555-0101".into(),
                email: None,
                address: None,
                rfc: None,
            }),
            appointment_count: 0,
        }
    }

    /// Tests that a search hit on only the owner's name includes the pet.
    ///
    /// Expected: the pet matches even though none of its own fields do.
    #[test]
    fn search_matches_owner_name() {
        let rocky = pet("Rocky", "perro", true, "Fernanda Ruiz");
        assert!(rocky.matches_search("fernanda"));
        assert!(!rocky.matches_search("michi"));
    }

    /// Tests that filter criteria AND-compose and are order independent.
    ///
    /// Expected: the same single pet survives regardless of which criterion is
    /// considered "first" (matches() evaluates them all).
    #[test]
    fn filters_combine_with_and() {
        let pets = vec![
            pet("Rocky", "perro", true, "Fernanda Ruiz"),
            pet("Michi", "gato", true, "Fernanda Ruiz"),
            pet("Solovino", "perro", false, "Pedro Gómez"),
        ];

        let filter = PetFilter {
            search: "fernanda".into(),
            species: Some("perro".into()),
            tab: ActiveFilter::Active,
            status: ActiveFilter::All,
        };
        let visible = filter.apply(&pets);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Rocky");

        // Same criteria expressed through the other active selector.
        let swapped = PetFilter {
            search: "fernanda".into(),
            species: Some("perro".into()),
            tab: ActiveFilter::All,
            status: ActiveFilter::Active,
        };
        assert_eq!(swapped.apply(&pets).len(), 1);
    }

    /// Tests rejecting an age outside [0, 50].
    ///
    /// Expected: AgeOutOfRange, no payload produced.
    #[test]
    fn rejects_age_out_of_range() {
        let form = PetForm {
            name: "Rocky".into(),
            owner_id: "owner-1".into(),
            age: "51".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(PetFormError::AgeOutOfRange));
    }

    /// Tests rejecting a non-positive weight.
    ///
    /// Expected: WeightNotPositive
    #[test]
    fn rejects_non_positive_weight() {
        let form = PetForm {
            name: "Rocky".into(),
            owner_id: "owner-1".into(),
            weight: "0".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(PetFormError::WeightNotPositive));
    }

    /// Tests that missing name/owner aborts before optional-field parsing.
    ///
    /// Expected: MissingRequired
    #[test]
    fn rejects_missing_required_fields() {
        let form = PetForm {
            age: "not-a-number".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(PetFormError::MissingRequired));
    }

    /// Tests payload construction from a complete form.
    ///
    /// Expected: blank optionals become None, age/weight parsed.
    #[test]
    fn builds_payload_from_valid_form() {
        let form = PetForm {
            name: "  Rocky ".into(),
            owner_id: "owner-1".into(),
            age: "4".into(),
            weight: "12.5".into(),
            breed: String::new(),
            ..Default::default()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Rocky");
        assert_eq!(payload.age, Some(4));
        assert_eq!(payload.weight, Some(12.5));
        assert_eq!(payload.breed, None);
        assert!(payload.active);
    }

    /// Tests the header statistics over a mixed collection.
    ///
    /// Expected: totals per state and species.
    #[test]
    fn computes_stats() {
        let pets = vec![
            pet("Rocky", "perro", true, "Fernanda Ruiz"),
            pet("Michi", "gato", true, "Fernanda Ruiz"),
            pet("Solovino", "Perro", false, "Pedro Gómez"),
        ];
        let stats = pet_stats(&pets);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.dogs, 2);
        assert_eq!(stats.cats, 1);
    }
}
