//! Domain model: transient mirrors of the backend tables plus the pure rules
//! applied to them on the client (validation, filtering, derived state).
//!
//! Rows are re-fetched in full after every write; nothing here has a lifecycle
//! independent of the backend row it mirrors.

pub mod activity;
pub mod appointment;
pub mod inventory;
pub mod invoice;
pub mod owner;
pub mod pet;
pub mod staff;

use serde::Serialize;

/// Active-flag patch shared by the pet and inventory toggle actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivePatch {
    pub active: bool,
}

/// Three-way active/inactive selection used by tabs and status dropdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub fn matches(&self, active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => active,
            Self::Inactive => !active,
        }
    }
}

/// Case-insensitive substring match used by every free-text search box.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Turns an empty or whitespace-only form field into `None`.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
