//! Invoice schema mirrors. The billing screen is disabled (CFDI/e-invoicing is
//! out of scope), but the tables exist and the rows deserialize, so the models
//! are kept for the day the screen returns.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// An invoice header row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    /// Fiscal folio assigned by the CFDI stamping provider.
    pub cfdi_uuid: Option<String>,
    pub owner_id: Option<String>,
    pub pet_id: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub subtotal: f64,
    pub tax: Option<f64>,
    pub total: f64,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A line item referencing the inventory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvoiceItem {
    pub id: String,
    pub invoice_id: Option<String>,
    pub inventory_item_id: Option<String>,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
    pub created_at: Option<DateTime<Utc>>,
}

impl InvoiceItem {
    /// Line total recomputed from its parts.
    pub fn computed_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a line item's stored total can be cross-checked against its
    /// parts.
    ///
    /// Expected: quantity times unit price.
    #[test]
    fn recomputes_line_total() {
        let line = InvoiceItem {
            id: "li1".into(),
            invoice_id: Some("inv1".into()),
            inventory_item_id: None,
            description: "Consulta general".into(),
            quantity: 2.0,
            unit_price: 350.0,
            total: 700.0,
            created_at: None,
        };
        assert_eq!(line.computed_total(), line.total);
    }
}
