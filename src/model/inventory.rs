use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{contains_ci, non_empty, ActiveFilter};

/// Days before expiration at which an item counts as near expiry.
pub const NEAR_EXPIRY_DAYS: i64 = 30;

/// Product categories stored in the `category` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Medicamento,
    Vacuna,
    Suministro,
    Alimento,
    Accesorio,
    #[default]
    #[serde(other)]
    Otro,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Medicamento,
        Self::Vacuna,
        Self::Suministro,
        Self::Alimento,
        Self::Accesorio,
        Self::Otro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medicamento => "medicamento",
            Self::Vacuna => "vacuna",
            Self::Suministro => "suministro",
            Self::Alimento => "alimento",
            Self::Accesorio => "accesorio",
            Self::Otro => "otro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Medicamento => "Medicamento",
            Self::Vacuna => "Vacuna",
            Self::Suministro => "Suministro",
            Self::Alimento => "Alimento",
            Self::Accesorio => "Accesorio",
            Self::Otro => "Otro",
        }
    }
}

/// The single low-stock definition, shared by the inventory screen and the
/// dashboard tile.
pub fn low_stock(quantity: i64, min_quantity: i64) -> bool {
    quantity <= min_quantity
}

/// An inventory row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Category,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub quantity: i64,
    pub min_quantity: i64,
    pub unit_price: f64,
    pub supplier: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Stock on hand valued at the unit price. Recomputed on every load, never
    /// stored.
    pub fn total_value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }

    pub fn is_low_stock(&self) -> bool {
        low_stock(self.quantity, self.min_quantity)
    }

    /// Expired strictly before the reference day; items without an expiration
    /// date never expire.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|date| date < today)
    }

    /// Expiring within the next [`NEAR_EXPIRY_DAYS`] days (exclusive of today).
    pub fn is_near_expiry(&self, today: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|date| {
            let days = (date - today).num_days();
            days > 0 && days <= NEAR_EXPIRY_DAYS
        })
    }

    /// Free-text match over name, SKU, description, and supplier.
    pub fn matches_search(&self, query: &str) -> bool {
        query.is_empty()
            || contains_ci(&self.name, query)
            || self
                .sku
                .as_deref()
                .is_some_and(|sku| contains_ci(sku, query))
            || self
                .description
                .as_deref()
                .is_some_and(|description| contains_ci(description, query))
            || self
                .supplier
                .as_deref()
                .is_some_and(|supplier| contains_ci(supplier, query))
    }
}

/// Write payload for creating or updating an inventory item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryPayload {
    pub name: String,
    pub category: Category,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub quantity: i64,
    pub min_quantity: i64,
    pub unit_price: f64,
    pub supplier: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub active: bool,
}

/// Quantity-only payload for the quick stock adjustment action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockPayload {
    pub quantity: i64,
}

/// Inventory form state (raw field text, as typed).
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryForm {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub sku: String,
    pub quantity: String,
    pub min_quantity: String,
    pub unit_price: String,
    pub supplier: String,
    /// `date` input value, `YYYY-MM-DD`.
    pub expiration_date: String,
}

impl Default for InventoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::Medicamento,
            description: String::new(),
            sku: String::new(),
            quantity: "0".into(),
            min_quantity: "5".into(),
            unit_price: "0".into(),
            supplier: String::new(),
            expiration_date: String::new(),
        }
    }
}

impl InventoryForm {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category,
            description: item.description.clone().unwrap_or_default(),
            sku: item.sku.clone().unwrap_or_default(),
            quantity: item.quantity.to_string(),
            min_quantity: item.min_quantity.to_string(),
            unit_price: item.unit_price.to_string(),
            supplier: item.supplier.clone().unwrap_or_default(),
            expiration_date: item
                .expiration_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    /// Validates the form and produces the write payload. The first violation
    /// aborts the submission with no request issued.
    pub fn validate(&self) -> Result<InventoryPayload, InventoryFormError> {
        if self.name.trim().is_empty() {
            return Err(InventoryFormError::MissingRequired);
        }

        let quantity: i64 = non_empty(&self.quantity)
            .unwrap_or_else(|| "0".into())
            .parse()
            .map_err(|_| InventoryFormError::InvalidNumber)?;
        if quantity < 0 {
            return Err(InventoryFormError::NegativeQuantity);
        }

        let min_quantity: i64 = non_empty(&self.min_quantity)
            .unwrap_or_else(|| "5".into())
            .parse()
            .map_err(|_| InventoryFormError::InvalidNumber)?;
        if min_quantity < 0 {
            return Err(InventoryFormError::NegativeMinQuantity);
        }

        let unit_price: f64 = non_empty(&self.unit_price)
            .unwrap_or_else(|| "0".into())
            .parse()
            .map_err(|_| InventoryFormError::InvalidNumber)?;
        if unit_price < 0.0 {
            return Err(InventoryFormError::NegativePrice);
        }

        let expiration_date = match non_empty(&self.expiration_date) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| InventoryFormError::InvalidExpiration)?,
            ),
            None => None,
        };

        Ok(InventoryPayload {
            name: self.name.trim().to_string(),
            category: self.category,
            description: non_empty(&self.description),
            sku: non_empty(&self.sku),
            quantity,
            min_quantity,
            unit_price,
            supplier: non_empty(&self.supplier),
            expiration_date,
            active: true,
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InventoryFormError {
    #[error("Nombre y categoría son obligatorios")]
    MissingRequired,
    #[error("Cantidad, stock mínimo y precio deben ser numéricos")]
    InvalidNumber,
    #[error("La cantidad no puede ser negativa")]
    NegativeQuantity,
    #[error("El stock mínimo no puede ser negativo")]
    NegativeMinQuantity,
    #[error("El precio no puede ser negativo")]
    NegativePrice,
    #[error("Fecha de expiración inválida")]
    InvalidExpiration,
}

/// Stock-state bucket selected in the inventory screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockFilter {
    #[default]
    All,
    Low,
    Expired,
    NearExpiry,
}

impl StockFilter {
    pub fn matches(&self, item: &InventoryItem, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Low => item.is_low_stock(),
            Self::Expired => item.is_expired(today),
            Self::NearExpiry => item.is_near_expiry(today),
        }
    }
}

/// Inventory screen filter. Criteria are AND-composed.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryFilter {
    pub search: String,
    /// `None` means every category.
    pub category: Option<Category>,
    pub stock: StockFilter,
    pub tab: ActiveFilter,
}

impl Default for InventoryFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            stock: StockFilter::All,
            tab: ActiveFilter::Active,
        }
    }
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem, today: NaiveDate) -> bool {
        let category_match = self
            .category
            .map_or(true, |category| item.category == category);

        item.matches_search(&self.search)
            && category_match
            && self.stock.matches(item, today)
            && self.tab.matches(item.active)
    }

    pub fn apply<'a>(
        &self,
        items: &'a [InventoryItem],
        today: NaiveDate,
    ) -> Vec<&'a InventoryItem> {
        items
            .iter()
            .filter(|item| self.matches(item, today))
            .collect()
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
            || self.category.is_some()
            || self.stock != StockFilter::All
            || self.tab != ActiveFilter::All
    }

    pub fn reset(&mut self) {
        *self = Self {
            tab: ActiveFilter::All,
            ..Self::default()
        };
    }
}

/// Header statistics for the inventory screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub low_stock: usize,
    pub expired: usize,
    pub near_expiry: usize,
    pub total_value: f64,
}

pub fn inventory_stats(items: &[InventoryItem], today: NaiveDate) -> InventoryStats {
    InventoryStats {
        total: items.len(),
        active: items.iter().filter(|i| i.active).count(),
        inactive: items.iter().filter(|i| !i.active).count(),
        low_stock: items.iter().filter(|i| i.is_low_stock()).count(),
        expired: items.iter().filter(|i| i.is_expired(today)).count(),
        near_expiry: items.iter().filter(|i| i.is_near_expiry(today)).count(),
        total_value: items.iter().map(|i| i.total_value()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn item(name: &str, quantity: i64, min_quantity: i64, price: f64) -> InventoryItem {
        let at = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        InventoryItem {
            id: format!("item-{name}"),
            name: name.into(),
            category: Category::Medicamento,
            description: None,
            sku: Some("SKU-001".into()),
            quantity,
            min_quantity,
            unit_price: price,
            supplier: Some("Distribuidora Vet".into()),
            expiration_date: None,
            active: true,
            created_at: at,
            updated_at: at,
        }
    }

    /// Tests the derived state for the canonical low-stock scenario.
    ///
    /// Expected: quantity=3, min=5, price=10, no expiration gives
    /// low-stock=true, expired=false, near-expiry=false, total_value=30.00.
    #[test]
    fn derives_low_stock_scenario() {
        let product = item("Amoxicilina", 3, 5, 10.0);
        assert!(product.is_low_stock());
        assert!(!product.is_expired(today()));
        assert!(!product.is_near_expiry(today()));
        assert_eq!(product.total_value(), 30.0);
    }

    /// Tests the low-stock boundary.
    ///
    /// Expected: quantity equal to the minimum is low, one above is not.
    #[test]
    fn low_stock_boundary_is_inclusive() {
        assert!(low_stock(5, 5));
        assert!(!low_stock(6, 5));
    }

    /// Tests expiry classification around the reference day.
    ///
    /// Expected: yesterday expired; today neither expired nor near; tomorrow
    /// and +30 days near; +31 days neither.
    #[test]
    fn classifies_expiration_windows() {
        let mut product = item("Vacuna triple", 10, 5, 80.0);

        product.expiration_date = NaiveDate::from_ymd_opt(2026, 8, 6);
        assert!(product.is_expired(today()));
        assert!(!product.is_near_expiry(today()));

        product.expiration_date = NaiveDate::from_ymd_opt(2026, 8, 7);
        assert!(!product.is_expired(today()));
        assert!(!product.is_near_expiry(today()));

        product.expiration_date = NaiveDate::from_ymd_opt(2026, 8, 8);
        assert!(product.is_near_expiry(today()));

        product.expiration_date = NaiveDate::from_ymd_opt(2026, 9, 6);
        assert!(product.is_near_expiry(today()));

        product.expiration_date = NaiveDate::from_ymd_opt(2026, 9, 7);
        assert!(!product.is_near_expiry(today()));
    }

    /// Tests filter AND-composition across search, category, and stock state.
    ///
    /// Expected: the same visible set regardless of criterion order.
    #[test]
    fn filters_combine_with_and() {
        let mut jeringas = item("Jeringas", 50, 10, 2.5);
        jeringas.category = Category::Suministro;
        let items = vec![
            item("Amoxicilina", 3, 5, 10.0),
            item("Ibuprofeno", 40, 5, 8.0),
            jeringas,
        ];

        let filter = InventoryFilter {
            search: "distribuidora".into(),
            category: Some(Category::Medicamento),
            stock: StockFilter::Low,
            tab: ActiveFilter::Active,
        };
        let visible = filter.apply(&items, today());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Amoxicilina");
    }

    /// Tests rejecting a negative quantity.
    ///
    /// Expected: NegativeQuantity, no payload produced.
    #[test]
    fn rejects_negative_quantity() {
        let form = InventoryForm {
            name: "Amoxicilina".into(),
            quantity: "-1".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(InventoryFormError::NegativeQuantity));
    }

    /// Tests rejecting a negative unit price.
    ///
    /// Expected: NegativePrice
    #[test]
    fn rejects_negative_price() {
        let form = InventoryForm {
            name: "Amoxicilina".into(),
            unit_price: "-0.5".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(InventoryFormError::NegativePrice));
    }

    /// Tests payload construction with the form defaults.
    ///
    /// Expected: quantity 0, minimum 5, price 0, no expiration.
    #[test]
    fn builds_payload_from_defaults() {
        let form = InventoryForm {
            name: "Collar isabelino".into(),
            category: Category::Accesorio,
            ..Default::default()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.quantity, 0);
        assert_eq!(payload.min_quantity, 5);
        assert_eq!(payload.unit_price, 0.0);
        assert_eq!(payload.expiration_date, None);
        assert!(payload.active);
    }

    /// Tests the header statistics, including the summed total value.
    ///
    /// Expected: 2 low-stock items and the value of all stock combined.
    #[test]
    fn computes_stats() {
        let items = vec![
            item("Amoxicilina", 3, 5, 10.0),
            item("Ibuprofeno", 5, 5, 8.0),
            item("Jeringas", 50, 10, 2.5),
        ];
        let stats = inventory_stats(&items, today());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.low_stock, 2);
        assert_eq!(stats.expired, 0);
        assert_eq!(stats.total_value, 3.0 * 10.0 + 5.0 * 8.0 + 50.0 * 2.5);
    }
}
