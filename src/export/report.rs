//! Delimited-text snapshots: the inventory collection and single patient
//! records.

use chrono::NaiveDate;

use crate::model::inventory::InventoryItem;
use crate::model::pet::Pet;

/// Comma-delimited snapshot of the loaded inventory with a header row.
pub fn inventory_snapshot(items: &[InventoryItem]) -> String {
    let header = [
        "Producto",
        "Categoría",
        "SKU",
        "Stock Actual",
        "Stock Mínimo",
        "Precio Unitario",
        "Valor Total",
        "Proveedor",
        "Fecha Expiración",
        "Estado",
        "Última Actualización",
    ]
    .join(",");

    let mut lines = vec![header];
    for item in items {
        lines.push(
            [
                item.name.clone(),
                item.category.label().to_string(),
                item.sku.clone().unwrap_or_else(|| "N/A".into()),
                item.quantity.to_string(),
                item.min_quantity.to_string(),
                format!("${:.2}", item.unit_price),
                format!("${:.2}", item.total_value()),
                item.supplier.clone().unwrap_or_else(|| "N/A".into()),
                item.expiration_date
                    .map(|d| d.format("%d/%m/%Y").to_string())
                    .unwrap_or_else(|| "N/A".into()),
                if item.active { "Activo" } else { "Inactivo" }.to_string(),
                item.updated_at.format("%d/%m/%Y %H:%M").to_string(),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

pub fn inventory_file_name(today: NaiveDate) -> String {
    format!("inventario-{}.csv", today.format("%Y-%m-%d"))
}

/// `key: value` report for one patient, owner contact included.
pub fn patient_report(pet: &Pet) -> String {
    let unspecified = "No especificado".to_string();
    let owner = pet.owners.as_ref();

    let fields = [
        ("Nombre", pet.name.clone()),
        ("Especie", pet.species.clone()),
        (
            "Raza",
            pet.breed.clone().unwrap_or_else(|| "No especificada".into()),
        ),
        (
            "Edad",
            pet.age
                .map(|a| format!("{a} años"))
                .unwrap_or_else(|| "No especificada".into()),
        ),
        (
            "Peso",
            pet.weight
                .map(|w| format!("{w} kg"))
                .unwrap_or_else(|| unspecified.clone()),
        ),
        ("Género", pet.gender.clone().unwrap_or_else(|| unspecified.clone())),
        ("Color", pet.color.clone().unwrap_or_else(|| unspecified.clone())),
        (
            "Dueño",
            owner
                .map(|o| o.full_name.clone())
                .unwrap_or_else(|| unspecified.clone()),
        ),
        (
            "Teléfono",
            owner
                .map(|o| o.phone.clone())
                .unwrap_or_else(|| unspecified.clone()),
        ),
        (
            "Email",
            owner
                .and_then(|o| o.email.clone())
                .unwrap_or_else(|| unspecified.clone()),
        ),
        (
            "Historial Médico",
            pet.medical_history
                .clone()
                .unwrap_or_else(|| unspecified.clone()),
        ),
        (
            "Alergias",
            pet.allergies.clone().unwrap_or_else(|| unspecified.clone()),
        ),
        ("Citas Registradas", pet.appointment_count.to_string()),
        (
            "Estado",
            if pet.active { "Activo" } else { "Inactivo" }.to_string(),
        ),
        (
            "Registrado",
            pet.created_at.format("%d/%m/%Y %H:%M").to_string(),
        ),
    ];

    fields
        .into_iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn patient_file_name(pet: &Pet, today: NaiveDate) -> String {
    format!("paciente-{}-{}.txt", pet.name, today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inventory::Category;
    use crate::model::owner::Owner;
    use chrono::{TimeZone, Utc};

    fn item() -> InventoryItem {
        InventoryItem {
            id: "i1".into(),
            name: "Amoxicilina".into(),
            category: Category::Medicamento,
            description: None,
            sku: Some("MED-001".into()),
            quantity: 3,
            min_quantity: 5,
            unit_price: 10.0,
            supplier: None,
            expiration_date: NaiveDate::from_ymd_opt(2026, 12, 31),
            active: true,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 8, 5, 14, 30, 0).unwrap(),
        }
    }

    /// Tests the snapshot header and one data row.
    ///
    /// Expected: header labels, formatted prices, and N/A fallbacks.
    #[test]
    fn renders_inventory_snapshot() {
        let csv = inventory_snapshot(&[item()]);
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("Producto,Categoría,SKU"));
        assert_eq!(
            lines.next().unwrap(),
            "Amoxicilina,Medicamento,MED-001,3,5,$10.00,$30.00,N/A,31/12/2026,Activo,05/08/2026 14:30"
        );
        assert_eq!(lines.next(), None);
    }

    /// Tests the patient report lines and fallbacks.
    ///
    /// Expected: one key per line, owner contact included, absent fields
    /// rendered as "No especificado".
    #[test]
    fn renders_patient_report() {
        let at = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();
        let pet = Pet {
            id: "p1".into(),
            name: "Rocky".into(),
            species: "perro".into(),
            breed: None,
            age: Some(4),
            weight: None,
            gender: Some("macho".into()),
            color: None,
            owner_id: "o1".into(),
            medical_history: None,
            allergies: None,
            photo_url: None,
            active: true,
            created_at: at,
            updated_at: at,
            owners: Some(Owner {
                id: "o1".into(),
                full_name: "Fernanda Ruiz".into(),
                phone: "555-0101".into(),
                email: None,
                address: None,
                rfc: None,
            }),
            appointment_count: 2,
        };

        let report = patient_report(&pet);
        assert!(report.contains("Nombre: Rocky"));
        assert!(report.contains("Raza: No especificada"));
        assert!(report.contains("Edad: 4 años"));
        assert!(report.contains("Dueño: Fernanda Ruiz"));
        assert!(report.contains("Email: No especificado"));
        assert!(report.contains("Citas Registradas: 2"));
        assert!(report.contains("Registrado: 01/08/2026 09:00"));
        assert_eq!(report.lines().count(), 15);
    }

    /// Tests the date-stamped download names.
    ///
    /// Expected: collection and per-patient patterns.
    #[test]
    fn names_export_files() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(inventory_file_name(today), "inventario-2026-08-07.csv");
    }
}
