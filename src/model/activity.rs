use chrono::{DateTime, Utc};

/// How many entries the dashboard feed shows after merging its sources.
pub const RECENT_ACTIVITY_LIMIT: usize = 8;

/// Summary tile values for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardStats {
    pub total_pets: u64,
    pub today_appointments: u64,
    pub low_stock_items: u64,
    pub active_vets: u64,
    pub upcoming_appointments: u64,
    pub total_inventory_items: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Appointment,
    Pet,
    Inventory,
}

/// One line of the recent-activity feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub id: String,
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn appointment(id: String, reason: &str, at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: ActivityKind::Appointment,
            description: format!("Nueva cita programada: {reason}"),
            timestamp: at,
        }
    }

    pub fn pet(id: String, name: &str, species: &str, at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: ActivityKind::Pet,
            description: format!("Nuevo paciente registrado: {name} ({species})"),
            timestamp: at,
        }
    }

    pub fn inventory(id: String, name: &str, quantity: i64, at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: ActivityKind::Inventory,
            description: format!("Stock bajo: {name} ({quantity} unidades)"),
            timestamp: at,
        }
    }
}

/// Interleaves the per-source entries into one feed: newest first, truncated
/// to [`RECENT_ACTIVITY_LIMIT`].
pub fn merge_recent(mut entries: Vec<ActivityEntry>) -> Vec<ActivityEntry> {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(RECENT_ACTIVITY_LIMIT);
    entries
}

/// Relative age label for a feed entry.
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - at).num_hours();
    if hours < 1 {
        "Hace unos minutos".to_string()
    } else if hours < 24 {
        format!("Hace {hours} {}", if hours == 1 { "hora" } else { "horas" })
    } else {
        let days = hours / 24;
        format!("Hace {days} {}", if days == 1 { "día" } else { "días" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, hour, 0, 0).unwrap()
    }

    /// Tests that merged sources interleave by recency across kinds.
    ///
    /// Expected: strictly descending timestamps regardless of source order.
    #[test]
    fn merges_sources_newest_first() {
        let entries = vec![
            ActivityEntry::appointment("a1".into(), "Consulta", at(9)),
            ActivityEntry::pet("p1".into(), "Rocky", "perro", at(11)),
            ActivityEntry::inventory("i1".into(), "Amoxicilina", 3, at(10)),
        ];
        let feed = merge_recent(entries);
        assert_eq!(
            feed.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            ["p1", "i1", "a1"]
        );
    }

    /// Tests truncation to the feed limit.
    ///
    /// Expected: 8 newest entries survive out of 12.
    #[test]
    fn truncates_to_limit() {
        let entries = (0..12)
            .map(|i| ActivityEntry::pet(format!("p{i}"), "Rocky", "perro", at(i as u32)))
            .collect();
        let feed = merge_recent(entries);
        assert_eq!(feed.len(), RECENT_ACTIVITY_LIMIT);
        assert_eq!(feed[0].id, "p11");
        assert_eq!(feed[7].id, "p4");
    }

    /// Tests the relative age labels.
    ///
    /// Expected: minutes under an hour, singular/plural hours, then days.
    #[test]
    fn formats_time_ago() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now, now), "Hace unos minutos");
        assert_eq!(
            time_ago(now - chrono::Duration::hours(1), now),
            "Hace 1 hora"
        );
        assert_eq!(
            time_ago(now - chrono::Duration::hours(5), now),
            "Hace 5 horas"
        );
        assert_eq!(
            time_ago(now - chrono::Duration::days(3), now),
            "Hace 3 días"
        );
    }

    /// Tests the feed descriptions.
    ///
    /// Expected: the per-kind Spanish copy with interpolated fields.
    #[test]
    fn formats_descriptions() {
        let entry = ActivityEntry::inventory("i1".into(), "Amoxicilina", 3, at(10));
        assert_eq!(entry.description, "Stock bajo: Amoxicilina (3 unidades)");

        let entry = ActivityEntry::pet("p1".into(), "Rocky", "perro", at(10));
        assert_eq!(
            entry.description,
            "Nuevo paciente registrado: Rocky (perro)"
        );
    }
}
