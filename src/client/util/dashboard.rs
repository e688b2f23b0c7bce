use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, Utc};
use dioxus_logger::tracing;
use futures::join;
use serde::Deserialize;

use crate::model::activity::{merge_recent, ActivityEntry, DashboardStats};
use crate::model::appointment::AppointmentStatus;
use crate::model::inventory::low_stock;
use crate::model::staff::VETERINARIAN_ROLE;
use crate::supabase::{Client, Error, Order};

/// Upcoming-appointment row rendered on the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpcomingAppointment {
    pub id: String,
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
    #[serde(default)]
    pub pets: Option<UpcomingPet>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpcomingPet {
    pub name: String,
}

/// Everything the dashboard shows, assembled from parallel queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub upcoming: Vec<UpcomingAppointment>,
    pub activity: Vec<ActivityEntry>,
    /// Set when any query failed; the tiles that resolved still render.
    pub degraded: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct StockLevel {
    quantity: i64,
    min_quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct RecentAppointment {
    id: String,
    reason: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RecentPet {
    id: String,
    name: String,
    species: String,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RecentItem {
    id: String,
    name: String,
    quantity: i64,
    created_at: Option<DateTime<Utc>>,
}

fn ts(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Issues the six tile queries, the upcoming list, and the three activity
/// feeds, all fire-and-collect-all. Individual failures are logged and
/// degrade their slice of the result instead of failing the screen.
pub async fn load_dashboard(client: &Client, now: DateTime<Utc>) -> DashboardData {
    let today_start = now.date_naive().and_time(NaiveTime::MIN);
    let tomorrow_start = today_start + Duration::days(1);
    let week_end = today_start + Duration::days(7);

    let (pets, today_appointments, stock_levels, vets, upcoming, inventory_items) = join!(
        client
            .from("pets")
            .select("id")
            .eq("active", true)
            .count(),
        client
            .from("appointments")
            .select("id")
            .gte("appointment_date", ts(today_start))
            .lt("appointment_date", ts(tomorrow_start))
            .eq("status", AppointmentStatus::Programada.as_str())
            .count(),
        client
            .from("inventory")
            .select("quantity,min_quantity")
            .eq("active", true)
            .fetch::<StockLevel>(),
        client
            .from("profiles")
            .select("id")
            .eq("role", VETERINARIAN_ROLE)
            .count(),
        client
            .from("appointments")
            .select("id,appointment_date,reason,pets(name)")
            .gte("appointment_date", ts(today_start))
            .lt("appointment_date", ts(week_end))
            .eq("status", AppointmentStatus::Programada.as_str())
            .order("appointment_date", Order::Ascending)
            .limit(5)
            .fetch::<UpcomingAppointment>(),
        client
            .from("inventory")
            .select("id")
            .eq("active", true)
            .count(),
    );

    let mut degraded = false;
    let mut count = |result: Result<u64, Error>| match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!("dashboard query failed: {err}");
            degraded = true;
            0
        }
    };

    let total_pets = count(pets);
    let today_appointments = count(today_appointments);
    let active_vets = count(vets);
    let total_inventory_items = count(inventory_items);

    // The low-stock tile recomputes the one shared definition instead of
    // filtering on the backend.
    let low_stock_items = match stock_levels {
        Ok(levels) => levels
            .iter()
            .filter(|level| low_stock(level.quantity, level.min_quantity))
            .count() as u64,
        Err(err) => {
            tracing::error!("dashboard inventory query failed: {err}");
            degraded = true;
            0
        }
    };

    let upcoming = match upcoming {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!("dashboard upcoming query failed: {err}");
            degraded = true;
            Vec::new()
        }
    };

    let (activity, activity_degraded) = load_recent_activity(client, now).await;
    degraded |= activity_degraded;

    DashboardData {
        stats: DashboardStats {
            total_pets,
            today_appointments,
            low_stock_items,
            active_vets,
            upcoming_appointments: upcoming.len() as u64,
            total_inventory_items,
        },
        upcoming,
        activity,
        degraded,
    }
}

/// Merges the three recent-activity feeds (last 7 days, 4 rows each) into one
/// time-sorted list capped at 8 entries.
async fn load_recent_activity(
    client: &Client,
    now: DateTime<Utc>,
) -> (Vec<ActivityEntry>, bool) {
    let last_week = ts((now - Duration::days(7)).naive_utc());

    let (appointments, pets, items) = join!(
        client
            .from("appointments")
            .select("id,reason,created_at")
            .gte("created_at", last_week.clone())
            .order("created_at", Order::Descending)
            .limit(4)
            .fetch::<RecentAppointment>(),
        client
            .from("pets")
            .select("id,name,species,created_at")
            .gte("created_at", last_week.clone())
            .order("created_at", Order::Descending)
            .limit(4)
            .fetch::<RecentPet>(),
        client
            .from("inventory")
            .select("id,name,quantity,created_at")
            .lte("quantity", 10)
            .gte("created_at", last_week)
            .order("created_at", Order::Descending)
            .limit(4)
            .fetch::<RecentItem>(),
    );

    let mut degraded = false;
    let mut entries = Vec::new();

    match appointments {
        Ok(rows) => entries.extend(rows.into_iter().filter_map(|row| {
            let at = row.created_at?;
            Some(ActivityEntry::appointment(
                row.id,
                row.reason.as_deref().unwrap_or("Sin motivo"),
                at,
            ))
        })),
        Err(err) => {
            tracing::error!("recent appointments query failed: {err}");
            degraded = true;
        }
    }

    match pets {
        Ok(rows) => entries.extend(rows.into_iter().filter_map(|row| {
            let at = row.created_at?;
            Some(ActivityEntry::pet(row.id, &row.name, &row.species, at))
        })),
        Err(err) => {
            tracing::error!("recent pets query failed: {err}");
            degraded = true;
        }
    }

    match items {
        Ok(rows) => entries.extend(rows.into_iter().filter_map(|row| {
            let at = row.created_at?;
            Some(ActivityEntry::inventory(row.id, &row.name, row.quantity, at))
        })),
        Err(err) => {
            tracing::error!("recent inventory query failed: {err}");
            degraded = true;
        }
    }

    (merge_recent(entries), degraded)
}
