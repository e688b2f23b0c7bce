use crate::model::staff::{StaffProfile, VETERINARIAN_ROLE};
use crate::supabase::{Client, Error, Order};

/// Staff offered by the veterinarian picker.
pub async fn fetch_veterinarians(client: &Client) -> Result<Vec<StaffProfile>, Error> {
    client
        .from("profiles")
        .select("id,full_name,role")
        .eq("role", VETERINARIAN_ROLE)
        .order("full_name", Order::Ascending)
        .fetch()
        .await
}
