use crate::model::inventory::{InventoryItem, InventoryPayload, StockPayload};
use crate::model::ActivePatch;
use crate::supabase::{Client, Error, Order};

pub async fn fetch_inventory(client: &Client) -> Result<Vec<InventoryItem>, Error> {
    client
        .from("inventory")
        .select("*")
        .order("name", Order::Ascending)
        .fetch()
        .await
}

pub async fn create_item(client: &Client, payload: &InventoryPayload) -> Result<(), Error> {
    client.from("inventory").insert(payload).await
}

pub async fn update_item(
    client: &Client,
    id: &str,
    payload: &InventoryPayload,
) -> Result<(), Error> {
    client.from("inventory").eq("id", id).update(payload).await
}

pub async fn set_item_active(client: &Client, id: &str, active: bool) -> Result<(), Error> {
    client
        .from("inventory")
        .eq("id", id)
        .update(&ActivePatch { active })
        .await
}

/// Quick stock adjustment; callers guard against negative quantities first.
pub async fn set_stock(client: &Client, id: &str, quantity: i64) -> Result<(), Error> {
    client
        .from("inventory")
        .eq("id", id)
        .update(&StockPayload { quantity })
        .await
}

pub async fn delete_item(client: &Client, id: &str) -> Result<(), Error> {
    client.from("inventory").eq("id", id).delete().await
}
