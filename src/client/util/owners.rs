use crate::model::owner::{Owner, OwnerPayload};
use crate::supabase::{Client, Error, Order};

pub async fn fetch_owners(client: &Client) -> Result<Vec<Owner>, Error> {
    client
        .from("owners")
        .select("*")
        .order("full_name", Order::Ascending)
        .fetch()
        .await
}

pub async fn create_owner(client: &Client, payload: &OwnerPayload) -> Result<(), Error> {
    client.from("owners").insert(payload).await
}
