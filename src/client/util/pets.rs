use futures::future::join_all;

use crate::model::pet::{Pet, PetPayload};
use crate::model::ActivePatch;
use crate::supabase::{Client, Error, Order};

/// Loads every pet with its owner embedded, newest first, then attaches the
/// per-pet appointment counts with one count query each.
pub async fn fetch_pets(client: &Client) -> Result<Vec<Pet>, Error> {
    let mut pets: Vec<Pet> = client
        .from("pets")
        .select("*,owners(*)")
        .order("created_at", Order::Descending)
        .fetch()
        .await?;

    let counts = join_all(pets.iter().map(|pet| {
        let query = client
            .from("appointments")
            .select("id")
            .eq("pet_id", &pet.id);
        async move { query.count().await.unwrap_or(0) }
    }))
    .await;

    for (pet, count) in pets.iter_mut().zip(counts) {
        pet.appointment_count = count;
    }
    Ok(pets)
}

pub async fn create_pet(client: &Client, payload: &PetPayload) -> Result<(), Error> {
    client.from("pets").insert(payload).await
}

pub async fn update_pet(client: &Client, id: &str, payload: &PetPayload) -> Result<(), Error> {
    client.from("pets").eq("id", id).update(payload).await
}

pub async fn set_pet_active(client: &Client, id: &str, active: bool) -> Result<(), Error> {
    client
        .from("pets")
        .eq("id", id)
        .update(&ActivePatch { active })
        .await
}

pub async fn delete_pet(client: &Client, id: &str) -> Result<(), Error> {
    client.from("pets").eq("id", id).delete().await
}
