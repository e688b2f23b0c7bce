#![allow(non_snake_case)]

mod client;
mod export;
mod model;
mod supabase;

fn main() {
    dioxus::launch(client::App);
}
