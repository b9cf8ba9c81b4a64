pub mod client;
pub mod models;

pub use client::NominatimClient;
pub use models::Coordinates;
