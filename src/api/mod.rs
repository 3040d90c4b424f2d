//! HTTP API handlers

pub mod artists;
pub mod health;

pub use artists::{create_artist, delete_artist, get_artist, list_artists, update_artist};
pub use health::health_routes;
