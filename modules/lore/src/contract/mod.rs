pub mod client;
pub mod error;
pub mod model;

pub use client::LoreApi;
pub use error::LoreError;
pub use model::{Lore, NewLore, PopulatedLore};
