//! Client-side store for the lore UI.
//!
//! Storage for data that needs to be accessed from various views: the
//! current lore list, the active author filter, the logged-in username,
//! and transient alerts. State lives behind a single worker task and is
//! only changed by committing mutations through one channel, so every
//! change flows in one direction: commit -> apply -> published snapshot.
//! Snapshots persist to disk on every write and are hydrated on open.

mod store;

pub use store::{AlertStatus, Mutation, Store, StoreOptions, StoreState, ALERT_TTL};
