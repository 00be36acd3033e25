//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: Draw pile, discard pile, or a seat's hand or equipment
//! - `ZoneManager`: Card location tracking and movement
//! - `ZonePosition`: Position specifier for insertion

pub mod manager;

pub use manager::{Zone, ZoneManager, ZonePosition};
