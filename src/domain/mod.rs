//! Domain types shared by the translator and the service layer.

pub mod filter;
pub mod listing;
pub mod types;
