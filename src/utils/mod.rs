//! Utility modules shared across the crate

pub mod data_uri;
