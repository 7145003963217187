//! Models shared by the HTTP layer.

pub mod config;
