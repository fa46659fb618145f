//! Extractors that guard handlers.

pub mod auth;
