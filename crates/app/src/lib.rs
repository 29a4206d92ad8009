//! `storefront-app` — page controllers wiring the domain crates together.
//!
//! Each page takes its dependencies explicitly (catalog, inventory, session
//! provider, config) and returns a plain view struct; [`render`] turns those
//! into text. No routing, no HTTP.

pub mod config;
pub mod context;
pub mod pages;
pub mod render;
pub mod seed;

pub use config::{load_app_config, AppConfig, ConfigError};
pub use context::StoreContext;
