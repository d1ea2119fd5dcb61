// Library root for the hello benchmark server

pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
