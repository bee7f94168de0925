//! Rota portal web UI

pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod session;

pub use app::App;
