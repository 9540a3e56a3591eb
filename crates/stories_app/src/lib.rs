//! Stories app: owns the state, runs effects and feeds engine results back in.
pub mod app;
pub mod config;
pub mod debounce;
pub mod effects;
pub mod logging;
pub mod terminal;

pub use app::StoriesApp;
pub use config::AppConfig;
