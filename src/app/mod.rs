pub mod api;
pub mod cli;
pub mod commands;
pub mod context;
pub mod services;
pub mod settings;

pub use context::AppContext;
pub use settings::Settings;
