pub mod api;
pub mod app;
pub mod components;
pub mod config;

pub use api::*;
pub use app::App;
pub use components::*;
pub use config::*;
