pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod series;
pub mod trends;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
