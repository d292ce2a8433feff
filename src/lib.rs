pub mod activation;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod greeting;
pub mod hub;
pub mod links;
pub mod state;
pub mod ui;
pub mod util;
pub mod widgets;

pub use app::App;
pub use config::AppConfig;
pub use error::{LinkHubError, Result};
