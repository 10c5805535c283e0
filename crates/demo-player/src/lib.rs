//! Terminal front end for the XML-RPC walkthrough replay.

pub mod app;
pub mod config;
pub mod constants;
pub mod handlers;
pub mod headless;
pub mod log_view;
pub mod logger;
pub mod settings;
pub mod types;
pub mod ui;

pub use app::App;
pub use settings::AppSettings;
