pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod plot;
pub mod risk;
pub mod series;
pub mod state;
pub mod storage;
pub mod transition;
pub mod ui;
pub mod weather;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
