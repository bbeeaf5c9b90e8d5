pub mod app;
pub mod config;
pub mod entry;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod summary;
pub mod table;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use table::FoodLog;
