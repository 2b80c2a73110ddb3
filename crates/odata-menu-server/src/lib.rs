pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod odata;
pub mod router;
pub mod state;
pub mod telemetry;
pub mod utils;

pub use config::Settings;
pub use router::build_router;
pub use state::AppState;
pub use utils::error::ApiError;
