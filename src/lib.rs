pub mod app;
pub mod config;
pub mod entries;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod summary;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{ensure_parent_dir, load_data};
