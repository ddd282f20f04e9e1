pub mod app;
pub mod clock;
pub mod config;
pub mod date_key;
pub mod errors;
pub mod grid;
pub mod habits;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod streak;
pub mod summary;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use date_key::{decode, encode, parse_date, DateKey, DateKeyError, DateParts};
pub use grid::{build_calendar_grid, Lanes, LANE_COUNT};
pub use state::AppState;
pub use storage::load_data;
pub use streak::compute_streak;
