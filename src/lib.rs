pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod plan;
pub mod state;
pub mod ui;

pub use app::router;
pub use plan::PlanStore;
pub use state::{AppState, resolve_reference_date};
