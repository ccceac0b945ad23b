pub mod appstate;
pub mod config;
pub mod inference;
pub mod prompt;
pub mod routes;
pub mod topic;
pub mod types;

pub use appstate::AppState;
