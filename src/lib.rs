pub mod app_context;
pub mod config;
pub mod database;
pub mod errors;

pub use app_context::AppContext;

#[cfg(feature = "graphql")]
pub mod graphql;

#[cfg(feature = "graphql")]
pub mod server;
