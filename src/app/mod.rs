pub mod api;
pub mod cli;
pub mod commands;
pub mod controller;
pub mod logging;
mod context;

pub use context::AppContext;
