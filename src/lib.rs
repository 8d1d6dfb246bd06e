#[macro_use]
extern crate tracing;

pub mod cmd;
pub mod config;
mod constants;
pub mod errors;
pub mod io_models;
pub mod logger;
pub mod models;
pub mod upgrade;
