pub mod config;
pub mod context;
pub mod error;
pub mod jinja;
pub mod logger;
pub mod output;
pub mod renderer;

#[macro_use]
extern crate log;
