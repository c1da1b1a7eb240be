//! Command-line interface

pub mod app;

pub use app::{Cli, LogLevel};
