//! CLI module graph.

pub mod catalog;
pub mod command;
pub mod config;
mod dispatch;
pub mod output;
pub mod search;

pub use dispatch::dispatch;
