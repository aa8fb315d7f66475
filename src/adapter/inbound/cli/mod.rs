//! CLI module graph.

pub mod band;
pub mod check;
pub mod command;
pub mod config;
pub mod output;
pub mod session;
pub mod suggest;
pub mod watch;
