//! CLI module graph.

pub mod command;
pub mod items;
pub mod output;
pub mod run;
