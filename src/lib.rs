pub mod cli;
pub mod config;
pub mod loader;
pub mod logging;
pub mod mvi;
pub mod source;
pub mod tasks;
pub mod view;
