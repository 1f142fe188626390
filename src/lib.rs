pub mod actions;
pub mod commands;
pub mod config;
pub mod effects;
pub mod handlers;
pub mod keyboards;
pub mod logging;
pub mod templates;
pub mod tracker;
pub mod types;
pub mod wallet;
