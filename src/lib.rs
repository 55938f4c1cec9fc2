pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod panel;
pub mod relay;
pub mod server;
pub mod ui;
