// src/lib.rs
pub mod api;
pub mod cli;
pub mod config;
pub mod health;
pub mod ui;
