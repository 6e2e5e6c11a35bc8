// src/lib.rs
pub mod api;
pub mod backend;
pub mod banner;
pub mod client;
pub mod config;
pub mod errors;
pub mod languages;
pub mod relay;
pub mod session;
