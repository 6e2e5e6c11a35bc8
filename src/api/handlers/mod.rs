// src/api/handlers/mod.rs
mod execute;
mod health;
mod languages;

pub use execute::execute_code;
pub use health::health_check;
pub use languages::list_languages;
