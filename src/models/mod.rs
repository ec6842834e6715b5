// Module exports for models

pub mod buttons;
pub mod command;
pub mod config;
pub mod granularity;
