// Date Navigation Bar Library
// Exports all modules for embedding and reuse

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
