// Module exports for utilities

pub mod date;
