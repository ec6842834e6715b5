// Service module exports

pub mod cursor;
pub mod nav_bar;
