mod nav_bar;
mod palette;

pub use nav_bar::{NavBarResponse, NavBarView};
