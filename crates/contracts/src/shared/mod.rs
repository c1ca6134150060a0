pub mod config;
pub mod paged_grid;
