pub mod assets;
pub mod core;
pub mod menu;
pub mod pages;
pub mod server;
pub mod types;
