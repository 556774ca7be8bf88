pub mod catalog;
pub mod loader;
