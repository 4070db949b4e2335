// Crate root library declaration and module exports.
pub mod config;
pub mod extract;
pub mod model;
pub mod scrape;
pub mod upload;
