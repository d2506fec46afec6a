// Root module of the checker folder - declare submodules explicitly
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod logging;
pub mod robots;
pub mod runner;
pub mod sitemap;
