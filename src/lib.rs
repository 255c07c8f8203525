pub mod api;
pub mod app;
pub mod config;
pub mod keywords;
pub mod matcher;
pub mod model;
pub mod notifier;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod utils;
