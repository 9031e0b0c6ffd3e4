pub mod cli_parser;
pub mod config;
pub mod logging;
pub mod run;

pub use config::AppConfig;
