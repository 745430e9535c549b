pub mod config;
pub mod errors;
pub mod lang;
pub mod types;

pub use config::Config;
