pub mod config;
pub mod error;
pub mod watch;

pub use config::Config;
pub use error::ConfigError;
pub use watch::*;
