mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, resolve_config};
pub use types::LogpulseConfig;
