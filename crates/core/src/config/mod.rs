pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, parse_date_zone};
pub use types::{ConfigFile, LoggingConfig, RenderConfig, ResolvedConfig};
