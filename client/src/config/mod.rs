mod config;

pub use config::{ClientConfig, ClientConfigManager, get_config_manager};
