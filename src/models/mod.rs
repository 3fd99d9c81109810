pub mod config;
pub mod terminal;

pub use config::{parse_threshold, ColorModeSetting, ConfigError, ViewerConfig, CONFIG_ENV};
pub use terminal::TerminalSize;
