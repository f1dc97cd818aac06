mod config;
mod error;
mod log_files;

pub use config::{AppConfig, AppConfigExt, DEFAULT_MAX_FILE_BYTES};
pub use error::ConfigError;
pub use log_files::{DirectoryIndex, LogFileMetaData, parse_log_filename};
