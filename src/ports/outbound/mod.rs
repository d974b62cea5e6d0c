//! Outbound ポート: プラグインが外界（FS・ログ・環境変数）を使うための trait

pub mod env_resolver;
pub mod fs;
pub mod log;

pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
