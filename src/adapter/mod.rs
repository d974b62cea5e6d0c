//! アダプター（外界の I/O を trait で実装する）
//!
//! usecase / wiring は ports::outbound の trait 経由でのみファイル・環境変数に触れる。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod buffered_log;
pub mod config_file;
pub mod file_json_log;
pub mod jsonc;
pub mod std_env_resolver;
pub mod std_fs;

pub use buffered_log::BufferedLog;
pub use config_file::{load_or_create_config, CONFIG_FILENAME, DEBUG_LOG_FILENAME, DEFAULT_CONFIG_TEMPLATE};
pub use file_json_log::{FileJsonLog, NoopLog};
pub use jsonc::strip_jsonc;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
