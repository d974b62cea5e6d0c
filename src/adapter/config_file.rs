//! 設定ファイル（thinking-trim.jsonc）の読み込みと初回作成（adapter 層）
//!
//! 読み込み・パースに失敗してもエラーは返さず、デフォルト値で続行する。
//! 失敗内容は Log に warn で残す。

use crate::domain::TrimConfig;
use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};
use serde_json::Value;
use std::path::Path;

use super::jsonc::strip_jsonc;

pub const CONFIG_FILENAME: &str = "thinking-trim.jsonc";
pub const DEBUG_LOG_FILENAME: &str = "thinking-trim.log";

/// 初回起動時に書き出す設定ファイル（デフォルト値 + 説明コメント）
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"{
  // thinking-trim: remove reasoning parts from older assistant turns
  // before the conversation is sent to the model.

  // Set to false to leave every message untouched.
  "enabled": true,

  // Number of most recent assistant turns that keep their reasoning.
  // 0 removes reasoning from every assistant turn.
  "keepTurns": 0,

  /* Write a JSONL trace of each trim pass to thinking-trim.log
     next to this file. */
  "debug": false
}
"#;

/// 設定ファイルを読み込む。無ければデフォルト内容で作成してデフォルト値を返す。
///
/// 壊れたファイル・読めないファイルのときもデフォルト値を返す。
/// 型が違うキーはそのキーだけデフォルト値にする。
pub fn load_or_create_config(fs: &dyn FileSystem, path: &Path, log: &dyn Log) -> TrimConfig {
    match fs.metadata(path) {
        Err(_) => {
            if let Err(e) = write_default_config(fs, path) {
                let _ = log.log(&warn_record("failed to create default config", path, &e));
            }
            return TrimConfig::default();
        }
        Ok(meta) if !meta.is_file() => {
            let e = Error::io_msg(format!("'{}' is not a file", path.display()));
            let _ = log.log(&warn_record("failed to load config, using defaults", path, &e));
            return TrimConfig::default();
        }
        Ok(_) => {}
    }

    let section = match read_config(fs, path) {
        Ok(section) => section,
        Err(e) => {
            let _ = log.log(&warn_record("failed to load config, using defaults", path, &e));
            return TrimConfig::default();
        }
    };

    let invalid = TrimConfig::invalid_fields(&section);
    if !invalid.is_empty() {
        let _ = log.log(
            &LogRecord::now(LogLevel::Warn, "invalid config values, using defaults for them")
                .layer("adapter")
                .kind("config")
                .field("path", serde_json::json!(path.display().to_string()))
                .field("fields", serde_json::json!(invalid)),
        );
    }
    TrimConfig::default().overlay(&section)
}

fn write_default_config(fs: &dyn FileSystem, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs.create_dir_all(parent)?;
    }
    fs.write(path, DEFAULT_CONFIG_TEMPLATE)
}

/// コメントを除いてパースし、ルートのオブジェクトを返す
fn read_config(fs: &dyn FileSystem, path: &Path) -> Result<Value, Error> {
    let content = fs.read_to_string(path)?;
    let value: Value = serde_json::from_str(&strip_jsonc(&content))?;
    if !value.is_object() {
        return Err(Error::json("config root must be an object"));
    }
    Ok(value)
}

fn warn_record(message: &str, path: &Path, err: &Error) -> LogRecord {
    LogRecord::now(LogLevel::Warn, message)
        .layer("adapter")
        .kind("config")
        .field("path", serde_json::json!(path.display().to_string()))
        .field("error", serde_json::json!(err.to_string()))
}
