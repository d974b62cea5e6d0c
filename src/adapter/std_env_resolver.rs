//! 標準環境変数解決実装（std::env を委譲）

use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 設定ディレクトリを直接指定する環境変数
pub const HOME_ENV: &str = "THINKING_TRIM_HOME";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_config_dir(&self) -> Result<PathBuf, Error> {
        resolve_config_dir_with(|key| env::var(key).ok())
    }
}

/// 環境変数の取得関数を受け取って設定ディレクトリを決める
fn resolve_config_dir_with(var: impl Fn(&str) -> Option<String>) -> Result<PathBuf, Error> {
    let non_empty = |key: &str| var(key).filter(|s| !s.is_empty());

    if let Some(home) = non_empty(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }

    let mut path = non_empty("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| non_empty("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;
    path.push("opencode");
    Ok(path)
}
