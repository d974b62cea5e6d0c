//! 環境変数解決 Outbound ポート
//!
//! 設定ディレクトリを環境変数から解決する。wiring はこの trait 経由でのみ環境変数に触れる。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 設定ファイル・デバッグログを置くディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. THINKING_TRIM_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/opencode（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/opencode
    fn resolve_config_dir(&self) -> Result<PathBuf, Error>;
}
