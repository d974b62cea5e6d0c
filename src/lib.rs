//! thinking-trim: 古い assistant ターンから reasoning Part を取り除くプラグイン
//!
//! ホストのパイプラインが組み立てたメッセージ列を受け取り、
//! 直近 keepTurns 件の assistant メッセージ以外から reasoning を削る。

/// エラーハンドリング
pub mod error;

/// メッセージ型・設定・trim 本体
pub mod domain;

/// Outbound ポート（FS・ログ・環境変数）
pub mod ports;

/// ポートの標準実装と設定ファイル
pub mod adapter;

/// ホストのフック
pub mod usecase;

/// 標準アダプタでの組み立て
pub mod wiring;

#[cfg(test)]
mod tests;

pub use domain::{trim_reasoning, Message, Part, PartKind, Role, TransformOutput, TrimConfig, TrimReport};
pub use error::Error;
pub use usecase::ThinkingTrimPlugin;
pub use wiring::{wire_plugin, wire_plugin_from_env};
