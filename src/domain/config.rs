//! trim の設定値（enabled / keepTurns）

use serde_json::Value;

/// ホスト設定内の置き場所（`experimental.thinkingTrim`）
pub const HOST_SETTINGS_SECTION: &str = "experimental";
pub const HOST_SETTINGS_KEY: &str = "thinkingTrim";

pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_KEEP_TURNS: usize = 0;

/// reasoning trim の設定
///
/// プラグイン初期化時に読み込み、以後 transform 呼び出しの間は不変。
/// 設定ファイル・ホスト設定はどちらも `overlay` でフィールド単位に重ねる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimConfig {
    pub enabled: bool,
    /// reasoning を残す直近 assistant メッセージの数
    pub keep_turns: usize,
    /// true のときデバッグトレースをファイルへ書く（wiring が参照）
    pub debug: bool,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            keep_turns: DEFAULT_KEEP_TURNS,
            debug: false,
        }
    }
}

/// keepTurns は非負整数のみ受け付ける
fn as_keep_turns(v: &Value) -> Option<usize> {
    v.as_u64().and_then(|n| usize::try_from(n).ok())
}

impl TrimConfig {
    pub fn new(enabled: bool, keep_turns: usize) -> Self {
        Self {
            enabled,
            keep_turns,
            debug: false,
        }
    }

    /// `{ enabled, keepTurns, debug }` 形式のオブジェクトを重ねる
    ///
    /// 正しい型で指定されたキーだけ上書きし、欠けている・型が違うキーは現在の値を保つ。
    /// keepTurns が負数や小数のときも現在の値のまま。
    pub fn overlay(&self, section: &Value) -> Self {
        Self {
            enabled: section
                .get("enabled")
                .and_then(Value::as_bool)
                .unwrap_or(self.enabled),
            keep_turns: section
                .get("keepTurns")
                .and_then(as_keep_turns)
                .unwrap_or(self.keep_turns),
            debug: section
                .get("debug")
                .and_then(Value::as_bool)
                .unwrap_or(self.debug),
        }
    }

    /// overlay で無視されるキー（指定はあるが型が違う）
    pub fn invalid_fields(section: &Value) -> Vec<&'static str> {
        let mut invalid = Vec::new();
        if section.get("enabled").is_some_and(|v| !v.is_boolean()) {
            invalid.push("enabled");
        }
        if section
            .get("keepTurns")
            .is_some_and(|v| as_keep_turns(v).is_none())
        {
            invalid.push("keepTurns");
        }
        if section.get("debug").is_some_and(|v| !v.is_boolean()) {
            invalid.push("debug");
        }
        invalid
    }

    /// ホスト設定オブジェクトから `experimental.thinkingTrim` を取り出す
    pub fn host_section(settings: &Value) -> Option<&Value> {
        settings
            .get(HOST_SETTINGS_SECTION)
            .and_then(|e| e.get(HOST_SETTINGS_KEY))
    }
}
