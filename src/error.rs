//! エラーハンドリング

/// クレート共通のエラー型
///
/// trim 本体は失敗しない。エラーになるのはファイル・環境変数・JSON を扱う境界だけ。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("Environment error: {0}")]
    Env(String),
}

impl Error {
    /// I/O エラー（メッセージ付き）
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// JSON のパース・シリアライズ失敗
    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    /// 環境変数の解決失敗
    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
