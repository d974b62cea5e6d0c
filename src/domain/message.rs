//! 型付きメッセージ（ホストのパイプラインが渡す `{ info, parts }` 形式）
//!
//! trim が見るのは `info.role` と各 Part の `type` だけ。
//! それ以外のフィールドは不透明なマップに保持し、そのままホストへ返す。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// メッセージの送り手
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    System,
    /// 未知のロール（文字列のまま保持）
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Other(s) => s,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "system" => Role::System,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(r: Role) -> Self {
        match r {
            Role::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

/// Part の種別（`type` フィールド）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartKind {
    Reasoning,
    Text,
    /// tool / file / step-start など trim に無関係な種別
    Other(String),
}

impl PartKind {
    pub fn as_str(&self) -> &str {
        match self {
            PartKind::Reasoning => "reasoning",
            PartKind::Text => "text",
            PartKind::Other(s) => s,
        }
    }
}

impl From<String> for PartKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "reasoning" => PartKind::Reasoning,
            "text" => PartKind::Text,
            _ => PartKind::Other(s),
        }
    }
}

impl From<PartKind> for String {
    fn from(k: PartKind) -> Self {
        match k {
            PartKind::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

/// メッセージの構成要素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "type")]
    pub kind: PartKind,
    /// `type` 以外のフィールド（text / id / sessionID など）
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl Part {
    pub fn new(kind: PartKind) -> Self {
        Self {
            kind,
            data: Map::new(),
        }
    }

    pub fn reasoning(text: impl Into<String>) -> Self {
        Self::new(PartKind::Reasoning).with_field("text", Value::String(text.into()))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(PartKind::Text).with_field("text", Value::String(text.into()))
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    pub fn is_reasoning(&self) -> bool {
        self.kind == PartKind::Reasoning
    }
}

/// メッセージのメタ情報（role 以外は不透明）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub role: Role,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 会話メッセージ 1 件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub info: MessageInfo,
    pub parts: Vec<Part>,
}

impl Message {
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self {
            info: MessageInfo {
                role,
                extra: Map::new(),
            },
            parts,
        }
    }

    pub fn user(parts: Vec<Part>) -> Self {
        Self::new(Role::User, parts)
    }

    pub fn assistant(parts: Vec<Part>) -> Self {
        Self::new(Role::Assistant, parts)
    }

    pub fn role(&self) -> &Role {
        &self.info.role
    }

    pub fn is_assistant(&self) -> bool {
        self.info.role == Role::Assistant
    }

    pub fn reasoning_count(&self) -> usize {
        self.parts.iter().filter(|p| p.is_reasoning()).count()
    }
}

/// transform フックの出力オブジェクト（`{ messages: [...] }`）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformOutput {
    pub messages: Vec<Message>,
}
