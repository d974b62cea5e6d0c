//! ドメイン型と trim 本体
//!
//! I/O を持たない。設定ファイル・ログは adapter 側で扱う。

pub mod config;
pub mod message;
pub mod trim;

pub use config::TrimConfig;
pub use message::{Message, MessageInfo, Part, PartKind, Role, TransformOutput};
pub use trim::{trim_reasoning, MessageTrim, TrimReport};
