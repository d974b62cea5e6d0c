//! Ports & Adapters のポート定義
//!
//! - inbound: なし（ホストのフック呼び出しが入り口で、usecase::plugin が直接受ける）
//! - outbound: プラグインが外界（FS・ログ・環境変数）を使うための trait

pub mod outbound;
