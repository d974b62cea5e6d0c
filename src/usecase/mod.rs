//! ユースケース層（ホストのフックを受けて domain を呼ぶ）

pub mod plugin;

pub use plugin::ThinkingTrimPlugin;
