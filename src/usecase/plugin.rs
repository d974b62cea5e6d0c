//! ホストのプラグインフック（config / experimental.chat.messages.transform）
//!
//! 設定とログは外から注入する。trim 本体は domain::trim_reasoning に任せ、
//! ここでは結果をデバッグトレースとして Log に流すだけ。

use crate::domain::{trim_reasoning, TransformOutput, TrimConfig, TrimReport};
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use serde_json::{json, Value};
use std::sync::Arc;

/// reasoning trim プラグイン
pub struct ThinkingTrimPlugin {
    config: TrimConfig,
    log: Arc<dyn Log>,
}

impl ThinkingTrimPlugin {
    pub fn new(config: TrimConfig, log: Arc<dyn Log>) -> Self {
        Self { config, log }
    }

    pub fn config(&self) -> &TrimConfig {
        &self.config
    }

    /// config フック: ホスト設定の `experimental.thinkingTrim` を現在の設定に重ねる
    ///
    /// ホストが指定したキーだけ上書きし、指定の無いキーは設定ファイル等で決まった値を保つ。
    /// `thinkingTrim` 自体が無ければ何も変えない。
    pub fn on_config(&mut self, host_settings: &Value) {
        let Some(section) = TrimConfig::host_section(host_settings) else {
            return;
        };
        let invalid = TrimConfig::invalid_fields(section);
        if !invalid.is_empty() {
            let _ = self.log.log(
                &LogRecord::now(LogLevel::Warn, "invalid host settings ignored")
                    .layer("usecase")
                    .kind("config")
                    .field("fields", json!(invalid)),
            );
        }
        self.config = self.config.overlay(section);

        let _ = self.log.log(
            &LogRecord::now(LogLevel::Debug, "config applied")
                .layer("usecase")
                .kind("config")
                .field("enabled", json!(self.config.enabled))
                .field("keepTurns", json!(self.config.keep_turns)),
        );
    }

    /// transform フック: output.messages をその場で trim する
    ///
    /// ctx はホストのイベントコンテキストで、使わない。
    pub fn transform_messages(&self, _ctx: &Value, output: &mut TransformOutput) -> TrimReport {
        let report = trim_reasoning(&mut output.messages, &self.config);
        if report.ran {
            self.trace(&report, output.messages.len());
        }
        report
    }

    fn trace(&self, report: &TrimReport, message_count: usize) {
        let _ = self.log.log(
            &LogRecord::now(LogLevel::Debug, "reasoning trimmed")
                .layer("usecase")
                .kind("trim")
                .field("found", json!(report.found))
                .field("removed", json!(report.removed))
                .field("keepTurns", json!(self.config.keep_turns))
                .field("messages", json!(message_count)),
        );
        for m in &report.messages {
            let _ = self.log.log(
                &LogRecord::now(LogLevel::Debug, "assistant message")
                    .layer("usecase")
                    .kind("trim")
                    .field("index", json!(m.index))
                    .field("recencyRank", json!(m.recency_rank))
                    .field("kept", json!(m.kept))
                    .field("found", json!(m.found))
                    .field("removed", json!(m.removed)),
            );
        }
    }
}
