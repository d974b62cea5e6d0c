//! reasoning trim 本体（純粋関数）
//!
//! 直近 keep_turns 件の assistant メッセージだけ reasoning Part を残し、
//! それより古い assistant メッセージからは reasoning Part を取り除く。
//! 新しさはリスト内の位置だけで決まる（末尾の assistant が rank 0）。

use super::config::TrimConfig;
use super::message::Message;

/// assistant メッセージ 1 件分の trim 結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTrim {
    /// messages 内の位置
    pub index: usize,
    /// 末尾から数えた assistant の順位（0 が最新）
    pub recency_rank: usize,
    /// reasoning を残したか
    pub kept: bool,
    pub found: usize,
    pub removed: usize,
}

/// 1 回の trim の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrimReport {
    /// false なら enabled=false で何もしていない
    pub ran: bool,
    pub found: usize,
    pub removed: usize,
    /// assistant メッセージごとの結果（messages の順）
    pub messages: Vec<MessageTrim>,
}

impl TrimReport {
    pub fn skipped() -> Self {
        Self::default()
    }
}

/// messages をその場で書き換えて reasoning Part を取り除く
///
/// assistant 以外のメッセージには触れない。残した Part の順序は保たれる。
pub fn trim_reasoning(messages: &mut [Message], config: &TrimConfig) -> TrimReport {
    if !config.enabled {
        return TrimReport::skipped();
    }

    let mut report = TrimReport {
        ran: true,
        ..TrimReport::default()
    };

    let assistants = messages
        .iter_mut()
        .enumerate()
        .filter(|(_, m)| m.is_assistant())
        .rev();

    for (recency_rank, (index, msg)) in assistants.enumerate() {
        let found = msg.reasoning_count();
        let kept = recency_rank < config.keep_turns;
        let removed = if kept || found == 0 {
            0
        } else {
            msg.parts.retain(|p| !p.is_reasoning());
            found
        };
        report.found += found;
        report.removed += removed;
        report.messages.push(MessageTrim {
            index,
            recency_rank,
            kept,
            found,
            removed,
        });
    }

    report.messages.reverse();
    report
}
