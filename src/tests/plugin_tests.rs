//! ThinkingTrimPlugin のフック（config → transform）とデバッグトレースのテスト

use crate::adapter::BufferedLog;
use crate::domain::{Message, Part, TransformOutput, TrimConfig};
use crate::usecase::ThinkingTrimPlugin;
use serde_json::json;
use std::sync::Arc;

fn output() -> TransformOutput {
    TransformOutput {
        messages: vec![
            Message::user(vec![Part::text("q1")]),
            Message::assistant(vec![Part::reasoning("r1"), Part::text("a1")]),
            Message::user(vec![Part::text("q2")]),
            Message::assistant(vec![Part::reasoning("r2"), Part::text("a2")]),
        ],
    }
}

#[test]
fn test_uses_defaults_when_host_config_missing() {
    let mut plugin = ThinkingTrimPlugin::new(TrimConfig::default(), Arc::new(BufferedLog::new()));
    plugin.on_config(&json!({ "experimental": {} }));
    assert_eq!(*plugin.config(), TrimConfig::default());

    let mut out = TransformOutput {
        messages: vec![Message::assistant(vec![Part::reasoning("r"), Part::text("hi")])],
    };
    plugin.transform_messages(&json!({}), &mut out);
    assert_eq!(out.messages[0].parts, vec![Part::text("hi")]);
}

#[test]
fn test_respects_enabled_false_from_host() {
    let log = Arc::new(BufferedLog::new());
    let mut plugin = ThinkingTrimPlugin::new(TrimConfig::default(), log.clone());
    plugin.on_config(&json!({ "experimental": { "thinkingTrim": { "enabled": false, "keepTurns": 0 } } }));

    let mut out = output();
    let report = plugin.transform_messages(&json!({}), &mut out);
    assert!(!report.ran);
    assert_eq!(out, output());
    // 無効時は trim のトレースを出さない
    let messages: Vec<String> = log.records().into_iter().map(|r| r.message).collect();
    assert_eq!(messages, vec!["config applied".to_string()]);
}

#[test]
fn test_trace_reports_counts_per_message() {
    let log = Arc::new(BufferedLog::new());
    let plugin = ThinkingTrimPlugin::new(TrimConfig::new(true, 1), log.clone());
    let mut out = output();
    plugin.transform_messages(&json!({}), &mut out);

    let records = log.records();
    assert_eq!(records.len(), 3);

    let summary = records[0].fields.as_ref().unwrap();
    assert_eq!(records[0].message, "reasoning trimmed");
    assert_eq!(summary["found"], json!(2));
    assert_eq!(summary["removed"], json!(1));
    assert_eq!(summary["messages"], json!(4));

    let first = records[1].fields.as_ref().unwrap();
    assert_eq!(first["index"], json!(1));
    assert_eq!(first["recencyRank"], json!(1));
    assert_eq!(first["kept"], json!(false));
    let last = records[2].fields.as_ref().unwrap();
    assert_eq!(last["index"], json!(3));
    assert_eq!(last["kept"], json!(true));
}

#[test]
fn test_invalid_host_value_warns_and_keeps_current() {
    let log = Arc::new(BufferedLog::new());
    let mut plugin = ThinkingTrimPlugin::new(TrimConfig::new(true, 2), log.clone());
    plugin.on_config(&json!({ "experimental": { "thinkingTrim": { "keepTurns": "all" } } }));
    assert_eq!(*plugin.config(), TrimConfig::new(true, 2));

    let records = log.records();
    assert_eq!(records[0].message, "invalid host settings ignored");
    assert_eq!(records[0].fields.as_ref().unwrap()["fields"], json!(["keepTurns"]));
}
