//! クレート横断のテスト（trim シナリオ・プラグイン・配線）

mod plugin_tests;
