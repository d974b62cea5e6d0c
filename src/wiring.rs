//! 配線: 標準アダプタで ThinkingTrimPlugin を組み立てる

use std::path::Path;
use std::sync::Arc;

use crate::adapter::{
    load_or_create_config, BufferedLog, FileJsonLog, NoopLog, StdEnvResolver, StdFileSystem, CONFIG_FILENAME,
    DEBUG_LOG_FILENAME,
};
use crate::error::Error;
use crate::ports::outbound::{EnvResolver, FileSystem, Log};
use crate::usecase::ThinkingTrimPlugin;

/// 設定ディレクトリ配下の設定ファイルを読み（無ければ作成し）、プラグインを組み立てる
///
/// debug が true ならデバッグログを同じディレクトリの thinking-trim.log へ追記する。
/// 設定読み込み中の警告もそのときだけ書き出す（debug が false なら黙って捨てる）。
pub fn wire_plugin(config_dir: &Path) -> ThinkingTrimPlugin {
    wire_plugin_with(Arc::new(StdFileSystem), config_dir)
}

/// 環境変数から設定ディレクトリを解決して wire_plugin する
pub fn wire_plugin_from_env() -> Result<ThinkingTrimPlugin, Error> {
    wire_plugin_resolving(&StdEnvResolver)
}

pub(crate) fn wire_plugin_resolving(env: &dyn EnvResolver) -> Result<ThinkingTrimPlugin, Error> {
    let dir = env.resolve_config_dir()?;
    Ok(wire_plugin(&dir))
}

pub(crate) fn wire_plugin_with(fs: Arc<dyn FileSystem>, config_dir: &Path) -> ThinkingTrimPlugin {
    // debug の有無は読み込み後に決まるので、読み込み中の警告はいったん溜める
    let pending = BufferedLog::new();
    let config = load_or_create_config(fs.as_ref(), &config_dir.join(CONFIG_FILENAME), &pending);
    let log: Arc<dyn Log> = if config.debug {
        let file_log = FileJsonLog::new(fs, config_dir.join(DEBUG_LOG_FILENAME));
        pending.replay_into(&file_log);
        Arc::new(file_log)
    } else {
        Arc::new(NoopLog)
    };
    ThinkingTrimPlugin::new(config, log)
}
