//! レコードをメモリに溜める Log 実装
//!
//! 出力先が決まる前（設定読み込み中）のレコードを保持し、後で別の Log へ流し直す。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Mutex;

/// 受け取ったレコードを順に保持する Log 実装
#[derive(Debug, Default)]
pub struct BufferedLog {
    records: Mutex<Vec<LogRecord>>,
}

impl BufferedLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保持しているレコードの複製
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }

    /// 保持しているレコードを順に log へ書き出す。書き出し失敗は無視する。
    pub fn replay_into(self, log: &dyn Log) {
        let records = self
            .records
            .into_inner()
            .unwrap_or_else(|e| e.into_inner());
        for record in &records {
            let _ = log.log(record);
        }
    }
}

impl Log for BufferedLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records
            .lock()
            .map_err(|_| Error::io_msg("log buffer lock poisoned"))?
            .push(record.clone());
        Ok(())
    }
}
