// src/logging.rs
//! flexi_logger によるログ初期化。出力は常に標準エラーへ流し、
//! 標準出力はレポート専用に空けておく。

use std::{
    io::Write,
    sync::{Mutex, OnceLock},
};

use flexi_logger::{DeferredNow, FlexiLoggerError, Logger, LoggerHandle};

static LOGGER_HANDLE: OnceLock<Mutex<LoggerHandle>> = OnceLock::new();

/// `spec`（例: `"info"`, `"sloc_census=debug"`）でロガーを開始する
///
/// 二度目以降の呼び出しはレベルの差し替えのみ行う。
///
/// # Errors
///
/// ログ指定の解析やロガーの開始に失敗した場合にエラーを返します。
pub fn init(spec: &str) -> Result<(), FlexiLoggerError> {
    if let Some(handle) = LOGGER_HANDLE.get() {
        if let Ok(handle) = handle.lock() {
            handle.parse_new_spec(spec)?;
        }
        return Ok(());
    }

    let handle = Logger::try_with_str(spec)?.log_to_stderr().format(compact_format).start()?;
    let _ = LOGGER_HANDLE.set(Mutex::new(handle));
    Ok(())
}

fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

// "12:34:56.789 WRN message"
fn compact_format(w: &mut dyn Write, now: &mut DeferredNow, record: &log::Record) -> std::io::Result<()> {
    write!(w, "{} {} {}", now.format("%H:%M:%S%.3f"), level_abbr(record.level()), record.args())
}
