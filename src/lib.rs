//! Everything (es.exe) 命令行搜索封装
//!
//! 定位 es.exe，带超时执行一次搜索，把结果渲染成 Markdown。

pub mod config;
pub mod error;
pub mod locator;
pub mod markdown;
pub mod process;
pub mod searcher;
pub mod verify;

pub use error::{EsError, Result};
pub use searcher::SearchRequest;

/// 初始化日志：只写 stderr，stdout 留给 Markdown 输出
pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
