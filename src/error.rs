use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EsError>;

/// es.exe 调用过程中的错误
#[derive(Debug, Error)]
pub enum EsError {
    /// 候选路径与 PATH 中都找不到 es.exe
    #[error("es.exe not found")]
    NotFound,
    /// 子进程超时，已被终止
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    /// 子进程非零退出
    #[error("exited with {0}")]
    Exit(ExitStatus),
    /// 启动或等待子进程失败
    #[error("{0}")]
    Spawn(#[from] std::io::Error),
}
