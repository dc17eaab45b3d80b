use std::ffi::OsStr;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::process::Command;

use crate::error::{EsError, Result};

/// 子进程的退出状态与输出
#[derive(Debug)]
pub struct Captured {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// stdout + stderr，用于出错时展示
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// 运行一次子进程并捕获输出，超时即杀掉
pub async fn run_captured<I, S>(program: &Path, args: I, timeout: Duration) -> Result<Captured>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    #[cfg(windows)]
    cmd.creation_flags(crate::config::CREATE_NO_WINDOW);

    let child = cmd.spawn()?;

    // 超时后 future 被丢弃，kill_on_drop 负责结束子进程
    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(output) => output?,
        Err(_) => return Err(EsError::Timeout(timeout)),
    };

    Ok(Captured {
        status: output.status,
        stdout: decode(&output.stdout),
        stderr: decode(&output.stderr),
    })
}

/// 先按 UTF-8 解码，失败再按 GBK (简体中文控制台代码页 936)
///
/// 其他 ANSI 代码页 (如 1252) 下的非 UTF-8 路径会被错误解码，
/// 需要时可让 es.exe 以 UTF-8 输出。
pub fn decode(bytes: &[u8]) -> String {
    let (utf8, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if !had_errors {
        return utf8.into_owned();
    }
    let (gbk, _, _) = encoding_rs::GBK.decode(bytes);
    gbk.into_owned()
}
