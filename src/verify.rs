//! es.exe 安装自检

use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use crate::config::{LocatorConfig, VERSION_TIMEOUT};
use crate::locator::find_es;
use crate::process::run_captured;

const RULE_WIDTH: usize = 70;

/// 自检结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    NotFound,
    NotExecutable { path: PathBuf, output: String },
    Ready { path: PathBuf },
}

impl Status {
    pub fn is_ready(&self) -> bool {
        matches!(self, Status::Ready { .. })
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_ready() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// 完整的诊断报告文本
    pub fn report(&self) -> String {
        let mut out = String::new();
        let banner = "=".repeat(RULE_WIDTH);
        let rule = "-".repeat(RULE_WIDTH);

        let _ = writeln!(out, "{banner}");
        let _ = writeln!(out, "Everything CLI (es.exe) Installation Verification");
        let _ = writeln!(out, "{banner}");
        out.push('\n');

        match self {
            Status::NotFound => {
                let _ = writeln!(out, "STATUS: es.exe NOT FOUND\n");
                let _ = writeln!(
                    out,
                    "The Everything search skill requires es.exe (the command-line tool).\n"
                );
                let _ = writeln!(out, "WHAT TO DO:\n{rule}\n");
                out.push_str(
                    "1. Verify Everything is installed:\n\
                     \x20  - Look for: C:\\Program Files\\Everything\\Everything.exe\n\n\
                     2. Download es.exe:\n\
                     \x20  - Visit: https://www.voidtools.com/downloads/\n\
                     \x20  - Download: 'Everything Command-line tool (es.exe)'\n\n\
                     3. Install es.exe:\n\
                     \x20  - Extract the es.exe file\n\
                     \x20  - Place it in: C:\\Program Files\\Everything\\\n\
                     \x20  - Note: The Lite version doesn't include es.exe - use Full version\n\n\
                     4. Verify installation:\n\
                     \x20  - Run this check again to confirm\n\n",
                );
                let _ = writeln!(out, "TROUBLESHOOTING:\n{rule}");
                out.push_str(
                    "- Ensure you're using the Full version of Everything (not Lite)\n\
                     - The Everything Service doesn't need to be running for es.exe to work\n\
                     - You may need Administrator rights to place es.exe in Program Files\n\
                     - Or set EVERYTHING_ES_PATH to the full path of es.exe\n",
                );
            }
            Status::NotExecutable { path, output } => {
                write_found(&mut out, path);
                let _ = writeln!(out, "STATUS: es.exe FOUND but NOT EXECUTABLE\n");
                let _ = writeln!(out, "Error: {}\n", output.trim_end());
                let _ = writeln!(out, "TROUBLESHOOTING:\n{rule}");
                out.push_str(
                    "- Verify the file is not corrupted\n\
                     - Try re-downloading es.exe from voidtools.com\n\
                     - Check file permissions (should be readable/executable)\n",
                );
            }
            Status::Ready { path } => {
                write_found(&mut out, path);
                let _ = writeln!(out, "STATUS: es.exe READY\n");
                let _ = writeln!(out, "SUCCESS! Everything Search is ready to use.\n");
                let _ = writeln!(out, "Location: {}\n", path.display());
                out.push_str(
                    "You can now use Everything Search to:\n\
                     - Find files instantly by name or pattern\n\
                     - Use advanced search syntax (wildcards, boolean operators)\n\
                     - Restrict searches to specific locations\n",
                );
            }
        }

        out
    }
}

fn write_found(out: &mut String, path: &Path) {
    let _ = writeln!(out, "FOUND: {}\n", path.display());
    let _ = writeln!(out, "Testing es.exe execution...");
}

/// 定位 es.exe 并试运行 `--version`
pub async fn check(locator: &LocatorConfig) -> Status {
    check_with_timeout(locator, VERSION_TIMEOUT).await
}

pub async fn check_with_timeout(locator: &LocatorConfig, timeout: Duration) -> Status {
    let Some(path) = find_es(locator).await else {
        return Status::NotFound;
    };

    match probe_version(&path, timeout).await {
        Ok(()) => Status::Ready { path },
        Err(output) => Status::NotExecutable { path, output },
    }
}

/// 试运行 es.exe --version，失败时返回合并后的输出或错误信息
pub async fn probe_version(es_path: &Path, timeout: Duration) -> Result<(), String> {
    match run_captured(es_path, ["--version"], timeout).await {
        Ok(captured) if captured.success() => {
            tracing::debug!("es.exe --version: {}", captured.stdout.trim());
            Ok(())
        }
        Ok(captured) => {
            tracing::warn!("es.exe --version 返回 {}", captured.status);
            Err(captured.combined())
        }
        Err(e) => {
            tracing::warn!("es.exe --version 执行失败: {}", e);
            Err(e.to_string())
        }
    }
}
