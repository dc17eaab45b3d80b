use std::path::{Path, PathBuf};

use crate::config::{LocatorConfig, PathLookup};
use crate::error::{EsError, Result};
use crate::process::run_captured;

/// 定位 es.exe：先按顺序探测候选路径，再查 PATH。找不到返回 None，从不报错。
pub async fn find_es(config: &LocatorConfig) -> Option<PathBuf> {
    for path in &config.candidates {
        if path.exists() {
            tracing::debug!("es.exe 候选命中: {}", path.display());
            return Some(path.clone());
        }
        tracing::debug!("es.exe 候选不存在: {}", path.display());
    }

    let lookup = config.path_lookup.as_ref()?;
    lookup_on_path(lookup).await
}

/// 同 [`find_es`]，找不到时返回 [`EsError::NotFound`]
pub async fn require_es(config: &LocatorConfig) -> Result<PathBuf> {
    find_es(config).await.ok_or(EsError::NotFound)
}

async fn lookup_on_path(lookup: &PathLookup) -> Option<PathBuf> {
    let captured = match run_captured(Path::new(&lookup.program), &lookup.args, lookup.timeout).await {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("{} 查找失败: {}", lookup.program, e);
            return None;
        }
    };

    if !captured.success() {
        tracing::debug!("{} 未找到 es.exe ({})", lookup.program, captured.status);
        return None;
    }

    // where 可能返回多行 (CRLF)，取第一条
    let first = captured
        .stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())?;

    tracing::debug!("PATH 中找到 es.exe: {}", first);
    Some(PathBuf::from(first))
}
