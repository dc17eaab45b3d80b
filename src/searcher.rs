use std::path::Path;
use std::time::Duration;

use crate::config::{DEFAULT_LIMIT, SEARCH_TIMEOUT};
use crate::error::{EsError, Result};
use crate::process::run_captured;

/// 一次搜索请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// 原样交给 es.exe 的查询 (通配符、布尔运算由 Everything 解析)
    pub query: String,
    pub limit: u32,
    /// 限定搜索目录，空字符串视为未设置
    pub folder: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_LIMIT,
            folder: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// es.exe 参数：-n <limit> [-path <folder>] <query>
    pub fn es_args(&self) -> Vec<String> {
        let mut args = vec!["-n".to_string(), self.limit.to_string()];

        if let Some(folder) = self.folder.as_deref().filter(|f| !f.is_empty()) {
            args.push("-path".to_string());
            args.push(folder.to_string());
        }

        // 整个查询作为一个参数，不拆分
        args.push(self.query.clone());
        args
    }
}

/// 执行搜索 (10 秒超时)
pub async fn run_search(es_path: &Path, request: &SearchRequest) -> Result<Vec<String>> {
    run_search_with_timeout(es_path, request, SEARCH_TIMEOUT).await
}

pub async fn run_search_with_timeout(
    es_path: &Path,
    request: &SearchRequest,
    timeout: Duration,
) -> Result<Vec<String>> {
    let args = request.es_args();
    tracing::debug!("执行 {} {:?}", es_path.display(), args);

    let captured = match run_captured(es_path, &args, timeout).await {
        Ok(c) => c,
        Err(EsError::Spawn(e)) => {
            tracing::error!("Error executing search: {}", e);
            return Err(EsError::Spawn(e));
        }
        Err(e) => {
            tracing::warn!("es.exe 调用失败: {}", e);
            return Err(e);
        }
    };

    if !captured.success() {
        let stderr = captured.stderr.trim();
        if !stderr.is_empty() {
            tracing::debug!("es.exe stderr: {}", stderr);
        }
        tracing::warn!("es.exe 返回错误状态: {}", captured.status);
        return Err(EsError::Exit(captured.status));
    }

    Ok(parse_lines(&captured.stdout))
}

/// 每行一个路径：去空白、丢空行、保持顺序
pub fn parse_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
