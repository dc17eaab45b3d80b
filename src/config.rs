use std::path::PathBuf;
#[cfg(test)]
use std::path::Path;
use std::time::Duration;

/// 默认最大结果数
pub const DEFAULT_LIMIT: u32 = 100;

/// es.exe 搜索超时
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// where/which 查找超时
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// es.exe --version 自检超时
pub const VERSION_TIMEOUT: Duration = Duration::from_secs(5);

/// 覆盖 es.exe 路径的环境变量
pub const ES_PATH_ENV: &str = "EVERYTHING_ES_PATH";

/// Everything 安装目录下的命令行工具名
pub const ES_EXE_NAME: &str = "es.exe";

/// Windows 下隐藏子进程控制台窗口
#[cfg(windows)]
pub const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// 在 PATH 中查找可执行文件的系统命令
#[derive(Debug, Clone)]
pub struct PathLookup {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl Default for PathLookup {
    fn default() -> Self {
        #[cfg(windows)]
        let (program, name) = ("where", ES_EXE_NAME);
        #[cfg(not(windows))]
        let (program, name) = ("which", "es");

        Self {
            program: program.to_string(),
            args: vec![name.to_string()],
            timeout: LOOKUP_TIMEOUT,
        }
    }
}

/// es.exe 定位配置：按顺序探测的候选路径 + PATH 兜底查找
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    pub candidates: Vec<PathBuf>,
    pub path_lookup: Option<PathLookup>,
}

impl LocatorConfig {
    /// 只探测给定路径，不查 PATH
    pub fn with_candidates<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            path_lookup: None,
        }
    }

    /// 从环境变量构建默认候选列表
    pub fn from_env() -> Self {
        let mut candidates = Vec::new();

        if let Some(custom) = std::env::var_os(ES_PATH_ENV).filter(|v| !v.is_empty()) {
            candidates.push(PathBuf::from(custom));
        }

        candidates.push(PathBuf::from(r"C:\Program Files\Everything\es.exe"));
        candidates.push(PathBuf::from(r"C:\Program Files (x86)\Everything\es.exe"));

        // %ProgramFiles% / %ProgramFiles(x86)% 展开 (未设置则跳过)
        for var in ["ProgramFiles", "ProgramFiles(x86)"] {
            if let Some(dir) = std::env::var_os(var).filter(|v| !v.is_empty()) {
                candidates.push(PathBuf::from(dir).join("Everything").join(ES_EXE_NAME));
            }
        }

        Self {
            candidates,
            path_lookup: Some(PathLookup::default()),
        }
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

pub struct GlobalConfig {
    pub locator: LocatorConfig,
}

pub static GLOBAL_CONFIG: once_cell::sync::Lazy<GlobalConfig> =
    once_cell::sync::Lazy::new(|| GlobalConfig {
        locator: LocatorConfig::from_env(),
    });
