//! 搜索结果与错误提示的 Markdown 输出

use std::fmt::Write;

/// 把搜索结果渲染成 Markdown 列表
///
/// 结果数达到 `limit` 时标注 "(limited to N)"，表示结果可能被 es.exe 截断。
pub fn format_results(query: &str, results: &[String], limit: u32) -> String {
    if results.is_empty() {
        return format!("# Everything Search: No results\n\nNo files found matching: `{query}`");
    }

    let count = results.len();
    let mut md = String::from("# Everything Search Results\n\n");
    let _ = writeln!(md, "**Query:** `{query}`");
    let _ = write!(md, "**Results:** {count}");

    if count >= limit as usize {
        let _ = write!(md, " (limited to {limit})");
    }
    md.push_str("\n\n");

    for (i, path) in results.iter().enumerate() {
        let _ = writeln!(md, "{}. `{}`", i + 1, escape_path(path));
    }

    md
}

/// 只转义方括号，避免被解析成链接；反引号不处理
pub fn escape_path(path: &str) -> String {
    path.replace('[', r"\[").replace(']', r"\]")
}

/// 找不到 es.exe 时的安装指引
pub fn es_not_found() -> &'static str {
    r#"# Everything Search: es.exe Not Found

The Everything search skill requires es.exe (the command-line tool).

## What's Missing?

You need the **Everything Command-Line Tool (es.exe)**, not just the Everything GUI application.

## Installation Steps

### Step 1: Verify Everything is Installed
Check if Everything.exe exists at:
- `C:\Program Files\Everything\Everything.exe`
- `C:\Program Files (x86)\Everything\Everything.exe`

If not found, download Everything from: https://www.voidtools.com/

### Step 2: Download es.exe
1. Visit: https://www.voidtools.com/downloads/
2. Download: "Everything Command-line tool (es.exe)"
3. Extract the es.exe file

### Step 3: Install es.exe
1. Copy es.exe to: `C:\Program Files\Everything\`
2. **Note:** You may need Administrator rights
3. Verify by running: `C:\Program Files\Everything\es.exe --version`

## Important Notes

- **Full vs Lite Version**: Only the Full version includes es.exe. If you have the Lite version, download the Full version.
- **Everything Service**: Does NOT need to be running for es.exe to work
- **PATH**: Alternatively, add the Everything directory to your system PATH
- **EVERYTHING_ES_PATH**: Or point this environment variable at es.exe

## Verification

After installing es.exe, run the verification helper:
```
verify-es
```
"#
}

/// 查询失败 (语法错误或 Everything 异常) 的提示
pub fn query_error(query: &str) -> String {
    format!(
        r#"# Everything Search: Query Error

The search query may be invalid or Everything encountered an error.

**Query:** `{query}`

Try checking:
- Query syntax (wildcards `*`, `?`, boolean operators `|`, `!`)
- Special characters that need escaping
- Everything is running and indexed
"#
    )
}
