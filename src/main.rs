use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use es_search::config::{DEFAULT_LIMIT, GLOBAL_CONFIG};
use es_search::locator::require_es;
use es_search::markdown;
use es_search::searcher::{run_search, SearchRequest};

#[derive(Parser, Debug)]
#[command(author, version, about = "Search for files using Everything search engine", long_about = None)]
struct CliArgs {
    /// 搜索语句 (支持通配符、布尔运算等 Everything 语法)
    query: String,

    /// 最大结果数
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    limit: u32,

    /// 限定搜索目录
    #[arg(long)]
    folder: Option<String>,

    /// 输出调试日志到 stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    es_search::init_tracing(args.verbose);

    let (output, code) = match require_es(&GLOBAL_CONFIG.locator).await {
        Ok(es_path) => {
            let mut request = SearchRequest::new(args.query).with_limit(args.limit);
            if let Some(folder) = args.folder {
                request = request.with_folder(folder);
            }

            match run_search(&es_path, &request).await {
                // 无结果也是正常输出，退出码 0
                Ok(results) => (
                    markdown::format_results(&request.query, &results, request.limit),
                    ExitCode::SUCCESS,
                ),
                Err(_) => (markdown::query_error(&request.query), ExitCode::FAILURE),
            }
        }
        Err(e) => {
            tracing::warn!("{}", e);
            (markdown::es_not_found().to_string(), ExitCode::FAILURE)
        }
    };

    writeln!(std::io::stdout().lock(), "{output}").context("写入 stdout 失败")?;
    Ok(code)
}
