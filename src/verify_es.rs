use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use es_search::config::GLOBAL_CONFIG;
use es_search::verify;

#[derive(Parser, Debug)]
#[command(author, version, about = "Verify that Everything's es.exe is installed and runnable", long_about = None)]
struct VerifyArgs {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    VerifyArgs::parse();
    es_search::init_tracing(false);

    let status = verify::check(&GLOBAL_CONFIG.locator).await;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", status.report()).context("写入 stdout 失败")?;
    Ok(status.exit_code())
}
