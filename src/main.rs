mod cli;
mod workflow;

use clap::Parser;
use image_link_bundler::config::BundlerConfig;
use image_link_bundler::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = cli::Args::parse();

    let config = match BundlerConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("エラー: {}", report(&e));
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.logging);

    tracing::info!(input = %args.input_dir.display(), "処理を開始します");
    match workflow::run(&args, &config) {
        Ok(summary) => {
            tracing::info!(
                images = summary.image_count,
                archive = %summary.archive_path.display(),
                "すべての処理が完了しました"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", report(&e));
            ExitCode::FAILURE
        }
    }
}

/// エラーとその原因を「: 」でつないだ1行にする。
fn report(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
