// src/main.rs

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

use ad_selector::config::config_manager::{CliArgs, ConfigManager};
use ad_selector::logging::logger::init_tracing;
use ad_selector::logging::selection_log::SelectionLog;
use ad_selector::model::adapters::FileCampaignAdapter;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let _guard = match init_tracing(&args.log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Unable to set global tracing subscriber: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let adapter = FileCampaignAdapter::new(&args.campaigns);
    let config = match ConfigManager::from_args(&args, &adapter) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load inputs");
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        campaigns = config.campaigns.len(),
        requests = config.requests.len(),
        match_mode = ?config.selector.match_mode(),
        "ad selector starting"
    );

    // 每个请求输出一行 JSON；只要有一个请求无可选 campaign，退出码即为失败
    let mut unfilled = 0usize;
    for request in &config.requests {
        let log = SelectionLog::with_generated_id(request);
        let (result, log) = config.selector.select_with_log(&config.campaigns, request, log);
        if result.is_err() {
            unfilled += 1;
        }
        println!("{}", log.to_json());
    }

    info!(unfilled, "ad selector finished");
    if unfilled > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
