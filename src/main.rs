// main.rs - 程序入口
// 负责初始化日志与运行时、解析命令行参数、分发子命令

mod cli;
mod config;
mod error;
mod fetch;
mod source;

// 初始化多语言支持，嵌入 locales 目录下的所有翻译
rust_i18n::i18n!("locales");

use clap::{CommandFactory, Parser}; // CommandFactory 用于生成补全脚本
use clap_complete::generate; // 引入补全脚本生成函数
use cli::{Cli, Commands, ConfigAction, SUPPORTED_RESOLUTIONS};
use colored::Colorize;
use config::{AppConfig, expand_path};
use fetch::DownloadRequest;
use rust_i18n::t; // 引入翻译宏
use source::interfacelift::InterfaceLiftClient;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// 整个流程是顺序执行的，单线程运行时即可
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 自动检测系统语言并设置
    let locale = std::env::var("LANG").unwrap_or_else(|_| "en".to_string());
    if locale.starts_with("zh") {
        rust_i18n::set_locale("zh-CN");
    } else {
        rust_i18n::set_locale("en");
    }

    let cli = Cli::parse();

    // 配置只在启动时读取一次
    let mut config = AppConfig::new();

    match &cli.command {
        None => handle_fetch(&config, &cli).await?,
        Some(Commands::Config { action }) => handle_config(&mut config, action)?,
        Some(Commands::Completions { shell }) => {
            generate(*shell, &mut Cli::command(), "liftwall", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// 诊断日志写到 stderr，默认只输出 warn 及以上，可用 RUST_LOG 调整
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 处理默认的下载流程
async fn handle_fetch(config: &AppConfig, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dir = cli.dir.as_deref().ok_or(t!("error_missing_dir"))?;

    let request = DownloadRequest {
        amount: cli.amount.unwrap_or(config.defaults.amount),
        dir: expand_path(dir),
        resolution: cli
            .resolution
            .clone()
            .unwrap_or_else(|| config.defaults.resolution.clone()),
        new_only: cli.newonly,
    };

    if !SUPPORTED_RESOLUTIONS.contains(&request.resolution.as_str()) {
        tracing::warn!(resolution = %request.resolution, "resolution is not in the supported list, passing it through");
    }

    let shown = request.dir.display().to_string();
    println!("{}", t!("download_dir", path => shown.green()));

    let client = InterfaceLiftClient::new(&config.domain, config.timeout_secs.map(Duration::from_secs))?;
    let summary = fetch::run(&client, &request).await?;

    println!(
        "{}",
        t!(
            "download_done",
            downloaded => summary.downloaded,
            skipped => summary.skipped,
            pages => summary.pages_visited
        )
    );
    Ok(())
}

/// 处理 config 子命令：查看或修改配置
fn handle_config(config: &mut AppConfig, action: &ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            println!("{}", t!("config_title"));
            println!("{}", t!("config_path", path => config.config_path.display()));
            println!("{}", t!("config_domain", domain => config.domain));
            let timeout = config
                .timeout_secs
                .map(|s| format!("{s}s"))
                .unwrap_or_else(|| "None".to_string());
            println!("{}", t!("config_timeout", timeout => timeout));
            println!("{}", t!("config_amount", amount => config.defaults.amount));
            println!("{}", t!("config_res", res => config.defaults.resolution));
        }
        ConfigAction::Schema => {
            println!("{}", AppConfig::get_schema()?);
        }
        ConfigAction::Dump => {
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Set { key, value } => {
            config.set_value(key, value)?;
            config.save()?;
            println!("{}", t!("config_updated", key => key, value => value));
        }
    }
    Ok(())
}
