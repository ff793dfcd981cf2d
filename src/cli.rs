// cli.rs - 命令行接口定义模块
// 使用 clap 的 derive 模式定义下载参数和辅助子命令

use clap::{Parser, Subcommand}; // Parser: 解析命令行参数的 trait; Subcommand: 定义子命令的 trait
use clap_complete::Shell; // Shell 枚举：Bash, Zsh, Fish, Elvish, PowerShell

/// 网站支持的分辨率，其他值不会被拒绝，只是抓不到壁纸
pub const SUPPORTED_RESOLUTIONS: &[&str] = &[
    "3440x1440", "2560x1080", "5120x2880", "4096x2160", "3840x2400", "3840x2160", "3360x2100",
    "3200x1800", "2880x1800", "2880x1620", "2560x1600", "2560x1440", "1920x1200", "1680x1050",
    "1600x900", "1440x900", "1280x800", "1600x2560", "1200x1920", "1080x1920",
];

fn resolution_help() -> String {
    format!(
        "壁纸分辨率，原样拼入列表页 URL（默认 3360x2100，可在配置文件中修改）\n\n支持: {}",
        SUPPORTED_RESOLUTIONS.join(", ")
    )
}

/// InterfaceLIFT 壁纸批量下载工具
///
/// 按日期从新到旧抓取列表页，下载指定数量的壁纸到本地目录。
///
/// 用法示例:
///   liftwall -d ~/Pictures/wallpapers
///   liftwall -d ./walls -a 35 -r 2560x1440 --newonly
#[derive(Parser)]
#[command(name = "liftwall")]
#[command(version)] // 自动从 Cargo.toml 读取 version 字段
#[command(author)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 下载数量（默认 20，可在配置文件中修改）
    #[arg(short, long, value_name = "N")]
    pub amount: Option<usize>,

    /// 壁纸保存目录（需事先存在）
    #[arg(short, long, required = true, value_name = "DIR")]
    pub dir: Option<String>,

    /// 壁纸分辨率（默认 3360x2100）
    #[arg(short, long, value_name = "WxH", long_help = resolution_help())]
    pub resolution: Option<String>,

    /// 只下载目录中还没有的壁纸，已存在的文件跳过且不计入数量
    #[arg(long)]
    pub newonly: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 配置管理操作
    ///
    /// 用法示例:
    ///   liftwall config show
    ///   liftwall config set amount 40
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// 生成 shell 补全脚本（支持 bash, zsh, fish, elvish, powershell）
    ///
    /// 用法示例：
    ///   liftwall completions zsh > ~/.zsh/completions/_liftwall
    Completions {
        /// 目标 shell 类型
        shell: Shell,
    },
}

/// 配置管理操作
#[derive(Subcommand)]
pub enum ConfigAction {
    /// 查看当前所有配置简报
    Show,
    /// 生成配置文件对应的 JSON Schema
    Schema,
    /// 以 TOML 格式打印当前完整配置内容
    Dump,
    /// 设置配置项的值 (支持: domain, amount, resolution, timeout)
    Set {
        /// 要设置的键
        key: String,
        /// 要设置的值
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_download_flags() {
        let cli = Cli::try_parse_from(["liftwall", "-d", "/tmp/w", "-a", "15", "-r", "1920x1200", "--newonly"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.dir.as_deref(), Some("/tmp/w"));
        assert_eq!(cli.amount, Some(15));
        assert_eq!(cli.resolution.as_deref(), Some("1920x1200"));
        assert!(cli.newonly);
    }

    #[test]
    fn dir_is_required_for_download() {
        assert!(Cli::try_parse_from(["liftwall", "-a", "5"]).is_err());
    }

    #[test]
    fn unknown_resolution_is_accepted() {
        let cli = Cli::try_parse_from(["liftwall", "--dir", "x", "--resolution", "999x1"]).unwrap();
        assert_eq!(cli.resolution.as_deref(), Some("999x1"));
        assert!(!cli.newonly);
        assert_eq!(cli.amount, None);
    }

    #[test]
    fn subcommand_does_not_need_dir() {
        let cli = Cli::try_parse_from(["liftwall", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { action: ConfigAction::Show })
        ));
    }
}
