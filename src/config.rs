// config.rs - 配置管理模块
// 遵循 Unix 风格：优先从 ~/.config/liftwall/config.toml 读取配置
// 配置只在启动时加载一次，运行期间不再变化

use crate::error::{Error, Result};
use schemars::JsonSchema; // 引入用于生成 JSON Schema 的 trait
use serde::{Deserialize, Serialize}; // 引入序列化与反序列化 trait
use shellexpand::tilde; // 用于展开 ~ 和环境变量
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 壁纸站点域名
pub const DEFAULT_DOMAIN: &str = "https://interfacelift.com";
/// 默认下载数量
pub const DEFAULT_AMOUNT: usize = 20;
/// 默认分辨率
pub const DEFAULT_RESOLUTION: &str = "3360x2100";

/// 展开路径中的 ~ 和环境变量 ($HOME 等)
pub fn expand_path(path_str: &str) -> PathBuf {
    PathBuf::from(tilde(path_str).into_owned())
}

/// 映射 config.toml 文件内容的嵌套结构体
#[derive(Debug, Deserialize, Serialize, Default, JsonSchema)]
struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    defaults: FetchDefaults,
}

#[derive(Debug, Deserialize, Serialize, Default, JsonSchema)]
struct SiteConfig {
    /// 站点域名，列表页和下载链接都基于它拼接（默认 https://interfacelift.com）
    domain: Option<String>,
    /// 单次请求超时秒数，不配置则不设超时
    timeout_secs: Option<u64>,
}

/// 命令行未指定时使用的默认下载参数
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct FetchDefaults {
    /// 默认下载数量
    #[serde(default = "default_amount")]
    pub amount: usize,
    /// 默认分辨率
    #[serde(default = "default_resolution")]
    pub resolution: String,
}

impl Default for FetchDefaults {
    fn default() -> Self {
        Self {
            amount: default_amount(),
            resolution: default_resolution(),
        }
    }
}

fn default_amount() -> usize {
    DEFAULT_AMOUNT
}
fn default_resolution() -> String {
    DEFAULT_RESOLUTION.to_string()
}

/// 应用全局配置项
#[derive(Debug)]
pub struct AppConfig {
    /// 站点域名 (优先级：ENV > TOML > 默认值)
    pub domain: String,
    /// 请求超时秒数
    pub timeout_secs: Option<u64>,
    /// 默认下载参数
    pub defaults: FetchDefaults,
    /// 配置文件所在路径
    pub config_path: PathBuf,
}

impl AppConfig {
    /// 初始化配置
    ///
    /// 配置文件路径可由 LIFTWALL_CONFIG 覆盖，域名可由 LIFTWALL_DOMAIN 覆盖
    pub fn new() -> Self {
        let config_path = env::var("LIFTWALL_CONFIG")
            .map(|p| expand_path(&p))
            .unwrap_or_else(|_| expand_path("~/.config/liftwall/config.toml"));

        Self::from_path(config_path, env::var("LIFTWALL_DOMAIN").ok())
    }

    /// 从指定路径加载配置，文件缺失或无法解析时使用默认值
    pub fn from_path(config_path: PathBuf, domain_override: Option<String>) -> Self {
        let config_file = Self::load_config_from_file(&config_path).unwrap_or_default();

        let domain = domain_override
            .or(config_file.site.domain)
            .unwrap_or_else(|| DEFAULT_DOMAIN.to_string());

        Self {
            domain,
            timeout_secs: config_file.site.timeout_secs,
            defaults: config_file.defaults,
            config_path,
        }
    }

    /// 辅助函数：解析 TOML 配置文件
    fn load_config_from_file(path: &Path) -> Option<ConfigFile> {
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config file");
                None
            }
        }
    }

    fn to_file(&self) -> ConfigFile {
        ConfigFile {
            site: SiteConfig {
                domain: Some(self.domain.clone()),
                timeout_secs: self.timeout_secs,
            },
            defaults: self.defaults.clone(),
        }
    }

    /// 修改单个配置项 (支持: domain, amount, resolution, timeout)
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "domain" => self.domain = value.trim_end_matches('/').to_string(),
            "amount" => {
                self.defaults.amount = value
                    .parse()
                    .map_err(|_| Error::Config(format!("amount must be a non-negative integer, got {value:?}")))?;
            }
            "res" | "resolution" => self.defaults.resolution = value.to_string(),
            "timeout" | "timeout_secs" => {
                // 0 表示取消超时
                let secs: u64 = value
                    .parse()
                    .map_err(|_| Error::Config(format!("timeout must be a number of seconds, got {value:?}")))?;
                self.timeout_secs = (secs > 0).then_some(secs);
            }
            _ => return Err(Error::Config(format!("unknown key: {key}"))),
        }
        Ok(())
    }

    /// 将配置保存回文件
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.config_path, self.to_toml()?)?;
        Ok(())
    }

    /// 获取配置文件的 JSON Schema
    pub fn get_schema() -> Result<String> {
        let schema = schemars::schema_for!(ConfigFile);
        serde_json::to_string_pretty(&schema).map_err(|e| Error::Config(e.to_string()))
    }

    /// 将当前配置转换为 TOML 字符串
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(&self.to_file()).map_err(|e| Error::Config(e.to_string()))
    }
}
