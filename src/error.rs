// error.rs - 错误类型定义
// 网络、HTML 结构、文件系统三类错误都在这里汇总，统一向上传播

use thiserror::Error;

/// 本程序统一使用的 Result 别名
pub type Result<T> = std::result::Result<T, Error>;

/// 下载流程中可能出现的错误
///
/// 所有错误都不做重试，直接传播到 main 终止本次运行
#[derive(Debug, Error)]
pub enum Error {
    /// 网络请求失败（连接、DNS、下载返回非 2xx 状态码等）
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 文件读写失败（权限不足、目录不存在、磁盘已满等）
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 下载链接无法拼接成合法 URL
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// 列表页的 HTML 结构与预期不符
    #[error("unexpected markup in {url}: {message}")]
    Markup { url: String, message: String },

    /// CSS 选择器解析失败
    #[error("invalid selector: {0}")]
    Selector(String),

    /// 配置项取值非法
    #[error("configuration error: {0}")]
    Config(String),
}
