// source/mod.rs - 壁纸源模块入口
// 定义了壁纸站客户端必须实现的通用 Trait，下载流程只依赖这个 Trait

pub mod interfacelift;

use crate::error::Result;
use async_trait::async_trait; // 异步 Trait 支持宏
use std::path::Path;

/// 列表页中抓取到的一条下载链接
///
/// `href` 保持页面中的原样（通常是站内相对路径）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperLink {
    pub href: String,
}

impl WallpaperLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// 链接最后一段路径作为本地文件名，末尾为 `/` 时返回 None
    pub fn file_name(&self) -> Option<&str> {
        self.href.rsplit('/').next().filter(|name| !name.is_empty())
    }
}

/// 壁纸源的抽象 Trait
///
/// # 异步 Trait 说明
/// 这里使用 `async_trait` 宏来支持异步接口。
/// `Send + Sync` 约束让实现可以在 tokio 运行时中以引用方式传递。
#[async_trait]
pub trait WallpaperSource: Send + Sync {
    /// 每个列表页包含的壁纸数量
    fn page_size(&self) -> usize;

    /// 抓取指定分辨率的第 `page` 页（从 1 开始），按页面顺序返回下载链接
    async fn listing(&self, resolution: &str, page: usize) -> Result<Vec<WallpaperLink>>;

    /// 将链接对应的文件写入 `dest`
    async fn download(&self, link: &WallpaperLink, dest: &Path) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_last_path_segment() {
        let link = WallpaperLink::new("/wallpaper/7yz4ma1/04155_rainbowcanyon_3360x2100.jpg");
        assert_eq!(link.file_name(), Some("04155_rainbowcanyon_3360x2100.jpg"));

        assert_eq!(WallpaperLink::new("plain.jpg").file_name(), Some("plain.jpg"));
        assert_eq!(WallpaperLink::new("/wallpaper/dir/").file_name(), None);
    }
}
