// interfacelift.rs - InterfaceLIFT 网页抓取客户端模块
// 负责拼接列表页 URL、解析列表页 HTML 提取下载链接、流式下载壁纸文件

use super::{WallpaperLink, WallpaperSource};
use crate::error::{Error, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::path::Path;
use std::time::Duration;
use tokio::fs::File; // tokio 提供的异步文件操作
use tokio::io::AsyncWriteExt; // 异步写入 trait，提供 write_all() 等方法
use tracing::{debug, warn};
use url::Url;

/// 列表页相对于域名的固定路径（按日期排序的宽屏壁纸）
pub const LISTING_PATH: &str = "/wallpaper/downloads/date/widescreen";

/// 网站每个列表页展示 10 张壁纸
pub const ITEMS_PER_PAGE: usize = 10;

/// 下载容器的 CSS 选择器：id 以 download_ 开头的 div
const CONTAINER_SELECTOR: &str = r#"div[id^="download_"]"#;

/// 拼接列表页 URL：`<listing_root>/<resolution>/index<page>.html`
///
/// 不校验分辨率，非法分辨率只会让该页抓不到任何链接
pub fn listing_url(listing_root: &str, resolution: &str, page: usize) -> String {
    format!("{listing_root}/{resolution}/index{page}.html")
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector(format!("{css}: {e:?}")))
}

/// 从列表页 HTML 中按文档顺序提取下载链接
///
/// 每个下载容器取其中第一个 `<a>` 的 href。
/// 页面没有任何容器时返回空列表；容器缺少链接则视为页面结构错误。
pub fn parse_listing(html: &str, page_url: &str) -> Result<Vec<WallpaperLink>> {
    let containers = selector(CONTAINER_SELECTOR)?;
    let anchor = selector("a")?;

    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for container in document.select(&containers) {
        let id = container.value().id().unwrap_or_default();

        let first_anchor = container.select(&anchor).next().ok_or_else(|| Error::Markup {
            url: page_url.to_string(),
            message: format!("container {id} has no anchor"),
        })?;

        let href = first_anchor.value().attr("href").ok_or_else(|| Error::Markup {
            url: page_url.to_string(),
            message: format!("anchor in container {id} has no href"),
        })?;

        links.push(WallpaperLink::new(href));
    }

    Ok(links)
}

/// InterfaceLIFT 异步客户端
///
/// 列表页和壁纸文件共用同一个 reqwest::Client（内部有连接池，应复用）
pub struct InterfaceLiftClient {
    /// HTTP 客户端
    client: reqwest::Client,

    /// 站点根地址，相对下载链接基于它拼接
    base_url: Url,

    /// 列表页根地址 = 域名 + LISTING_PATH
    listing_root: String,
}

impl InterfaceLiftClient {
    /// 创建新的客户端
    ///
    /// # 参数
    /// - `domain`: 站点域名，如 `https://interfacelift.com`
    /// - `timeout`: 单次请求超时，`None` 表示一直等待
    pub fn new(domain: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let domain = domain.trim_end_matches('/');

        Ok(Self {
            client: builder.build()?,
            base_url: Url::parse(domain)?,
            listing_root: format!("{domain}{LISTING_PATH}"),
        })
    }

    /// 将列表页中的相对链接转为绝对下载地址（已是绝对地址则原样保留）
    pub fn resolve(&self, link: &WallpaperLink) -> Result<Url> {
        Ok(self.base_url.join(&link.href)?)
    }
}

#[async_trait]
impl WallpaperSource for InterfaceLiftClient {
    fn page_size(&self) -> usize {
        ITEMS_PER_PAGE
    }

    async fn listing(&self, resolution: &str, page: usize) -> Result<Vec<WallpaperLink>> {
        let url = listing_url(&self.listing_root, resolution, page);
        debug!(%url, "fetching listing page");

        let response = self.client.get(&url).send().await?;

        // 列表页不检查状态码：错误页面里没有下载容器，结果就是 0 条链接
        if !response.status().is_success() {
            warn!(%url, status = %response.status(), "listing page returned non-success status");
        }

        let body = response.text().await?;
        let links = parse_listing(&body, &url)?;

        debug!(page, count = links.len(), "scraped listing page");
        Ok(links)
    }

    async fn download(&self, link: &WallpaperLink, dest: &Path) -> Result<()> {
        let url = self.resolve(link)?;
        debug!(%url, dest = %dest.display(), "downloading wallpaper");

        // 先创建（或覆盖）目标文件，再发起请求；失败时可能留下不完整的文件
        let mut file = File::create(dest).await?;

        let mut response = self.client.get(url).send().await?.error_for_status()?;

        // 按块写入，chunk() 返回 None 表示响应体已读完
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(())
    }
}
