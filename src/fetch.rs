// fetch.rs - 下载流程编排
// 按页顺序抓取列表页、按页内顺序处理链接，达到目标数量后立即结束

use crate::error::{Error, Result};
use crate::source::WallpaperSource;
use colored::Colorize;
use rust_i18n::t;
use std::path::PathBuf;
use tracing::debug;

/// 一次下载运行的参数，运行期间不变
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// 目标下载数量
    pub amount: usize,
    /// 保存目录（需事先存在）
    pub dir: PathBuf,
    /// 分辨率，原样拼进列表页 URL
    pub resolution: String,
    /// 为 true 时跳过目录中已存在的文件
    pub new_only: bool,
}

/// 运行结束后的统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub pages_visited: usize,
}

/// 需要访问的列表页数量：`ceil(amount / page_size)`
pub fn page_count(amount: usize, page_size: usize) -> usize {
    amount.div_ceil(page_size)
}

/// 执行下载
///
/// 已存在而被跳过的文件不计入下载数量。下载数量达到目标后，
/// 即使当前页还有链接也立即结束，后续列表页不再请求。
/// 所有页都处理完仍不足目标数量时正常返回。
pub async fn run<S>(source: &S, request: &DownloadRequest) -> Result<FetchSummary>
where
    S: WallpaperSource + ?Sized,
{
    let mut summary = FetchSummary::default();
    let pages = page_count(request.amount, source.page_size());
    debug!(pages, amount = request.amount, "starting fetch");

    'pages: for page in 1..=pages {
        let links = source.listing(&request.resolution, page).await?;
        summary.pages_visited += 1;

        for link in &links {
            let file_name = link.file_name().ok_or_else(|| Error::Markup {
                url: link.href.clone(),
                message: "download link has no file name".to_string(),
            })?;
            let dest = request.dir.join(file_name);

            if request.new_only && dest.is_file() {
                let shown = dest.display().to_string();
                println!("{}", t!("skip_existing", path => shown.green()));
                summary.skipped += 1;
                continue;
            }

            if summary.downloaded == request.amount {
                break 'pages;
            }

            println!("{}", t!("downloading", file => file_name.green()));
            source.download(link, &dest).await?;
            summary.downloaded += 1;
        }
    }

    Ok(summary)
}
