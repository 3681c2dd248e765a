//! 页面抓取器 - 基础设施层
//!
//! 持有唯一的浏览器资源，只暴露"抓取一个已渲染页面"的能力

use std::path::PathBuf;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::browser::headless::{close_browser, launch_headless_browser};
use crate::config::{Config, FetchBackend};
use crate::error::{AppError, AppResult, FetchError};

/// 页面抓取器
///
/// 职责：
/// - 给定 URL，返回渲染完成的 HTML 内容
/// - 每次抓取独占一个浏览器会话，结束后在所有路径上释放
/// - 不认识 Problem / Editorial
/// - 不处理业务流程
pub struct PageFetcher {
    backend: FetchBackend,
    /// 渲染等待时间
    settle_delay: Duration,
    browser_path: Option<PathBuf>,
    http_client: reqwest::Client,
}

impl PageFetcher {
    /// 从配置创建抓取器
    pub fn new(config: &Config) -> Self {
        Self {
            backend: config.fetch_backend,
            settle_delay: Duration::from_secs(config.delay_secs),
            browser_path: config.browser_path.as_ref().map(PathBuf::from),
            http_client: reqwest::Client::new(),
        }
    }

    /// 抓取一个页面，返回 HTML 内容
    pub async fn fetch(&self, url: &str) -> AppResult<String> {
        match self.backend {
            FetchBackend::Headless => self.fetch_rendered(url).await,
            FetchBackend::Plain => self.fetch_plain(url).await,
        }
    }

    /// 无头浏览器抓取：启动 → 导航 → 等待渲染 → 取内容 → 关闭
    async fn fetch_rendered(&self, url: &str) -> AppResult<String> {
        let (mut browser, page) =
            launch_headless_browser(url, self.browser_path.as_deref()).await?;

        // 等待页面脚本渲染完成（固定等待，不探测 DOM 状态）
        debug!("等待渲染: {:?}", self.settle_delay);
        sleep(self.settle_delay).await;

        // 无论取内容成功与否，都先关闭浏览器再返回
        let content = page.content().await.map_err(|e| {
            AppError::Fetch(FetchError::CaptureFailed {
                source: Box::new(e),
            })
        });
        close_browser(&mut browser).await;

        let html = content?;
        info!("✓ 页面抓取完成: {} ({} 字节)", url, html.len());
        Ok(html)
    }

    /// 纯 HTTP 抓取：不渲染页面脚本，也不需要等待
    async fn fetch_plain(&self, url: &str) -> AppResult<String> {
        debug!("HTTP 请求: {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| AppError::request_failed(url, e))?;

        let html = response
            .text()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        info!("✓ 页面抓取完成: {} ({} 字节)", url, html.len());
        Ok(html)
    }
}
