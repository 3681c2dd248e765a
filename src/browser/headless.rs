use std::path::Path;

use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::error::{AppError, AppResult, FetchError};

/// 启动无头浏览器并导航到指定 URL
///
/// `browser_path` 为 None 时由 chromiumoxide 自动探测本机浏览器。
/// 导航失败时浏览器进程在返回前被关闭；成功时由调用方负责
/// 在用完后调用 [`close_browser`]。
pub async fn launch_headless_browser(
    url: &str,
    browser_path: Option<&Path>,
) -> AppResult<(Browser, Page)> {
    info!("🚀 启动无头浏览器...");
    debug!("目标 URL: {}", url);

    // 配置无头浏览器
    let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
        "--disable-gpu",             // 无头模式必须禁用 GPU
        "--no-sandbox",              // 禁用沙盒，防止权限问题导致的崩溃
        "--disable-dev-shm-usage",   // 防止共享内存不足
        "--remote-debugging-port=0", // 让浏览器自动选择端口
    ]);

    if let Some(path) = browser_path {
        debug!("使用指定的浏览器: {}", path.display());
        builder = builder.chrome_executable(path);
    }

    let config = builder.build().map_err(|e| {
        error!("配置无头浏览器失败: {}", e);
        AppError::Fetch(FetchError::ConfigurationFailed { source: e.into() })
    })?;

    // 启动浏览器
    let (mut browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        AppError::Fetch(FetchError::LaunchFailed {
            source: Box::new(e),
        })
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    // 创建新页面并导航
    let page = match browser.new_page(url).await {
        Ok(page) => page,
        Err(e) => {
            error!("导航到 {} 失败: {}", url, e);
            close_browser(&mut browser).await;
            return Err(AppError::navigation_failed(url, e));
        }
    };

    info!("✅ 无头浏览器已导航到: {}", url);
    debug!("页面导航成功");

    Ok((browser, page))
}

/// 关闭浏览器并等待进程退出
///
/// 关闭失败只记录日志，不影响已产生的抓取结果
pub async fn close_browser(browser: &mut Browser) {
    if let Err(e) = browser.close().await {
        warn!("关闭浏览器失败: {}", e);
    }
    if let Err(e) = browser.wait().await {
        warn!("等待浏览器退出失败: {}", e);
    }
    debug!("浏览器进程已退出");
}
