use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::fs;

/// 页面抓取后端
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchBackend {
    /// 无头浏览器：执行页面脚本、等待渲染后再取内容
    Headless,
    /// 纯 HTTP 请求：不渲染页面脚本
    Plain,
}

/// CSS 选择器配置
///
/// 逻辑字段 → 页面结构定位的映射，页面改版时只需要改这里。
/// title / statement 是必需字段，tag 可为空，editorial 是可选章节
/// （必需与可选的区分由对应的解析器决定）。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// 题目标题
    pub title: String,
    /// 题面正文
    pub statement: String,
    /// 标签
    pub tag: String,
    /// 题解正文
    pub editorial: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: "div.title".to_string(),
            statement: "div.problem-statement".to_string(),
            tag: "span.tag-box".to_string(),
            editorial: "div.editorial-content".to_string(),
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题目页面 URL 前缀
    pub base_url: String,
    /// 输出目录
    pub output_dir: String,
    /// 请求间隔 / 渲染等待时间（秒）
    pub delay_secs: u64,
    /// 浏览器可执行文件路径（None 表示自动探测）
    pub browser_path: Option<String>,
    /// 抓取后端
    pub fetch_backend: FetchBackend,
    /// 页面选择器
    pub selectors: SelectorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://codeforces.com/problemset/problem/".to_string(),
            output_dir: "./data".to_string(),
            delay_secs: 2,
            browser_path: None,
            fetch_backend: FetchBackend::Headless,
            selectors: SelectorConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 加载配置
    ///
    /// 优先读取 TOML 配置文件（不存在则使用默认值），再用环境变量覆盖
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let base = if path.exists() {
            let content = fs::read_to_string(path)
                .await
                .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("无法解析配置文件: {}", path.display()))?
        } else {
            Self::default()
        };

        Ok(base.with_env_overrides())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            base_url: std::env::var("BASE_URL").unwrap_or(self.base_url),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(self.output_dir),
            delay_secs: std::env::var("REQUEST_DELAY_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.delay_secs),
            browser_path: std::env::var("BROWSER_PATH").ok().or(self.browser_path),
            fetch_backend: std::env::var("FETCH_BACKEND").ok().and_then(|v| parse_backend(&v)).unwrap_or(self.fetch_backend),
            selectors: SelectorConfig {
                title: std::env::var("SELECTOR_TITLE").unwrap_or(self.selectors.title),
                statement: std::env::var("SELECTOR_STATEMENT").unwrap_or(self.selectors.statement),
                tag: std::env::var("SELECTOR_TAG").unwrap_or(self.selectors.tag),
                editorial: std::env::var("SELECTOR_EDITORIAL").unwrap_or(self.selectors.editorial),
            },
        }
    }
}

fn parse_backend(value: &str) -> Option<FetchBackend> {
    match value.to_ascii_lowercase().as_str() {
        "headless" => Some(FetchBackend::Headless),
        "plain" => Some(FetchBackend::Plain),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.base_url, "https://codeforces.com/problemset/problem/");
        assert_eq!(config.output_dir, "./data");
        assert_eq!(config.delay_secs, 2);
        assert_eq!(config.fetch_backend, FetchBackend::Headless);
        assert_eq!(config.selectors.title, "div.title");
        assert_eq!(config.selectors.editorial, "div.editorial-content");
    }

    #[test]
    fn test_parse_toml_partial() {
        // 配置文件只需要写想覆盖的字段
        let config: Config = toml::from_str(
            r#"
            base_url = "https://example.com/p/"
            delay_secs = 5

            [selectors]
            title = "h1.name"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://example.com/p/");
        assert_eq!(config.delay_secs, 5);
        assert_eq!(config.selectors.title, "h1.name");
        // 未写的字段落回默认值
        assert_eq!(config.selectors.statement, "div.problem-statement");
        assert_eq!(config.output_dir, "./data");
    }

    #[test]
    fn test_parse_backend() {
        assert_eq!(parse_backend("headless"), Some(FetchBackend::Headless));
        assert_eq!(parse_backend("Plain"), Some(FetchBackend::Plain));
        assert_eq!(parse_backend("webdriver"), None);
    }
}
