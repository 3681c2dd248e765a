use anyhow::Result;
use cf_scraper::config::Config;
use cf_scraper::orchestrator::App;
use cf_scraper::utils::logging;

/// 待抓取的题目 ID 列表
const PROBLEM_IDS: &[&str] = &["1/A", "1/B", "2/A"];

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置（scraper.toml 可选，环境变量覆盖）
    let config = Config::load("scraper.toml").await?;

    // 初始化并运行应用
    App::initialize(config)?.run(PROBLEM_IDS).await?;

    Ok(())
}
