//! 批量抓取器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量题目的抓取调度。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：编译选择器、创建流程对象
//! 2. **顺序遍历**：一个接一个处理题目 ID，无并发
//! 3. **错误隔离**：单个题目的任何错误在这里被捕获并记录，
//!    不中断批处理，也不改变进程退出码
//! 4. **固定间隔**：两个题目之间等待配置的延迟
//! 5. **全局统计**：汇总成功 / 有题解 / 失败数量

use anyhow::Result;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

use crate::config::Config;
use crate::workflow::{ProblemCtx, ProblemFlow, ProcessResult};

/// 应用主结构
pub struct App {
    config: Config,
    flow: ProblemFlow,
}

impl App {
    /// 初始化应用
    ///
    /// 选择器配置错误在这里立即暴露，而不是批处理中途
    pub fn initialize(config: Config) -> Result<Self> {
        let flow = ProblemFlow::new(&config)?;
        Ok(Self { config, flow })
    }

    /// 运行批量抓取
    ///
    /// 总是返回 Ok：单题失败已在循环内消化，只体现在统计里
    pub async fn run(&self, problem_ids: &[&str]) -> Result<()> {
        log_startup(&self.config, problem_ids.len());

        let mut stats = RunStats {
            total: problem_ids.len(),
            ..Default::default()
        };

        for (index, problem_id) in problem_ids.iter().enumerate() {
            let ctx = ProblemCtx::new(*problem_id, index + 1);

            match self.flow.run(&ctx).await {
                Ok(ProcessResult::Complete) => {
                    stats.success += 1;
                    stats.editorials += 1;
                }
                Ok(ProcessResult::NoEditorial) => {
                    stats.success += 1;
                }
                Err(e) => {
                    error!("{} ❌ 抓取失败: {}", ctx, e);
                    stats.failed += 1;
                }
            }

            // 固定请求间隔
            if index + 1 < problem_ids.len() {
                sleep(Duration::from_secs(self.config.delay_secs)).await;
            }
        }

        print_final_stats(&stats);

        Ok(())
    }
}

/// 运行统计
#[derive(Debug, Default)]
struct RunStats {
    total: usize,
    success: usize,
    editorials: usize,
    failed: usize,
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config, total: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量题目抓取模式");
    info!("📋 待抓取题目: {} 个", total);
    info!("🌐 目标站点: {}", config.base_url);
    info!("📁 输出目录: {}", config.output_dir);
    info!("⏱️ 请求间隔: {} 秒", config.delay_secs);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &RunStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部抓取完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("📖 有题解: {}", stats.editorials);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
}
