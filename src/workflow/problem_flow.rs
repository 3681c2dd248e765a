//! 题目抓取流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整抓取流程
//!
//! 流程顺序：
//! 1. 题目页面：fetch → parse → save
//! 2. 题解页面：fetch → parse → save（没有题解则记录提示）

use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::PageFetcher;
use crate::models::EditorialRecord;
use crate::services::{EditorialParser, ProblemParser, Storage};
use crate::utils::logging::truncate_text;
use crate::workflow::problem_ctx::ProblemCtx;

/// 单个题目的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 题目与题解均已保存
    Complete,
    /// 题目已保存，页面上没有已发布的题解
    NoEditorial,
}

/// 题目抓取流程
///
/// - 编排单个题目的完整抓取流程
/// - 决定何时抓取、何时解析、何时落盘
/// - 不持有浏览器资源（由 PageFetcher 管理）
pub struct ProblemFlow {
    fetcher: PageFetcher,
    problem_parser: ProblemParser,
    editorial_parser: EditorialParser,
    storage: Storage,
    base_url: String,
}

impl ProblemFlow {
    /// 创建新的抓取流程
    ///
    /// 配置中的选择器在这里编译，无效选择器立即报错
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(config),
            problem_parser: ProblemParser::new(&config.selectors)?,
            editorial_parser: EditorialParser::new(&config.selectors)?,
            storage: Storage::new(&config.output_dir),
            base_url: config.base_url.clone(),
        })
    }

    /// 抓取一个题目：先题目页面，再题解页面
    pub async fn run(&self, ctx: &ProblemCtx) -> AppResult<ProcessResult> {
        self.scrape_problem(ctx).await?;

        if self.scrape_editorial(ctx).await? {
            Ok(ProcessResult::Complete)
        } else {
            Ok(ProcessResult::NoEditorial)
        }
    }

    /// 抓取题目页面并落盘
    async fn scrape_problem(&self, ctx: &ProblemCtx) -> AppResult<()> {
        let url = format!("{}{}", self.base_url, ctx.problem_id);
        info!("{} 🔍 抓取题目页面: {}", ctx, url);

        let html = self.fetcher.fetch(&url).await?;
        let record = self.problem_parser.parse(&html)?;

        debug!("{} 题面预览: {}", ctx, truncate_text(&record.statement, 80));

        let (text_path, json_path) = self.storage.save_problem(&record).await?;
        info!(
            "{} ✓ 已保存题目: {} ({} 个标签)",
            ctx,
            record.title,
            record.tags.len()
        );
        debug!(
            "{} 落盘: {} / {}",
            ctx,
            text_path.display(),
            json_path.display()
        );

        Ok(())
    }

    /// 抓取题解页面，返回是否找到题解
    async fn scrape_editorial(&self, ctx: &ProblemCtx) -> AppResult<bool> {
        let url = format!("{}{}/tutorial", self.base_url, ctx.problem_id);
        info!("{} 🔍 抓取题解页面: {}", ctx, url);

        let html = self.fetcher.fetch(&url).await?;

        match self.editorial_parser.parse(&html) {
            Some(content) => {
                let record = EditorialRecord {
                    problem_id: ctx.problem_id.clone(),
                    content,
                };
                let path = self.storage.save_editorial(&record).await?;
                info!("{} ✓ 已保存题解: {}", ctx, path.display());
                Ok(true)
            }
            None => {
                info!("{} 没有找到已发布的题解，跳过", ctx);
                Ok(false)
            }
        }
    }
}
