//! # CF Scraper
//!
//! 一个用于抓取竞赛题目和题解的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（浏览器会话），只暴露能力
//! - `PageFetcher` - 唯一的浏览器 owner，提供 fetch() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个页面/记录
//! - `ProblemParser` - 题目页面解析能力（标题、题面、标签）
//! - `EditorialParser` - 题解页面解析能力（可选章节）
//! - `Storage` - 写 txt / json 文件能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整抓取流程
//! - `ProblemCtx` - 上下文封装（problem_id + index）
//! - `ProblemFlow` - 流程编排（fetch → parse → save → editorial）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_runner` - 批量抓取器，遍历题目 ID 列表，
//!   隔离单题错误并输出统计
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::launch_headless_browser;
pub use config::{Config, FetchBackend, SelectorConfig};
pub use error::{AppError, AppResult};
pub use infrastructure::PageFetcher;
pub use models::{EditorialRecord, ProblemRecord};
pub use orchestrator::App;
pub use services::{EditorialParser, ProblemParser, Storage};
pub use workflow::{ProblemCtx, ProblemFlow, ProcessResult};
