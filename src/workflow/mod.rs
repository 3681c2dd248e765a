//! 流程层（Workflow Layer）
//!
//! 定义"一道题"的完整抓取流程：
//! - `ProblemCtx` - 上下文封装（problem_id + 序号）
//! - `ProblemFlow` - 流程编排（题目页 → 题解页）

pub mod problem_ctx;
pub mod problem_flow;

pub use problem_ctx::ProblemCtx;
pub use problem_flow::{ProblemFlow, ProcessResult};
