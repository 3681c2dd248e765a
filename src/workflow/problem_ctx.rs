//! 题目抓取上下文
//!
//! 封装"我正在抓取列表中第几个、哪个题目"这一信息

use std::fmt::Display;

/// 题目抓取上下文
#[derive(Debug, Clone)]
pub struct ProblemCtx {
    /// 题目 ID（如 "1/A"）
    pub problem_id: String,

    /// 在本次批量中的序号（仅用于日志显示，从 1 开始）
    pub index: usize,
}

impl ProblemCtx {
    /// 创建新的题目上下文
    pub fn new(problem_id: impl Into<String>, index: usize) -> Self {
        Self {
            problem_id: problem_id.into(),
            index,
        }
    }
}

impl Display for ProblemCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[题目 #{} {}]", self.index, self.problem_id)
    }
}
