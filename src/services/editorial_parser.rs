//! 题解页面解析 - 业务能力层
//!
//! 题解是可选章节：页面上没有对应容器是预期情况，
//! 返回 None 而不是错误（与必需字段缺失是两条独立的通道）

use scraper::Html;

use crate::config::SelectorConfig;
use crate::error::AppResult;
use crate::services::selector::{first_text, CompiledSelector};

/// 题解页面解析器
pub struct EditorialParser {
    editorial: CompiledSelector,
}

impl EditorialParser {
    /// 创建解析器，编译配置中的选择器
    pub fn new(selectors: &SelectorConfig) -> AppResult<Self> {
        Ok(Self {
            editorial: CompiledSelector::compile("editorial", &selectors.editorial)?,
        })
    }

    /// 提取题解内容，没有题解章节时返回 None
    pub fn parse(&self, html: &str) -> Option<String> {
        let doc = Html::parse_document(html);
        first_text(&doc, &self.editorial)
    }
}
