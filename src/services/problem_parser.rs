//! 题目页面解析 - 业务能力层
//!
//! 只负责"从已渲染 HTML 中提取题目字段"能力，不关心抓取与落盘

use scraper::Html;

use crate::config::SelectorConfig;
use crate::error::AppResult;
use crate::models::ProblemRecord;
use crate::services::selector::{first_text, CompiledSelector};

/// 题目页面解析器
///
/// 职责：
/// - 按配置的选择器定位标题、题面、标签
/// - 标题与题面是必需字段，缺失即报错，不产生残缺记录
/// - 标签可为空，按页面出现顺序收集，重复保留
#[derive(Debug)]
pub struct ProblemParser {
    title: CompiledSelector,
    statement: CompiledSelector,
    tag: CompiledSelector,
}

impl ProblemParser {
    /// 创建解析器，编译配置中的选择器
    pub fn new(selectors: &SelectorConfig) -> AppResult<Self> {
        Ok(Self {
            title: CompiledSelector::compile("title", &selectors.title)?,
            statement: CompiledSelector::compile("statement", &selectors.statement)?,
            tag: CompiledSelector::compile("tag", &selectors.tag)?,
        })
    }

    /// 从已渲染 HTML 中提取题目记录
    pub fn parse(&self, html: &str) -> AppResult<ProblemRecord> {
        let doc = Html::parse_document(html);

        let title = first_text(&doc, &self.title).ok_or_else(|| self.title.missing())?;
        let statement =
            first_text(&doc, &self.statement).ok_or_else(|| self.statement.missing())?;

        let tags = doc
            .select(self.tag.selector())
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect();

        Ok(ProblemRecord {
            title,
            statement,
            tags,
        })
    }
}
