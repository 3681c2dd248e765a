//! 选择器编译
//!
//! 把配置中的选择器文本编译为 [`scraper::Selector`]。
//! 无效的选择器文本在构造解析器时立即暴露，而不是批处理中途。

use scraper::{Html, Selector};

use crate::error::{AppError, AppResult, ParseError};

/// 编译完成的选择器
///
/// 保留字段名和选择器原文，用于生成可读的错误信息
#[derive(Debug, Clone)]
pub(crate) struct CompiledSelector {
    field: &'static str,
    raw: String,
    selector: Selector,
}

impl CompiledSelector {
    pub(crate) fn compile(field: &'static str, raw: &str) -> AppResult<Self> {
        let selector = Selector::parse(raw).map_err(|_| {
            AppError::Parse(ParseError::SelectorInvalid {
                field,
                selector: raw.to_string(),
            })
        })?;

        Ok(Self {
            field,
            raw: raw.to_string(),
            selector,
        })
    }

    pub(crate) fn selector(&self) -> &Selector {
        &self.selector
    }

    /// 该字段在页面中缺失时对应的错误
    pub(crate) fn missing(&self) -> AppError {
        AppError::missing_field(self.field, self.raw.clone())
    }
}

/// 取第一个匹配元素的去空白文本，没有匹配则返回 None
pub(crate) fn first_text(doc: &Html, sel: &CompiledSelector) -> Option<String> {
    doc.select(sel.selector())
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
