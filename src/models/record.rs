use serde::{Deserialize, Serialize};

/// 题目记录
///
/// 由 ProblemParser 从一个已渲染页面构建，写盘后即丢弃。
/// 字段声明顺序即 JSON 输出顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub title: String,
    pub statement: String,

    /// 标签按页面出现顺序保存，重复项不去重
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 题解记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorialRecord {
    pub problem_id: String,
    pub content: String,
}
