//! 落盘服务 - 业务能力层
//!
//! 只负责"把记录写进输出目录"能力，不关心抓取与解析

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;
use tracing::debug;

use crate::error::{AppError, AppResult, FileError};
use crate::models::{EditorialRecord, ProblemRecord};

/// 落盘服务
///
/// 职责：
/// - 确保输出目录存在（幂等创建）
/// - 标题 → 文件名的转换
/// - 写 txt / json 文件，同名文件直接覆盖
pub struct Storage {
    output_dir: PathBuf,
}

impl Storage {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 保存题目
    ///
    /// `{slug}.txt` 写题面原文，`{slug}.json` 写完整记录
    /// （4 空格缩进，字段顺序 title → statement → tags）
    pub async fn save_problem(&self, record: &ProblemRecord) -> AppResult<(PathBuf, PathBuf)> {
        self.ensure_output_dir().await?;

        let slug = slugify(&record.title);
        let text_path = self.output_dir.join(format!("{}.txt", slug));
        let json_path = self.output_dir.join(format!("{}.json", slug));

        write_file(&text_path, record.statement.as_bytes()).await?;

        let json = to_json_pretty(record)?;
        write_file(&json_path, json.as_bytes()).await?;

        debug!(
            "已写入: {} / {}",
            text_path.display(),
            json_path.display()
        );

        Ok((text_path, json_path))
    }

    /// 保存题解到 `editorial_{id}.txt`
    ///
    /// 题目 ID（如 "1/A"）经过与标题相同的转换，避免落进子目录
    pub async fn save_editorial(&self, record: &EditorialRecord) -> AppResult<PathBuf> {
        self.ensure_output_dir().await?;

        let path = self
            .output_dir
            .join(format!("editorial_{}.txt", slugify(&record.problem_id)));

        write_file(&path, record.content.as_bytes()).await?;

        debug!("已写入: {}", path.display());
        Ok(path)
    }

    async fn ensure_output_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            AppError::File(FileError::DirCreateFailed {
                path: self.output_dir.display().to_string(),
                source: Box::new(e),
            })
        })
    }
}

/// 标题 → 文件名：空格和路径分隔符替换为下划线
///
/// 其余字符原样保留，近似标题会互相覆盖
pub fn slugify(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}

async fn write_file(path: &Path, bytes: &[u8]) -> AppResult<()> {
    fs::write(path, bytes)
        .await
        .map_err(|e| AppError::write_failed(path.display().to_string(), e))
}

/// 4 空格缩进的 JSON 序列化
fn to_json_pretty<T: Serialize>(value: &T) -> AppResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| {
        AppError::File(FileError::JsonEncodeFailed {
            source: Box::new(e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cf_scraper_storage_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_slugify_replaces_spaces_and_separators() {
        assert_eq!(slugify("Theatre Square"), "Theatre_Square");
        assert_eq!(slugify("A. Theatre Square"), "A._Theatre_Square");
        assert_eq!(slugify("1/A"), "1_A");
        assert_eq!(slugify(r"a\b c"), "a_b_c");
        // 其余特殊字符原样保留
        assert_eq!(slugify("A+B (Trial)"), "A+B_(Trial)");
    }

    #[test]
    fn test_slugify_deterministic() {
        assert_eq!(slugify("Theatre Square"), slugify("Theatre Square"));
    }

    #[test]
    fn test_json_four_space_indent_and_field_order() {
        let record = ProblemRecord {
            title: "T".to_string(),
            statement: "s".to_string(),
            tags: vec!["math".to_string()],
        };

        let json = to_json_pretty(&record).unwrap();
        assert!(json.contains("\n    \"title\": \"T\""));

        let title_pos = json.find("\"title\"").unwrap();
        let statement_pos = json.find("\"statement\"").unwrap();
        let tags_pos = json.find("\"tags\"").unwrap();
        assert!(title_pos < statement_pos && statement_pos < tags_pos);
    }

    #[test]
    fn test_save_problem_round_trip() {
        let dir = test_dir("round_trip");
        let storage = Storage::new(&dir);
        let record = ProblemRecord {
            title: "A. Theatre Square".to_string(),
            statement: "n tiles...".to_string(),
            tags: vec!["math".to_string(), "implementation".to_string()],
        };

        let (text_path, json_path) =
            tokio_test::block_on(storage.save_problem(&record)).unwrap();

        assert_eq!(text_path.file_name().unwrap(), "A._Theatre_Square.txt");
        assert_eq!(json_path.file_name().unwrap(), "A._Theatre_Square.json");

        let text = std::fs::read_to_string(&text_path).unwrap();
        assert_eq!(text, "n tiles...");

        let loaded: ProblemRecord =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(loaded, record);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_problem_overwrites_same_slug() {
        let dir = test_dir("overwrite");
        let storage = Storage::new(&dir);

        let first = ProblemRecord {
            title: "A. Same".to_string(),
            statement: "old".to_string(),
            tags: vec![],
        };
        let second = ProblemRecord {
            title: "A. Same".to_string(),
            statement: "new".to_string(),
            tags: vec![],
        };

        tokio_test::block_on(storage.save_problem(&first)).unwrap();
        let (text_path, _) = tokio_test::block_on(storage.save_problem(&second)).unwrap();

        assert_eq!(std::fs::read_to_string(&text_path).unwrap(), "new");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_editorial_slugs_problem_id() {
        let dir = test_dir("editorial");
        let storage = Storage::new(&dir);
        let record = EditorialRecord {
            problem_id: "1/A".to_string(),
            content: "用贪心即可".to_string(),
        };

        let path = tokio_test::block_on(storage.save_editorial(&record)).unwrap();

        assert_eq!(path.file_name().unwrap(), "editorial_1_A.txt");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "用贪心即可");

        std::fs::remove_dir_all(&dir).ok();
    }
}
