use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 页面抓取错误
    Fetch(FetchError),
    /// 页面解析错误
    Parse(ParseError),
    /// 文件操作错误
    File(FileError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Fetch(e) => write!(f, "抓取错误: {}", e),
            AppError::Parse(e) => write!(f, "解析错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Fetch(e) => Some(e),
            AppError::Parse(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 页面抓取错误
///
/// 单次抓取内不重试，任何一种失败都直接向上传播
#[derive(Debug)]
pub enum FetchError {
    /// 浏览器配置失败
    ConfigurationFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 浏览器启动失败
    LaunchFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 导航失败
    NavigationFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 获取渲染内容失败
    CaptureFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 纯 HTTP 请求失败
    RequestFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::ConfigurationFailed { source } => {
                write!(f, "浏览器配置失败: {}", source)
            }
            FetchError::LaunchFailed { source } => {
                write!(f, "浏览器启动失败: {}", source)
            }
            FetchError::NavigationFailed { url, source } => {
                write!(f, "导航到 {} 失败: {}", url, source)
            }
            FetchError::CaptureFailed { source } => {
                write!(f, "获取页面内容失败: {}", source)
            }
            FetchError::RequestFailed { url, source } => {
                write!(f, "HTTP 请求 {} 失败: {}", url, source)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::ConfigurationFailed { source }
            | FetchError::LaunchFailed { source }
            | FetchError::NavigationFailed { source, .. }
            | FetchError::CaptureFailed { source }
            | FetchError::RequestFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 页面解析错误
///
/// 只覆盖必需字段：可选章节（题解）的缺失不是错误
#[derive(Debug)]
pub enum ParseError {
    /// 必需字段在页面中不存在
    MissingField {
        field: &'static str,
        selector: String,
    },
    /// 选择器本身无法解析（配置问题）
    SelectorInvalid {
        field: &'static str,
        selector: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingField { field, selector } => {
                write!(f, "页面中找不到必需字段 {} (选择器: {})", field, selector)
            }
            ParseError::SelectorInvalid { field, selector } => {
                write!(f, "字段 {} 的选择器无效: {}", field, selector)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 创建输出目录失败
    DirCreateFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// JSON 序列化失败
    JsonEncodeFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::DirCreateFailed { path, source } => {
                write!(f, "创建目录失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::JsonEncodeFailed { source } => {
                write!(f, "JSON序列化失败: {}", source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::DirCreateFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::JsonEncodeFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::File(FileError::JsonEncodeFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建导航失败错误
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Fetch(FetchError::NavigationFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 创建 HTTP 请求失败错误
    pub fn request_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Fetch(FetchError::RequestFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 创建必需字段缺失错误
    pub fn missing_field(field: &'static str, selector: impl Into<String>) -> Self {
        AppError::Parse(ParseError::MissingField {
            field,
            selector: selector.into(),
        })
    }

    /// 创建文件写入失败错误
    pub fn write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
