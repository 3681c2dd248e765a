//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量调度，是整个系统的"指挥中心"：
//! 遍历题目 ID 列表、隔离单题错误、控制请求间隔、输出统计。
//!
//! ## 层次关系
//!
//! ```text
//! batch_runner (处理 &[problem_id])
//!     ↓
//! workflow::ProblemFlow (处理单个题目)
//!     ↓
//! services (能力层：parse / store)
//!     ↓
//! infrastructure (基础设施：PageFetcher)
//! ```
//!
//! ## 设计原则
//!
//! 1. **严格顺序**：同一时刻只有一个浏览器会话、一次抓取
//! 2. **错误隔离**：单个题目失败只记日志，批处理跑完整个列表
//! 3. **无业务逻辑**：只做调度和统计，不做具体抓取判断

pub mod batch_runner;

pub use batch_runner::App;
