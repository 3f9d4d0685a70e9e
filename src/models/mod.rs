//! # 数据模型模块
//!
//! 定义批处理的文件任务和汇总报告数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: task, report

pub mod report;
pub mod task;

pub use report::{BatchReport, FileOutcome, ProcessedFile, SkipReason, SkippedFile};
pub use task::FileTask;
