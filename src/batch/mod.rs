//! # 批量处理模块
//!
//! 遍历源目录树，用规范化后的文件名复制或原地重命名每个文件。
//!
//! ## 功能
//! - 收集文件列表（递归/顶层、扩展名白名单）
//! - 复制模式与原地重命名模式
//! - 进度回调与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs`, `commands/rename.rs` 使用
//! - 使用 `normalizer/`, `models/`
//! - 使用 `walkdir` 遍历目录

pub mod collector;
pub mod extensions;
pub mod runner;

pub use collector::ExtensionFilter;
pub use runner::{BatchOptions, BatchRunner};
