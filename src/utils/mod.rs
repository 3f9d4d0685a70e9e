//! # 工具函数模块
//!
//! 提供美化输出、进度条、日志初始化、报告渲染等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `main.rs` 使用
//! - 子模块: output, progress, logging, report

pub mod logging;
pub mod output;
pub mod progress;
pub mod report;
