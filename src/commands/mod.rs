//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑，是批处理核心的命令行宿主：
//! 负责参数校验、进度条渲染和结果提示。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `normalizer/`, `utils/`
//! - 子模块: copy, rename, clean

pub mod clean;
pub mod copy;
pub mod rename;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::BatchReport;

/// 命令执行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// 全部成功（或无事可做）
    Clean,
    /// 批处理完成但有单文件错误
    PartialFailure,
}

impl RunStatus {
    pub fn from_report(report: &BatchReport) -> Self {
        if report.has_errors() {
            RunStatus::PartialFailure
        } else {
            RunStatus::Clean
        }
    }
}

/// 执行命令
pub fn run(cmd: Commands, quiet: bool) -> Result<RunStatus> {
    match cmd {
        Commands::Copy(args) => copy::execute(args, quiet),
        Commands::Rename(args) => rename::execute(args, quiet),
        Commands::Clean(args) => clean::execute(args),
    }
}
