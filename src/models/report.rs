//! # 批处理汇总报告
//!
//! 批处理开始时创建空报告，每个文件任务结束后合并一次结果，
//! 批处理结束后以不可变值返回给调用方。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 填充
//! - 被 `utils/report.rs` 和 `commands/` 渲染

use std::fmt;
use std::path::PathBuf;

/// 跳过原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 规范化后与原名相同
    NoChanges,
    /// 目标文件已存在
    TargetExists(String),
    /// 规范化后为空
    EmptyName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoChanges => write!(f, "No changes needed"),
            SkipReason::TargetExists(name) => write!(f, "Target file already exists: {}", name),
            SkipReason::EmptyName => write!(f, "Normalized name is empty"),
        }
    }
}

/// 已处理（或 dry run 中计划处理）的文件
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// false 表示 dry run，仅计划未执行
    pub applied: bool,
}

/// 被跳过的文件
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Processed(ProcessedFile),
    Skipped(SkippedFile),
    /// (文件路径, 错误信息)
    Failed(PathBuf, String),
}

/// 批处理汇总报告
#[derive(Debug, Default, Clone)]
pub struct BatchReport {
    /// 发现的条目总数
    pub total: usize,
    /// 成功复制/重命名数量（dry run 中为计划数量）
    pub processed: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub errors: usize,
    /// 是否为 dry run
    pub dry_run: bool,
    pub processed_files: Vec<ProcessedFile>,
    pub skipped_files: Vec<SkippedFile>,
    pub error_messages: Vec<String>,
}

impl BatchReport {
    /// 创建空报告
    pub fn new(total: usize, dry_run: bool) -> Self {
        Self {
            total,
            dry_run,
            ..Default::default()
        }
    }

    /// 合并处理结果
    pub fn merge(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Processed(file) => {
                self.processed += 1;
                self.processed_files.push(file);
            }
            FileOutcome::Skipped(file) => {
                self.skipped += 1;
                self.skipped_files.push(file);
            }
            FileOutcome::Failed(path, message) => {
                self.errors += 1;
                self.error_messages
                    .push(format!("Error processing {}: {}", path.display(), message));
            }
        }
    }

    /// 已完成结算的文件数
    pub fn resolved(&self) -> usize {
        self.processed + self.skipped + self.errors
    }

    /// 是否存在单文件错误
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// 按原因统计跳过数量
    pub fn skipped_with(&self, reason: &SkipReason) -> usize {
        self.skipped_files
            .iter()
            .filter(|s| &s.reason == reason)
            .count()
    }
}
