//! # copy 子命令 CLI 定义
//!
//! 将输入目录树复制到输出目录，文件名规范化，目录结构保持不变
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/copy.rs`

use clap::Args;
use std::path::PathBuf;

/// copy 子命令参数
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Input directory to read files from
    #[arg(short, long, env = "TIDYNAME_INPUT")]
    pub input: Option<PathBuf>,

    /// Output directory to write renamed copies into
    #[arg(short, long, env = "TIDYNAME_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Overwrite files that already exist in the output directory
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Show what would be copied without touching the filesystem
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Write per-file outcomes to a CSV file
    #[arg(long)]
    pub report: Option<PathBuf>,
}
