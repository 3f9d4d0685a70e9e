//! # rename 子命令 CLI 定义
//!
//! 原地重命名匹配扩展名的文件，默认只做 dry run
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 内置扩展名列表
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExtensionPreset {
    /// Common media, document, code, archive and config types
    Default,
    /// Image files only (.jpg, .png, .gif, ...)
    Images,
}

impl std::fmt::Display for ExtensionPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtensionPreset::Default => write!(f, "default"),
            ExtensionPreset::Images => write!(f, "images"),
        }
    }
}

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Root directory to process
    #[arg(env = "TIDYNAME_INPUT")]
    pub dir: PathBuf,

    /// Comma-separated extensions to process (e.g., '.jpg,.png,.pdf')
    #[arg(short, long, conflicts_with_all = ["preset", "all"])]
    pub ext: Option<String>,

    /// Built-in extension list
    #[arg(long, value_enum, default_value = "default")]
    pub preset: ExtensionPreset,

    /// Process every file regardless of extension
    #[arg(long, default_value_t = false, conflicts_with = "preset")]
    pub all: bool,

    /// Only process the top-level directory
    #[arg(long, default_value_t = false)]
    pub no_recursive: bool,

    /// Actually rename files (after a dry run and confirmation)
    #[arg(long, default_value_t = false)]
    pub apply: bool,

    /// Skip the confirmation prompt when applying
    #[arg(short, long, default_value_t = false, requires = "apply")]
    pub yes: bool,

    /// Write per-file outcomes to a CSV file
    #[arg(long)]
    pub report: Option<PathBuf>,
}
