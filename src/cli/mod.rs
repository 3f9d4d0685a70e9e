//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `copy`: 复制目录树到输出目录并规范化文件名
//! - `rename`: 原地重命名（默认 dry run）
//! - `clean`: 直接打印文本的规范化结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: copy, rename, clean

pub mod clean;
pub mod copy;
pub mod rename;

use clap::{ArgAction, Parser, Subcommand};

/// tidyname - 文件名规范化工具
#[derive(Parser)]
#[command(name = "tidyname")]
#[command(version)]
#[command(about = "Normalize file names into lowercase underscore tokens", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Hide the progress bar and per-file lines
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Copy every file from an input tree to an output tree with normalized names
    Copy(copy::CopyArgs),

    /// Rename matching files in place (dry run unless --apply is given)
    Rename(rename::RenameArgs),

    /// Print the normalized form of the given text
    Clean(clean::CleanArgs),
}
