//! # clean 子命令 CLI 定义
//!
//! 打印文本的规范化结果
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/clean.rs`

use clap::Args;

/// clean 子命令参数
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Text to normalize; reads lines from stdin when omitted
    pub text: Vec<String>,
}
