//! # tidyname - 文件名规范化工具
//!
//! 把文件名转换为小写、下划线分隔的规范形式：去除标点符号，合并空白与重复分隔符，
//! 并在字母与其后的数字之间插入分隔符。
//!
//! ## 子命令
//! - `copy`   - 复制整个目录树到输出目录，文件名规范化
//! - `rename` - 原地重命名（默认 dry run）
//! - `clean`  - 打印文本的规范化结果
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑，批处理的宿主)
//!   │     ├── batch/      (文件收集与批量执行)
//!   │     ├── normalizer/ (文件名规范化)
//!   │     └── models/     (数据模型)
//!   ├── utils/      (输出、进度条、日志、报告)
//!   └── error.rs    (错误处理)
//! ```
//!
//! ## 退出码
//! - 0: 成功
//! - 1: 参数校验失败或致命错误
//! - 2: 批处理完成但存在单文件错误

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod normalizer;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::RunStatus;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = utils::logging::init(cli.verbose) {
        utils::output::print_warning(&format!("{:#}", e));
    }

    match commands::run(cli.command, cli.quiet) {
        Ok(RunStatus::Clean) => {}
        Ok(RunStatus::PartialFailure) => std::process::exit(2),
        Err(e) => {
            tracing::debug!(validation = e.is_validation(), "command failed");
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}
