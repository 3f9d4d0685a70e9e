//! # clean 命令实现
//!
//! 打印每段文本的规范化结果，未提供参数时逐行读取 stdin。
//!
//! ## 依赖关系
//! - 使用 `cli/clean.rs` 定义的参数
//! - 使用 `normalizer/`, `utils/output.rs`

use super::RunStatus;
use crate::cli::clean::CleanArgs;
use crate::error::{Result, TidynameError};
use crate::models::SkipReason;
use crate::normalizer::normalize;
use crate::utils::output::{self, Action};

use std::io::{self, BufRead};

/// 执行 clean 命令
pub fn execute(args: CleanArgs) -> Result<RunStatus> {
    if !args.text.is_empty() {
        for text in &args.text {
            print_cleaned(text);
        }
        return Ok(RunStatus::Clean);
    }

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| TidynameError::FileReadError {
            path: "<stdin>".to_string(),
            source: e,
        })?;
        print_cleaned(&line);
    }

    Ok(RunStatus::Clean)
}

fn print_cleaned(text: &str) {
    let cleaned = normalize(text);
    if cleaned.is_empty() {
        output::print_skipped(&format!("'{}'", text), SkipReason::EmptyName);
    } else {
        output::print_mapping(Action::Clean, true, text, &cleaned);
    }
}
