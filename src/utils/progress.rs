//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式，并适配批处理的进度回调。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
    ) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// 创建隐藏的进度条（--quiet）
pub fn create_hidden_bar() -> ProgressBar {
    ProgressBar::hidden()
}

/// 将 `(completed, total, current)` 进度回调映射到进度条
pub fn update_from_callback(pb: &ProgressBar, completed: usize, total: usize, current: &Path) {
    if pb.length() != Some(total as u64) {
        pb.set_length(total as u64);
    }
    pb.set_position(completed as u64);
    if let Some(name) = current.file_name() {
        pb.set_message(name.to_string_lossy().into_owned());
    }
}
