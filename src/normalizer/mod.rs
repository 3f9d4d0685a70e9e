//! # 文件名规范化
//!
//! 将任意文本（通常是不含扩展名的文件名 stem）转换为规范形式：
//! 小写、仅含 `[a-z0-9_]`、以单个下划线分隔。
//!
//! ## 处理步骤
//! 1. 全部转小写
//! 2. 字母后紧跟数字时插入分隔符 (`desert1` -> `desert_1`)
//! 3. 非 ASCII 字母/数字/空白的连续字符替换为单个分隔符
//! 4. 连续空白替换为单个分隔符
//! 5. 合并连续分隔符
//! 6. 去除首尾分隔符
//!
//! 非 ASCII 字母（如 `é`、`中`）不视为字母，会在第 3 步被替换。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/clean.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;
use std::sync::LazyLock;

/// 分隔符
pub const SEPARATOR: char = '_';

static LETTER_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([0-9])").unwrap());
static SYMBOL_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s]+").unwrap());
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_{2,}").unwrap());

/// 规范化结果：原始 stem 与规范化后的 stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationResult {
    pub original: String,
    pub cleaned: String,
}

impl NormalizationResult {
    /// 对 stem 进行规范化
    pub fn new(original: &str) -> Self {
        Self {
            original: original.to_string(),
            cleaned: normalize(original),
        }
    }

    /// 规范化是否未改变任何内容
    pub fn is_unchanged(&self) -> bool {
        self.original == self.cleaned
    }

    /// 规范化后是否为空
    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty()
    }
}

/// 规范化文本
///
/// 对所有输入都有定义，空串或不含字母数字的输入返回空串。
pub fn normalize(text: &str) -> String {
    let cleaned = text.to_lowercase();
    let cleaned = LETTER_DIGIT.replace_all(&cleaned, "${1}_${2}");
    let cleaned = SYMBOL_RUN.replace_all(&cleaned, "_");
    let cleaned = SPACE_RUN.replace_all(&cleaned, "_");
    let cleaned = SEPARATOR_RUN.replace_all(&cleaned, "_");
    cleaned.trim_matches(SEPARATOR).to_string()
}
