//! # 美化输出工具
//!
//! 提供统一的终端输出样式：状态行、文件名映射行和跳过行。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `utils/report.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};
use std::fmt::Display;
use std::path::Path;

/// 文件名映射行对应的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 复制到输出目录
    Copy,
    /// 原地改名
    Rename,
    /// 仅打印规范化文本
    Clean,
}

impl Action {
    /// 行首标签，`applied` 为 false 时表示 dry run
    pub fn tag(self, applied: bool) -> &'static str {
        match (self, applied) {
            (Action::Copy, true) => "[COPIED]",
            (Action::Copy, false) => "[WOULD COPY]",
            (Action::Rename, true) => "[RENAMED]",
            (Action::Rename, false) => "[WOULD RENAME]",
            (Action::Clean, _) => "[CLEAN]",
        }
    }

    fn colored_tag(self, applied: bool) -> ColoredString {
        let tag = self.tag(applied);
        if applied {
            tag.green().bold()
        } else {
            tag.cyan().bold()
        }
    }
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印文件名映射：`原名 -> 新名`
pub fn print_mapping(action: Action, applied: bool, from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        action.colored_tag(applied),
        from.dimmed(),
        "->".cyan(),
        to
    );
}

/// 打印跳过的条目及原因
pub fn print_skipped(subject: &str, reason: impl Display) {
    println!("{} {} ({})", "[SKIP]".dimmed(), subject, reason);
}

/// 打印批处理完成提示，有失败时以警告样式显示
pub fn print_completion(msg: &str, has_errors: bool) {
    if has_errors {
        print_warning(msg);
    } else {
        println!("{} {}", "[DONE]".green().bold(), msg);
    }
}

/// 打印 CSV 报告保存位置
pub fn print_report_saved(path: &Path) {
    println!(
        "{} Report saved to '{}'",
        "[OK]".green().bold(),
        path.display()
    );
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
