//! # 报告渲染与导出
//!
//! 将 `BatchReport` 渲染为终端汇总表，并可导出逐文件结果到 CSV。
//!
//! ## 显示上限
//! - 跳过列表最多显示 10 条
//! - 错误列表最多显示 5 条
//!
//! 超出部分显示为 "... and N more"，计数本身始终精确。
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs`, `commands/rename.rs` 调用
//! - 使用 `tabled` 打印表格，`csv` + `serde` 写入 CSV

use crate::error::{Result, TidynameError};
use crate::models::BatchReport;
use crate::utils::output;

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 跳过列表显示上限
pub const MAX_SKIPPED_SHOWN: usize = 10;
/// 错误列表显示上限
pub const MAX_ERRORS_SHOWN: usize = 5;

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
    #[tabled(rename = "Files")]
    count: usize,
}

/// CSV 行
#[derive(Debug, Serialize)]
struct CsvRow {
    status: &'static str,
    source: String,
    destination: String,
    detail: String,
}

/// 打印汇总
pub fn print_summary(report: &BatchReport, verb: &str) {
    let processed_label = if report.dry_run {
        "Would be processed"
    } else {
        "Processed"
    };

    let rows = vec![
        SummaryRow {
            outcome: "Found",
            count: report.total,
        },
        SummaryRow {
            outcome: processed_label,
            count: report.processed,
        },
        SummaryRow {
            outcome: "Skipped",
            count: report.skipped,
        },
        SummaryRow {
            outcome: "Errors",
            count: report.errors,
        },
    ];

    output::print_separator();
    println!("{}", Table::new(&rows));

    if !report.skipped_files.is_empty() {
        println!("\nSkipped files:");
        for line in capped_lines(
            report
                .skipped_files
                .iter()
                .map(|s| format!("{}: {}", s.path.display(), s.reason)),
            report.skipped,
            MAX_SKIPPED_SHOWN,
        ) {
            println!("  - {}", line);
        }
    }

    if !report.error_messages.is_empty() {
        println!("\nErrors:");
        for line in capped_lines(
            report.error_messages.iter().cloned(),
            report.errors,
            MAX_ERRORS_SHOWN,
        ) {
            println!("  - {}", line);
        }
    }

    println!();
    let message = completion_message(report, verb);
    output::print_completion(&message, report.has_errors());
}

/// 完成提示：始终告知成功与失败数量
pub fn completion_message(report: &BatchReport, verb: &str) -> String {
    let prefix = if report.dry_run {
        format!("Dry run: {} file(s) would be {}", report.processed, verb)
    } else {
        format!("Successfully {} {} file(s)", verb, report.processed)
    };

    if report.has_errors() {
        format!("{}. {} file(s) had errors.", prefix, report.errors)
    } else {
        format!("{}!", prefix)
    }
}

/// 截断列表并追加 "... and N more"
fn capped_lines<I>(items: I, total: usize, limit: usize) -> Vec<String>
where
    I: Iterator<Item = String>,
{
    let mut lines: Vec<String> = items.take(limit).collect();
    if total > limit {
        lines.push(format!("... and {} more", total - limit));
    }
    lines
}

/// 导出逐文件结果到 CSV
pub fn write_csv(report: &BatchReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let processed_status = if report.dry_run { "planned" } else { "done" };
    for file in &report.processed_files {
        wtr.serialize(CsvRow {
            status: processed_status,
            source: file.source.display().to_string(),
            destination: file.destination.display().to_string(),
            detail: String::new(),
        })?;
    }

    for file in &report.skipped_files {
        wtr.serialize(CsvRow {
            status: "skipped",
            source: file.path.display().to_string(),
            destination: String::new(),
            detail: file.reason.to_string(),
        })?;
    }

    for message in &report.error_messages {
        wtr.serialize(CsvRow {
            status: "error",
            source: String::new(),
            destination: String::new(),
            detail: message.clone(),
        })?;
    }

    wtr.flush().map_err(|e| TidynameError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
