//! # copy 命令实现
//!
//! 将输入目录树中的每个文件复制到输出目录，文件名规范化。
//!
//! ## 功能
//! - 校验输入/输出目录
//! - 保持相对目录结构，保留扩展名大小写
//! - 进度条显示，单文件错误不中断
//! - 汇总提示与可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/copy.rs` 定义的参数
//! - 使用 `batch/runner.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/report.rs`, `utils/logging.rs`

use super::RunStatus;
use crate::batch::{BatchOptions, BatchRunner};
use crate::cli::copy::CopyArgs;
use crate::error::{Result, TidynameError};
use crate::utils::output::Action;
use crate::utils::{logging, output, progress, report};

/// 执行 copy 命令
pub fn execute(args: CopyArgs, quiet: bool) -> Result<RunStatus> {
    output::print_header("Copying files with normalized names");

    let (input, output_dir) = match (args.input, args.output) {
        (Some(input), Some(output_dir)) => (input, output_dir),
        _ => {
            return Err(TidynameError::MissingArgument(
                "Please select both input and output directories (--input, --output)".to_string(),
            ))
        }
    };

    let options = BatchOptions::copy()
        .dry_run(args.dry_run)
        .overwrite(args.overwrite);
    let runner = BatchRunner::new(options);

    output::print_info(&format!(
        "Copying '{}' -> '{}'{}",
        input.display(),
        output_dir.display(),
        if args.dry_run { " (dry run)" } else { "" }
    ));

    let pb = if quiet {
        progress::create_hidden_bar()
    } else {
        progress::create_progress_bar(0, "Copying")
    };
    let _logs = logging::route_through(&pb);

    let batch = runner.run(&input, Some(output_dir.as_path()), |done, total, current| {
        progress::update_from_callback(&pb, done, total, current);
    })?;

    pb.finish_and_clear();

    if batch.total == 0 {
        output::print_warning("No files found in the input directory.");
        return Ok(RunStatus::Clean);
    }

    if !quiet && batch.dry_run {
        for file in &batch.processed_files {
            output::print_mapping(
                Action::Copy,
                file.applied,
                &file.source.display().to_string(),
                &file.destination.display().to_string(),
            );
        }
    }

    report::print_summary(&batch, "copied");

    if let Some(path) = &args.report {
        report::write_csv(&batch, path)?;
        output::print_report_saved(path);
    }

    Ok(RunStatus::from_report(&batch))
}
