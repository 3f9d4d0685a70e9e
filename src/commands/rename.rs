//! # rename 命令实现
//!
//! 原地重命名匹配扩展名的文件。
//!
//! ## 功能
//! - 先执行 dry run 并展示计划
//! - `--apply` 时经确认后执行真实重命名（`--yes` 跳过确认）
//! - 规范化结果不变或目标已存在的文件会被跳过
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/runner.rs`, `batch/extensions.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/report.rs`, `utils/logging.rs`
//! - 使用 `console` 读取确认输入

use super::RunStatus;
use crate::batch::extensions::{self, DEFAULT_EXTENSIONS, IMAGE_EXTENSIONS};
use crate::batch::{BatchOptions, BatchRunner, ExtensionFilter};
use crate::cli::rename::{ExtensionPreset, RenameArgs};
use crate::error::{Result, TidynameError};
use crate::models::{BatchReport, SkipReason};
use crate::utils::output::Action;
use crate::utils::{logging, output, progress, report};

use console::Term;
use std::path::Path;

/// 执行 rename 命令
pub fn execute(args: RenameArgs, quiet: bool) -> Result<RunStatus> {
    output::print_header("Renaming files in place");

    let filter = build_filter(&args)?;
    let recursive = !args.no_recursive;

    match &filter {
        ExtensionFilter::Any => output::print_info("File extensions: all files"),
        ExtensionFilter::AllowList(list) => output::print_info(&format!(
            "File extensions: {} type(s) ({})",
            list.len(),
            args.ext.as_deref().map_or_else(|| args.preset.to_string(), |_| "custom".to_string())
        )),
    }
    output::print_info(&format!("Recursive search: {}", recursive));

    // 总是先做一次 dry run
    let planned = run_pass(&args.dir, &filter, recursive, true, quiet)?;

    if planned.total == 0 {
        output::print_warning(&format!(
            "No matching files found under '{}'",
            args.dir.display()
        ));
        return Ok(RunStatus::Clean);
    }

    report::print_summary(&planned, "renamed");

    let unchanged = planned.skipped_with(&SkipReason::NoChanges);
    if unchanged > 0 {
        output::print_info(&format!("{} file(s) already normalized", unchanged));
    }

    if !args.apply {
        output::print_info("Dry run only. Re-run with --apply to rename files.");
        save_report(&planned, args.report.as_deref())?;
        return Ok(RunStatus::from_report(&planned));
    }

    if planned.processed == 0 {
        output::print_info("No files need renaming.");
        save_report(&planned, args.report.as_deref())?;
        return Ok(RunStatus::from_report(&planned));
    }

    if !args.yes && !confirm(planned.processed)? {
        output::print_warning("Renaming cancelled.");
        return Ok(RunStatus::Clean);
    }

    output::print_info("Proceeding with actual renaming...");
    let applied = run_pass(&args.dir, &filter, recursive, false, quiet)?;
    report::print_summary(&applied, "renamed");
    save_report(&applied, args.report.as_deref())?;

    Ok(RunStatus::from_report(&applied))
}

/// 根据参数构造扩展名过滤
pub fn build_filter(args: &RenameArgs) -> Result<ExtensionFilter> {
    if args.all {
        return Ok(ExtensionFilter::Any);
    }

    let list = match &args.ext {
        Some(custom) => extensions::parse_list(custom)?,
        None => match args.preset {
            ExtensionPreset::Default => extensions::normalize_list(DEFAULT_EXTENSIONS)?,
            ExtensionPreset::Images => extensions::normalize_list(IMAGE_EXTENSIONS)?,
        },
    };

    Ok(ExtensionFilter::AllowList(list))
}

/// 执行一轮（dry run 或真实）重命名
fn run_pass(
    dir: &Path,
    filter: &ExtensionFilter,
    recursive: bool,
    dry_run: bool,
    quiet: bool,
) -> Result<BatchReport> {
    let options = BatchOptions::rename_in_place(filter.clone(), recursive).dry_run(dry_run);
    let runner = BatchRunner::new(options);

    let pb = if quiet {
        progress::create_hidden_bar()
    } else {
        progress::create_progress_bar(0, if dry_run { "Planning" } else { "Renaming" })
    };
    let _logs = logging::route_through(&pb);

    let batch = runner.run(dir, None, |done, total, current| {
        progress::update_from_callback(&pb, done, total, current);
    })?;

    pb.finish_and_clear();

    if !quiet {
        for file in &batch.processed_files {
            let from = file_name(&file.source);
            let to = file_name(&file.destination);
            output::print_mapping(Action::Rename, file.applied, &from, &to);
        }
    }

    Ok(batch)
}

/// 终端确认
fn confirm(count: usize) -> Result<bool> {
    let term = Term::stdout();
    if !term.features().is_attended() {
        return Err(TidynameError::InvalidArgument(
            "confirmation requires an interactive terminal; pass --yes to apply".to_string(),
        ));
    }

    let prompt = format!(
        "\nFound {} files to rename. Proceed with actual renaming? (y/n): ",
        count
    );
    let stdin_error = |e| TidynameError::FileReadError {
        path: "<stdin>".to_string(),
        source: e,
    };
    term.write_str(&prompt).map_err(stdin_error)?;
    let answer = term.read_line().map_err(stdin_error)?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn save_report(batch: &BatchReport, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        report::write_csv(batch, path)?;
        output::print_report_saved(path);
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
