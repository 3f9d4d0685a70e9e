//! # 批量执行器
//!
//! 对收集到的文件逐个计算规范化名称，并执行复制或原地重命名。
//!
//! ## 功能
//! - 复制模式：在目标根目录下重建相对目录结构，复制内容和元数据，源文件不变
//! - 原地重命名模式：同目录内改名，默认 dry run
//! - 单文件错误只记录到报告，不中断批处理
//! - 每处理完一个文件调用一次进度回调
//!
//! 执行器本身是单线程同步的，不持有跨调用的可变状态。
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs`, `commands/rename.rs` 调用
//! - 使用 `batch/collector.rs` 收集文件
//! - 使用 `models/` 的 `FileTask`, `BatchReport`
//! - 使用 `filetime` 保留访问/修改时间

use crate::batch::collector::{ExtensionFilter, FileCollector};
use crate::error::{Result, TidynameError};
use crate::models::{BatchReport, FileOutcome, FileTask, ProcessedFile, SkipReason, SkippedFile};

use filetime::FileTime;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// 批处理选项
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// 扩展名过滤
    pub filter: ExtensionFilter,
    /// 是否递归
    pub recursive: bool,
    /// 只计算不修改文件系统
    pub dry_run: bool,
    /// 复制模式下覆盖运行前已存在的目标文件
    pub overwrite: bool,
}

impl BatchOptions {
    /// 复制模式默认选项：全部文件、递归
    pub fn copy() -> Self {
        Self {
            filter: ExtensionFilter::Any,
            recursive: true,
            dry_run: false,
            overwrite: false,
        }
    }

    /// 原地重命名模式默认选项：默认 dry run
    pub fn rename_in_place(filter: ExtensionFilter, recursive: bool) -> Self {
        Self {
            filter,
            recursive,
            dry_run: true,
            overwrite: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// 批量执行器
pub struct BatchRunner {
    options: BatchOptions,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    /// 不带进度回调执行
    pub fn run_silent(&self, source_root: &Path, destination_root: Option<&Path>) -> Result<BatchReport> {
        self.run(source_root, destination_root, |_, _, _| {})
    }

    /// 执行批处理
    ///
    /// `destination_root` 为 `Some` 时为复制模式，否则为原地重命名模式。
    /// 只有参数校验失败会返回 `Err`；单文件错误记录在报告中。
    /// `on_progress(completed, total, current)` 在每个条目处理完后调用。
    pub fn run<F>(
        &self,
        source_root: &Path,
        destination_root: Option<&Path>,
        mut on_progress: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(usize, usize, &Path),
    {
        Self::validate(source_root, destination_root)?;

        let collection = FileCollector::new(source_root)
            .with_filter(self.options.filter.clone())
            .recursive(self.options.recursive)
            .collect();

        let total = collection.total();
        let mut report = BatchReport::new(total, self.options.dry_run);

        info!(
            source = %source_root.display(),
            destination = ?destination_root.map(|p| p.display().to_string()),
            total,
            dry_run = self.options.dry_run,
            "batch started"
        );

        let mut completed = 0;

        for (path, message) in collection.failures {
            report.merge(FileOutcome::Failed(path.clone(), message));
            completed += 1;
            on_progress(completed, total, &path);
        }

        // 本次运行已写入（或 dry run 中已计划）的目标路径
        let mut claimed: HashSet<PathBuf> = HashSet::new();

        for source in collection.files {
            let outcome = match FileTask::plan(source_root, &source, destination_root) {
                Ok(task) => {
                    trace!(
                        relative = %task.relative.display(),
                        extension = ?task.extension,
                        cleaned = %task.name.cleaned,
                        "planned"
                    );
                    match destination_root {
                        Some(_) => self.copy_task(&task, &mut claimed),
                        None => self.rename_task(&task, &mut claimed),
                    }
                }
                Err(e) => FileOutcome::Failed(source.clone(), e.to_string()),
            };

            match &outcome {
                FileOutcome::Processed(file) => debug!(
                    source = %file.source.display(),
                    destination = %file.destination.display(),
                    applied = file.applied,
                    "processed"
                ),
                FileOutcome::Skipped(file) => {
                    debug!(path = %file.path.display(), reason = %file.reason, "skipped")
                }
                FileOutcome::Failed(path, message) => {
                    warn!(path = %path.display(), error = %message, "failed")
                }
            }

            report.merge(outcome);
            completed += 1;
            on_progress(completed, total, &source);
        }

        debug_assert_eq!(report.resolved(), report.total);
        info!(
            processed = report.processed,
            skipped = report.skipped,
            errors = report.errors,
            "batch finished"
        );

        Ok(report)
    }

    /// 校验根目录
    fn validate(source_root: &Path, destination_root: Option<&Path>) -> Result<()> {
        if !source_root.exists() {
            return Err(TidynameError::DirectoryNotFound {
                path: source_root.display().to_string(),
            });
        }
        if !source_root.is_dir() {
            return Err(TidynameError::NotADirectory {
                path: source_root.display().to_string(),
            });
        }

        if let Some(destination) = destination_root {
            if destination.as_os_str().is_empty() {
                return Err(TidynameError::MissingArgument("output directory".to_string()));
            }
            if destination.exists() && !destination.is_dir() {
                return Err(TidynameError::NotADirectory {
                    path: destination.display().to_string(),
                });
            }
            if let (Ok(src), Ok(dst)) = (source_root.canonicalize(), destination.canonicalize()) {
                if src == dst {
                    return Err(TidynameError::SameRoots {
                        path: src.display().to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// 复制模式处理单个文件
    fn copy_task(&self, task: &FileTask, claimed: &mut HashSet<PathBuf>) -> FileOutcome {
        if task.name.is_empty() {
            return skipped(task, SkipReason::EmptyName);
        }

        let exists = path_exists(&task.destination);
        if claimed.contains(&task.destination) || (exists && !self.options.overwrite) {
            return skipped(task, SkipReason::TargetExists(task.destination_file_name()));
        }

        if !self.options.dry_run {
            if let Err(e) = copy_with_metadata(task) {
                return FileOutcome::Failed(task.source.clone(), error_detail(&e));
            }
        }

        claimed.insert(task.destination.clone());
        processed(task, !self.options.dry_run)
    }

    /// 原地重命名模式处理单个文件
    fn rename_task(&self, task: &FileTask, claimed: &mut HashSet<PathBuf>) -> FileOutcome {
        if task.name.is_unchanged() {
            return skipped(task, SkipReason::NoChanges);
        }
        if task.name.is_empty() {
            return skipped(task, SkipReason::EmptyName);
        }

        let collides = claimed.contains(&task.destination)
            || (path_exists(&task.destination) && !is_same_file(&task.source, &task.destination));
        if collides {
            return skipped(task, SkipReason::TargetExists(task.destination_file_name()));
        }

        if !self.options.dry_run {
            if let Err(e) = fs::rename(&task.source, &task.destination) {
                let err = TidynameError::RenameFailed {
                    path: task.source.display().to_string(),
                    source: e,
                };
                return FileOutcome::Failed(task.source.clone(), error_detail(&err));
            }
        }

        claimed.insert(task.destination.clone());
        processed(task, !self.options.dry_run)
    }
}

fn processed(task: &FileTask, applied: bool) -> FileOutcome {
    FileOutcome::Processed(ProcessedFile {
        source: task.source.clone(),
        destination: task.destination.clone(),
        applied,
    })
}

fn skipped(task: &FileTask, reason: SkipReason) -> FileOutcome {
    FileOutcome::Skipped(SkippedFile {
        path: task.source.clone(),
        reason,
    })
}

/// 取底层 I/O 错误信息，路径由报告统一拼接
fn error_detail(err: &TidynameError) -> String {
    match err {
        TidynameError::CopyFailed { source, .. }
        | TidynameError::RenameFailed { source, .. }
        | TidynameError::FileReadError { source, .. }
        | TidynameError::FileWriteError { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

/// 创建目标目录，复制内容、权限和访问/修改时间
fn copy_with_metadata(task: &FileTask) -> Result<()> {
    if let Some(dir) = task.destination_dir() {
        fs::create_dir_all(dir).map_err(|e| TidynameError::CreateDirFailed {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    let copy_failed = |e| TidynameError::CopyFailed {
        path: task.source.display().to_string(),
        source: e,
    };

    fs::copy(&task.source, &task.destination).map_err(copy_failed)?;

    let meta = fs::metadata(&task.source).map_err(copy_failed)?;
    filetime::set_file_times(
        &task.destination,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )
    .map_err(copy_failed)?;

    Ok(())
}

/// 不跟随符号链接的存在性检查
fn path_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// 两个路径是否为同一目录项（大小写不敏感文件系统上的仅大小写改名）
///
/// 不跟随符号链接：指向目标文件的链接不算同一文件。
#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(x), Ok(y)) => x.dev() == y.dev() && x.ino() == y.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    let is_link = |p: &Path| fs::symlink_metadata(p).map_or(true, |m| m.file_type().is_symlink());
    if is_link(a) || is_link(b) {
        return false;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn write(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn file_set(root: &Path) -> BTreeSet<PathBuf> {
        walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    fn rename_options(dry_run: bool) -> BatchOptions {
        BatchOptions::rename_in_place(ExtensionFilter::Any, true).dry_run(dry_run)
    }

    // ─────────────────────────────────────────────────────────────
    // 复制模式
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn test_copy_preserves_tree_shape() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write(&src.path().join("a/My File 1.txt"), b"first");
        write(&src.path().join("C Notes!.txt"), b"second");

        let report = BatchRunner::new(BatchOptions::copy())
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.processed, 2);
        assert_eq!(report.errors, 0);

        let expected: BTreeSet<PathBuf> = [PathBuf::from("a/my_file_1.txt"), PathBuf::from("c_notes.txt")]
            .into_iter()
            .collect();
        assert_eq!(file_set(dst.path()), expected);
        assert_eq!(fs::read(dst.path().join("a/my_file_1.txt")).unwrap(), b"first");

        // 源文件保持不变
        assert_eq!(fs::read(src.path().join("a/My File 1.txt")).unwrap(), b"first");
        assert_eq!(fs::read(src.path().join("C Notes!.txt")).unwrap(), b"second");
    }

    #[test]
    fn test_copy_preserves_extension_case_and_mtime() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let source = src.path().join("Holiday Pic.JPG");
        write(&source, b"img");
        let mtime = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_mtime(&source, mtime).unwrap();

        let report = BatchRunner::new(BatchOptions::copy())
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();
        assert_eq!(report.processed, 1);

        let copied = dst.path().join("holiday_pic.JPG");
        let meta = fs::metadata(&copied).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&meta), mtime);
    }

    #[test]
    fn test_copy_collision_in_same_run_is_skipped() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write(&src.path().join("Report 1.txt"), b"one");
        write(&src.path().join("report_1.txt"), b"two");

        let report = BatchRunner::new(BatchOptions::copy().overwrite(true))
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.processed, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors, 0);
        assert_eq!(
            report.skipped_files[0].reason,
            SkipReason::TargetExists("report_1.txt".to_string())
        );
        assert_eq!(file_set(dst.path()).len(), 1);
    }

    #[test]
    fn test_copy_existing_target_requires_overwrite() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write(&src.path().join("Data File.csv"), b"new");
        write(&dst.path().join("data_file.csv"), b"old");

        let report = BatchRunner::new(BatchOptions::copy())
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(fs::read(dst.path().join("data_file.csv")).unwrap(), b"old");

        let report = BatchRunner::new(BatchOptions::copy().overwrite(true))
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();
        assert_eq!(report.processed, 1);
        assert_eq!(fs::read(dst.path().join("data_file.csv")).unwrap(), b"new");
    }

    #[test]
    fn test_copy_dry_run_touches_nothing() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write(&src.path().join("x/Some Name.txt"), b"x");

        let report = BatchRunner::new(BatchOptions::copy().dry_run(true))
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();

        assert_eq!(report.processed, 1);
        assert!(!report.processed_files[0].applied);
        assert!(file_set(dst.path()).is_empty());
        assert!(!dst.path().join("x").exists());
    }

    #[test]
    fn test_copy_partial_failure_is_isolated() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        for i in 0..9 {
            write(&src.path().join(format!("File {}.txt", i)), b"ok");
        }
        write(&src.path().join("blocked/Inner File.txt"), b"fail");
        // 目标处已有同名普通文件，无法创建子目录
        write(&dst.path().join("blocked"), b"not a dir");

        let report = BatchRunner::new(BatchOptions::copy())
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();

        assert_eq!(report.total, 10);
        assert_eq!(report.processed, 9);
        assert_eq!(report.errors, 1);
        assert_eq!(report.error_messages.len(), 1);
        assert!(report.error_messages[0].contains("Inner File.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_follows_symlinked_files() {
        use std::os::unix::fs::symlink;

        let outside = tempfile::tempdir().unwrap();
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write(&outside.path().join("Real File.txt"), b"target bytes");
        write(&src.path().join("Plain File.txt"), b"plain");
        symlink(outside.path().join("Real File.txt"), src.path().join("Linked File.txt")).unwrap();

        let report = BatchRunner::new(BatchOptions::copy())
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.processed, 2);
        assert_eq!(report.errors, 0);

        let copied = dst.path().join("linked_file.txt");
        assert!(!fs::symlink_metadata(&copied).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(&copied).unwrap(), b"target bytes");
        assert_eq!(fs::read(dst.path().join("plain_file.txt")).unwrap(), b"plain");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_reports_dangling_symlink() {
        use std::os::unix::fs::symlink;

        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write(&src.path().join("Good One.txt"), b"ok");
        symlink(src.path().join("missing.txt"), src.path().join("Dangling Link.txt")).unwrap();

        let report = BatchRunner::new(BatchOptions::copy())
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.processed, 1);
        assert_eq!(report.errors, 1);
        assert!(report.error_messages[0].contains("Dangling Link.txt"));
        assert_eq!(report.resolved(), report.total);
    }

    #[test]
    fn test_copy_empty_input_returns_zero_report() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("only/dirs")).unwrap();

        let report = BatchRunner::new(BatchOptions::copy())
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(report.resolved(), 0);
    }

    #[test]
    fn test_copy_skips_empty_normalized_name() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write(&src.path().join("###.txt"), b"x");

        let report = BatchRunner::new(BatchOptions::copy())
            .run_silent(src.path(), Some(dst.path()))
            .unwrap();
        assert_eq!(report.skipped_with(&SkipReason::EmptyName), 1);
        assert!(file_set(dst.path()).is_empty());
    }

    // ─────────────────────────────────────────────────────────────
    // 校验
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn test_missing_source_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BatchRunner::new(BatchOptions::copy())
            .run_silent(&dir.path().join("missing"), Some(dir.path()))
            .unwrap_err();
        assert!(matches!(err, TidynameError::DirectoryNotFound { .. }));
        assert!(err.is_validation());
    }

    #[test]
    fn test_same_roots_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = BatchRunner::new(BatchOptions::copy())
            .run_silent(dir.path(), Some(dir.path()))
            .unwrap_err();
        assert!(matches!(err, TidynameError::SameRoots { .. }));
    }

    #[test]
    fn test_source_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        write(&file, b"x");
        let err = BatchRunner::new(rename_options(true))
            .run_silent(&file, None)
            .unwrap_err();
        assert!(matches!(err, TidynameError::NotADirectory { .. }));
    }

    // ─────────────────────────────────────────────────────────────
    // 原地重命名模式
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn test_rename_in_place() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("Sunset Photo2.jpg"), b"a");
        write(&dir.path().join("sub/The Cambrian Period5.JPG"), b"b");

        let report = BatchRunner::new(rename_options(false))
            .run_silent(dir.path(), None)
            .unwrap();

        assert_eq!(report.processed, 2);
        let expected: BTreeSet<PathBuf> = [
            PathBuf::from("sunset_photo_2.jpg"),
            PathBuf::from("sub/the_cambrian_period_5.JPG"),
        ]
        .into_iter()
        .collect();
        assert_eq!(file_set(dir.path()), expected);
    }

    #[test]
    fn test_rename_dry_run_is_default_and_read_only() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("Needs Rename.txt"), b"a");

        let options = BatchOptions::rename_in_place(ExtensionFilter::Any, true);
        assert!(options.dry_run);

        let report = BatchRunner::new(options).run_silent(dir.path(), None).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.processed, 1);
        assert_eq!(
            report.processed_files[0].destination,
            dir.path().join("needs_rename.txt")
        );
        assert!(dir.path().join("Needs Rename.txt").exists());
        assert!(!dir.path().join("needs_rename.txt").exists());
    }

    #[test]
    fn test_rename_skips_canonical_names() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("already_clean_1.txt"), b"a");

        let report = BatchRunner::new(rename_options(false))
            .run_silent(dir.path(), None)
            .unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(report.skipped_with(&SkipReason::NoChanges), 1);
        assert!(dir.path().join("already_clean_1.txt").exists());
    }

    #[test]
    fn test_rename_collision_skips_second() {
        for dry_run in [true, false] {
            let dir = tempfile::tempdir().unwrap();
            write(&dir.path().join("Big Cat.png"), b"1");
            write(&dir.path().join("big-cat.png"), b"2");

            let report = BatchRunner::new(rename_options(dry_run))
                .run_silent(dir.path(), None)
                .unwrap();

            assert_eq!(report.total, 2);
            assert_eq!(report.processed, 1);
            assert_eq!(report.skipped, 1);
            assert_eq!(report.errors, 0);
            assert_eq!(report.processed + report.skipped, report.total);
            assert_eq!(
                report.skipped_files[0].reason,
                SkipReason::TargetExists("big_cat.png".to_string())
            );
        }
    }

    #[test]
    fn test_rename_existing_target_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("Song Title.mp3"), b"new");
        write(&dir.path().join("song_title.mp3"), b"old");

        let report = BatchRunner::new(rename_options(false))
            .run_silent(dir.path(), None)
            .unwrap();

        assert_eq!(report.processed, 0);
        assert_eq!(report.skipped, 2);
        assert_eq!(fs::read(dir.path().join("song_title.mp3")).unwrap(), b"old");
        assert!(dir.path().join("Song Title.mp3").exists());
    }

    #[test]
    fn test_rename_partial_failure_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let names: Vec<String> = (0..10).map(|i| format!("Track {}.mp3", i)).collect();
        for name in &names {
            write(&dir.path().join(name), b"audio");
        }

        // 第一个文件处理完后删除另一个尚未处理的源文件，使其改名失败
        let mut removed: Option<PathBuf> = None;
        let report = BatchRunner::new(rename_options(false))
            .run(dir.path(), None, |done, _, current| {
                if done == 1 {
                    let victim = names
                        .iter()
                        .map(|n| dir.path().join(n))
                        .find(|p| p != current)
                        .unwrap();
                    fs::remove_file(&victim).unwrap();
                    removed = Some(victim);
                }
            })
            .unwrap();

        let removed = removed.unwrap();
        assert_eq!(report.total, 10);
        assert_eq!(report.processed, 9);
        assert_eq!(report.errors, 1);
        assert_eq!(report.resolved(), report.total);

        let removed_name = removed.file_name().unwrap().to_string_lossy().into_owned();
        assert!(report.error_messages[0].contains(&removed_name));
        assert!(report.processed_files.iter().all(|f| f.applied && f.source != removed));
        assert_eq!(file_set(dir.path()).len(), 9);
        assert!(file_set(dir.path())
            .iter()
            .all(|p| p.to_string_lossy().starts_with("track_")));
    }

    #[cfg(unix)]
    #[test]
    fn test_rename_does_not_replace_symlink_target() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("note.txt"), b"keep me");
        symlink(dir.path().join("note.txt"), dir.path().join("Note.txt")).unwrap();

        let report = BatchRunner::new(rename_options(false))
            .run_silent(dir.path(), None)
            .unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.processed, 0);
        assert_eq!(
            report.skipped_with(&SkipReason::TargetExists("note.txt".to_string())),
            1
        );
        assert_eq!(report.skipped_with(&SkipReason::NoChanges), 1);
        assert!(!fs::symlink_metadata(dir.path().join("note.txt"))
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(fs::read(dir.path().join("note.txt")).unwrap(), b"keep me");
    }

    #[test]
    fn test_rename_filter_and_top_level_only() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("Keep Me.JPG"), b"a");
        write(&dir.path().join("Ignore Me.xyz"), b"b");
        write(&dir.path().join("nested/Deep One.jpg"), b"c");

        let filter = ExtensionFilter::AllowList(vec![".jpg".to_string()]);
        let options = BatchOptions::rename_in_place(filter, false).dry_run(false);
        let report = BatchRunner::new(options).run_silent(dir.path(), None).unwrap();

        assert_eq!(report.total, 1);
        assert!(dir.path().join("keep_me.JPG").exists());
        assert!(dir.path().join("Ignore Me.xyz").exists());
        assert!(dir.path().join("nested/Deep One.jpg").exists());
    }

    #[test]
    fn test_progress_called_once_per_file() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["A 1.txt", "B 2.txt", "c/D 3.txt"] {
            write(&dir.path().join(name), b"x");
        }

        let mut calls = Vec::new();
        let report = BatchRunner::new(rename_options(true))
            .run(dir.path(), None, |done, total, path| {
                calls.push((done, total, path.to_path_buf()));
            })
            .unwrap();

        assert_eq!(calls.len(), 3);
        assert_eq!(calls.iter().map(|c| c.0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(calls.iter().all(|c| c.1 == 3));

        // 忽略回调结果相同
        let silent = BatchRunner::new(rename_options(true))
            .run_silent(dir.path(), None)
            .unwrap();
        assert_eq!(silent.processed, report.processed);
        assert_eq!(silent.skipped, report.skipped);
    }
}
