//! # 文件收集器
//!
//! 遍历扫描根目录，收集待处理的普通文件。
//!
//! ## 功能
//! - 递归或仅顶层遍历
//! - 扩展名白名单（不区分大小写）或不过滤
//! - 记录无法读取的目录项，而不是中断遍历
//! - 指向普通文件的符号链接计入结果；悬空链接记为失败
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 扩展名过滤方式
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExtensionFilter {
    /// 不过滤，处理所有文件
    #[default]
    Any,
    /// 只处理白名单中的扩展名（小写，带前导点）
    AllowList(Vec<String>),
}

impl ExtensionFilter {
    /// 检查文件名是否匹配
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            ExtensionFilter::Any => true,
            ExtensionFilter::AllowList(list) => {
                let lower = file_name.to_lowercase();
                list.iter().any(|ext| lower.ends_with(ext.as_str()))
            }
        }
    }
}

/// 收集结果
#[derive(Debug, Default)]
pub struct Collection {
    /// 匹配的文件
    pub files: Vec<PathBuf>,
    /// 无法读取的目录项 (路径, 错误信息)
    pub failures: Vec<(PathBuf, String)>,
}

impl Collection {
    /// 发现的条目总数
    pub fn total(&self) -> usize {
        self.files.len() + self.failures.len()
    }
}

/// 文件收集器
pub struct FileCollector {
    /// 扫描根目录
    root: PathBuf,
    /// 扩展名过滤
    filter: ExtensionFilter,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器（默认递归、不过滤）
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            filter: ExtensionFilter::Any,
            recursive: true,
        }
    }

    /// 设置扩展名过滤
    pub fn with_filter(mut self, filter: ExtensionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    ///
    /// 顺序为目录遍历的自然顺序，不做排序。
    pub fn collect(&self) -> Collection {
        let mut collection = Collection::default();

        if !self.root.is_dir() {
            return collection;
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(max_depth) {
            match entry {
                Ok(entry) => {
                    if !self.matches(entry.path()) {
                        continue;
                    }
                    match Self::classify(&entry) {
                        Ok(true) => collection.files.push(entry.into_path()),
                        Ok(false) => {}
                        Err(message) => {
                            tracing::warn!(
                                path = %entry.path().display(),
                                error = %message,
                                "unreadable entry"
                            );
                            collection.failures.push((entry.into_path(), message));
                        }
                    }
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    tracing::warn!(path = %path.display(), error = %e, "unreadable entry");
                    collection.failures.push((path, e.to_string()));
                }
            }
        }

        collection
    }

    /// 条目是否作为文件处理
    ///
    /// 符号链接不参与目录遍历，但目标是普通文件时按文件处理。
    fn classify(entry: &DirEntry) -> Result<bool, String> {
        if entry.file_type().is_file() {
            return Ok(true);
        }
        if !entry.path_is_symlink() {
            return Ok(false);
        }
        match fs::metadata(entry.path()) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) => Err(format!("broken symbolic link: {}", e)),
        }
    }

    fn matches(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => self.filter.matches(&name.to_string_lossy()),
            None => false,
        }
    }
}
