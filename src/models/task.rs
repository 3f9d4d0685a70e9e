//! # 文件任务数据模型
//!
//! 枚举阶段发现的单个文件，以及根据规范化结果计算出的目标路径。
//!
//! ## 依赖关系
//! - 使用 `normalizer/`
//! - 被 `batch/runner.rs` 使用

use crate::error::{Result, TidynameError};
use crate::normalizer::NormalizationResult;

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// 单个文件任务
///
/// 创建后不可变，由复制/重命名步骤消费一次。
#[derive(Debug, Clone)]
pub struct FileTask {
    /// 源文件路径
    pub source: PathBuf,
    /// 相对于扫描根目录的路径
    pub relative: PathBuf,
    /// 原扩展名（保留大小写，不含点）
    pub extension: Option<OsString>,
    /// stem 规范化结果
    pub name: NormalizationResult,
    /// 目标路径
    pub destination: PathBuf,
}

impl FileTask {
    /// 根据源文件计算任务
    ///
    /// `destination_root` 为 `None` 时目标位于源文件所在目录（原地重命名），
    /// 否则在 `destination_root` 下重建相对目录结构。
    pub fn plan(source_root: &Path, source: &Path, destination_root: Option<&Path>) -> Result<Self> {
        let relative = source
            .strip_prefix(source_root)
            .map_err(|_| {
                TidynameError::Other(format!(
                    "{} is not under {}",
                    source.display(),
                    source_root.display()
                ))
            })?
            .to_path_buf();

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| TidynameError::Other(format!("{} has no file name", source.display())))?;
        let extension = source.extension().map(|e| e.to_os_string());
        let name = NormalizationResult::new(&stem);

        let parent = match destination_root {
            Some(root) => match relative.parent() {
                Some(rel_parent) => root.join(rel_parent),
                None => root.to_path_buf(),
            },
            None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        let destination = parent.join(Self::file_name(&name.cleaned, extension.as_deref()));

        Ok(Self {
            source: source.to_path_buf(),
            relative,
            extension,
            name,
            destination,
        })
    }

    /// 目标目录
    pub fn destination_dir(&self) -> Option<&Path> {
        self.destination.parent()
    }

    /// 目标文件名（用于显示）
    pub fn destination_file_name(&self) -> String {
        self.destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn file_name(stem: &str, extension: Option<&OsStr>) -> OsString {
        let mut name = OsString::from(stem);
        if let Some(ext) = extension {
            name.push(".");
            name.push(ext);
        }
        name
    }
}
