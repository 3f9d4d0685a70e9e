//! # 统一错误处理模块
//!
//! 定义 tidyname 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 校验错误：批处理开始前直接返回，不处理任何文件
//! - 单文件错误：在批处理循环中被捕获，写入 `BatchReport`，不会中断批处理
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// tidyname 统一错误类型
#[derive(Error, Debug)]
pub enum TidynameError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid extension '{0}'")]
    InvalidExtension(String),

    #[error("Input and output resolve to the same directory: {path}")]
    SameRoots { path: String },

    // ─────────────────────────────────────────────────────────────
    // 单文件处理错误
    // ─────────────────────────────────────────────────────────────
    #[error("Error processing {path}: {source}")]
    CopyFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error renaming {path}: {source}")]
    RenameFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl TidynameError {
    /// 是否为批处理开始前的校验错误
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TidynameError::DirectoryNotFound { .. }
                | TidynameError::NotADirectory { .. }
                | TidynameError::MissingArgument(_)
                | TidynameError::InvalidArgument(_)
                | TidynameError::InvalidExtension(_)
                | TidynameError::SameRoots { .. }
        )
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TidynameError>;
