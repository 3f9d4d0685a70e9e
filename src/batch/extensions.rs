//! # 内置扩展名白名单
//!
//! 原地重命名模式默认只处理常见的媒体、文档、代码、压缩包等类型。
//! 匹配时统一转小写，因此列表中不需要大写重复项。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 和 `cli/rename.rs` 使用

use crate::error::{Result, TidynameError};

/// 图片类型
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp", ".svg",
];

/// 默认白名单
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    // Images
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp", ".svg",
    // Documents
    ".pdf", ".doc", ".docx", ".txt", ".rtf", ".odt",
    // Videos
    ".mp4", ".avi", ".mov", ".wmv", ".flv", ".mkv", ".mpg", ".mpeg",
    // Audio
    ".mp3", ".wav", ".flac", ".aac", ".ogg", ".wma",
    // Archives
    ".zip", ".rar", ".7z", ".tar", ".gz",
    // Office
    ".xlsx", ".xls", ".csv", ".ppt", ".pptx",
    // Code
    ".html", ".htm", ".css", ".js", ".php", ".py", ".java", ".cpp", ".c",
    // Config
    ".xml", ".json", ".yaml", ".yml", ".ini", ".cfg", ".conf",
    // Executables
    ".exe", ".msi", ".deb", ".rpm", ".dmg", ".pkg",
    // Disk images
    ".iso", ".img", ".bin", ".cue",
    // Fonts
    ".ttf", ".otf", ".woff", ".woff2", ".eot",
    // Design
    ".psd", ".ai", ".eps", ".sketch", ".fig",
    // Databases
    ".sql", ".db", ".sqlite", ".mdb", ".accdb",
    // System files
    ".log", ".bak", ".tmp", ".temp", ".cache",
    // Markup
    ".md", ".markdown", ".rst", ".tex", ".latex",
    // Scripts
    ".sh", ".bat", ".cmd", ".ps1", ".vbs",
    // Mobile/Apps
    ".apk", ".ipa", ".app",
    // 3D models
    ".3ds", ".obj", ".fbx", ".dae", ".blend", ".max", ".ma", ".mb",
    // Subtitles
    ".srt", ".sub", ".vtt", ".ass", ".ssa",
    // Torrents
    ".torrent", ".magnet",
    // Certificates
    ".key", ".pem", ".crt", ".cer", ".p12", ".pfx",
    // Libraries
    ".dll", ".so", ".dylib", ".lib", ".a",
    // C++ headers
    ".h", ".hpp", ".hxx", ".cxx", ".cc",
    // Other languages
    ".swift", ".kt", ".scala", ".rb", ".go", ".rs", ".dart",
    // Frontend frameworks
    ".vue", ".jsx", ".tsx", ".ts", ".svelte",
    // DevOps
    ".dockerfile", ".dockerignore", ".gitignore", ".gitattributes",
    // Build tools
    ".env", ".properties", ".toml", ".lock", ".gradle", ".maven",
];

/// 规范化扩展名列表：转小写、补全前导点、按首次出现去重
pub fn normalize_list<I, S>(extensions: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result: Vec<String> = Vec::new();
    for ext in extensions {
        let ext = ext.as_ref().trim();
        if ext.is_empty() {
            continue;
        }
        let ext = if ext.starts_with('.') {
            ext.to_lowercase()
        } else {
            format!(".{}", ext.to_lowercase())
        };
        if ext.len() < 2 || ext.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
            return Err(TidynameError::InvalidExtension(ext));
        }
        if !result.contains(&ext) {
            result.push(ext);
        }
    }

    if result.is_empty() {
        return Err(TidynameError::InvalidArgument(
            "extension list is empty".to_string(),
        ));
    }

    Ok(result)
}

/// 解析逗号分隔的扩展名列表（如 ".jpg,.png,pdf"）
pub fn parse_list(input: &str) -> Result<Vec<String>> {
    normalize_list(input.split(','))
}
