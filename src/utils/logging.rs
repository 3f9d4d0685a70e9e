//! # 日志初始化
//!
//! 使用 `tracing-subscriber` 输出诊断日志到 stderr。
//! 终端面向用户的消息仍由 `utils/output.rs` 负责。
//!
//! 日志级别由 `-v` 次数决定，`TIDYNAME_LOG` 环境变量优先。
//!
//! 进度条显示期间，每条日志都在 `ProgressBar::suspend` 中写出，
//! 避免与进度条互相覆盖。命令通过 `route_through` 登记当前进度条。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 调用
//! - 使用 `tracing-subscriber`, `indicatif`, `anyhow`

use anyhow::anyhow;
use indicatif::ProgressBar;
use std::env;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// 日志级别环境变量
pub const LOG_ENV: &str = "TIDYNAME_LOG";

/// 当前显示中的进度条
static ACTIVE_BAR: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// `-v` 次数对应的默认过滤级别
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// 初始化全局日志
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = match env::var(LOG_ENV) {
        Ok(spec) => EnvFilter::try_new(&spec)
            .map_err(|e| anyhow!("invalid {} value '{}': {}", LOG_ENV, spec, e))?,
        Err(_) => EnvFilter::new(level_for(verbosity)),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(BarAwareStderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}

/// 登记进度条的守卫，drop 时恢复之前的登记
pub struct BarGuard {
    previous: Option<ProgressBar>,
}

impl Drop for BarGuard {
    fn drop(&mut self) {
        *lock_bar() = self.previous.take();
    }
}

/// 守卫存活期间，日志先挂起 `pb` 再写出
pub fn route_through(pb: &ProgressBar) -> BarGuard {
    let previous = lock_bar().replace(pb.clone());
    BarGuard { previous }
}

fn lock_bar() -> std::sync::MutexGuard<'static, Option<ProgressBar>> {
    ACTIVE_BAR.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 挂起当前进度条执行 `f`；没有进度条时直接执行
fn with_bar_suspended<R>(f: impl FnOnce() -> R) -> R {
    // 先释放锁再挂起，`f` 内部可能再次记录日志
    let bar = lock_bar().clone();
    match bar {
        Some(pb) => pb.suspend(f),
        None => f(),
    }
}

/// stderr 的 `MakeWriter`，写入时挂起进度条
#[derive(Debug, Clone, Copy, Default)]
pub struct BarAwareStderr;

impl<'a> MakeWriter<'a> for BarAwareStderr {
    type Writer = SuspendingWriter<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        SuspendingWriter(io::stderr())
    }
}

/// 每次写入都在进度条挂起期间完成
#[derive(Debug)]
pub struct SuspendingWriter<W>(pub W);

impl<W: Write> Write for SuspendingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.0;
        with_bar_suspended(|| inner.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        let inner = &mut self.0;
        with_bar_suspended(|| inner.flush())
    }
}
