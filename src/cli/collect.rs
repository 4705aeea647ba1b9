//! # collect 子命令 CLI 定义
//!
//! 在目录树中收集数据集主文件，批量推导并输出 CSV
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/collect.rs`

use super::ValidationArgs;
use crate::batch::collector::DEFAULT_PATTERN;
use clap::Args;
use std::path::PathBuf;

/// collect 子命令参数
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Root directory to search for dataset mainfiles
    pub root_dir: PathBuf,

    /// Recurse into all subdirectories (default: datasets directly under the root)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Comma-separated mainfile name patterns
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Filename for the CSV summary
    #[arg(short, long, default_value = "anisotropy_results.csv")]
    pub output: PathBuf,

    #[command(flatten)]
    pub validation: ValidationArgs,
}
