//! # analyze 子命令 CLI 定义
//!
//! 对单个数据集运行推导流水线
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyze.rs`

use super::ValidationArgs;
use clap::Args;
use std::path::PathBuf;

/// analyze 子命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Dataset root directory (the folder containing structure.cif)
    pub dataset_dir: PathBuf,

    #[command(flatten)]
    pub validation: ValidationArgs,
}
