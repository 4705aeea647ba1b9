//! # check 子命令 CLI 定义
//!
//! 校验数据集目录结构并列出每项检查的结果
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use super::ValidationArgs;
use clap::Args;
use std::path::PathBuf;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Dataset root directory (the folder containing structure.cif)
    pub dataset_dir: PathBuf,

    #[command(flatten)]
    pub validation: ValidationArgs,
}
