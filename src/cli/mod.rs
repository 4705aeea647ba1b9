//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `check`: 校验数据集目录结构
//! - `analyze`: 对单个数据集推导 K1 和磁化强度
//! - `collect`: 批量收集数据集并汇总推导结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: check, analyze, collect

pub mod analyze;
pub mod check;
pub mod collect;

use crate::analysis::ValidationOptions;
use clap::{Args, Parser, Subcommand};

/// uutility - UU 磁性模拟数据集工具
#[derive(Parser)]
#[command(name = "uutility")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Recognize UU magnetic simulation datasets and derive the anisotropy constant K1",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a directory is a well-formed UU dataset
    Check(check::CheckArgs),

    /// Derive the anisotropy constant K1 and magnetization of one dataset
    Analyze(analyze::AnalyzeArgs),

    /// Find datasets under a directory tree and derive K1 for all of them
    Collect(collect::CollectArgs),
}

// ─────────────────────────────────────────────────────────────
// 目录校验选项（各子命令共享）
// ─────────────────────────────────────────────────────────────

/// 目录校验参数
#[derive(Args, Debug, Clone, Copy)]
pub struct ValidationArgs {
    /// Require a README file in the dataset root
    #[arg(long, default_value_t = false)]
    pub check_readme: bool,

    /// Do not require the GS, GS/x, GS/z, Jij and MC sub-folders
    #[arg(long, default_value_t = false)]
    pub skip_subfolders: bool,

    /// Do not probe the optional GS/y sub-folder (the y axis is then ignored)
    #[arg(long, default_value_t = false)]
    pub skip_optional_subfolders: bool,

    /// Do not require structure.cif
    #[arg(long, default_value_t = false)]
    pub skip_structure_cif: bool,

    /// Do not require GS/x/out_last and GS/z/out_last
    #[arg(long, default_value_t = false)]
    pub skip_out_last: bool,
}

impl From<ValidationArgs> for ValidationOptions {
    fn from(args: ValidationArgs) -> Self {
        ValidationOptions {
            check_readme: args.check_readme,
            check_subfolders: !args.skip_subfolders,
            check_optional_subfolders: !args.skip_optional_subfolders,
            check_structure_cif: !args.skip_structure_cif,
            check_out_last_files: !args.skip_out_last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_validation_flags() {
        let cli = Cli::parse_from(["uutility", "check", "/data/Fe2P"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected check subcommand");
        };
        assert_eq!(
            ValidationOptions::from(args.validation),
            ValidationOptions::default()
        );
    }

    #[test]
    fn test_validation_flags() {
        let cli = Cli::parse_from([
            "uutility",
            "analyze",
            "/data/Fe2P",
            "--check-readme",
            "--skip-optional-subfolders",
        ]);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze subcommand");
        };
        let options = ValidationOptions::from(args.validation);
        assert!(options.check_readme);
        assert!(!options.check_optional_subfolders);
        assert!(options.check_subfolders);
    }
}
