//! # check 命令实现
//!
//! 逐项列出数据集目录结构的检查结果。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `analysis/validator.rs`
//! - 使用 `utils/output.rs`

use crate::analysis::validator::{self, ValidationOptions, ValidationReport};
use crate::cli::check::CheckArgs;
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 检查项表格行
#[derive(Debug, Clone, Tabled)]
struct CheckRow {
    #[tabled(rename = "Check")]
    check: String,
    #[tabled(rename = "Required")]
    required: String,
    #[tabled(rename = "Result")]
    result: String,
}

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Checking Dataset Layout");

    let options = ValidationOptions::from(args.validation);
    let report = validator::inspect(&args.dataset_dir, &options);

    println!("{}", Table::new(check_rows(&report)));
    println!();

    if report.main_folder_exists {
        match report.y_axis_present() {
            Some(true) => output::print_info("Optional GS/y found: the y axis will be used"),
            Some(false) => output::print_info("Optional GS/y not found: using x and z only"),
            None => output::print_skip("Optional sub-folders not checked"),
        }
    }

    output::print_verdict(&args.dataset_dir.display().to_string(), report.is_valid());
    Ok(())
}

fn check_rows(report: &ValidationReport) -> Vec<CheckRow> {
    fn row(check: &str, required: bool, result: Option<bool>) -> CheckRow {
        CheckRow {
            check: check.to_string(),
            required: if required { "yes" } else { "no" }.to_string(),
            result: match result {
                Some(true) => "found".to_string(),
                Some(false) => "missing".to_string(),
                None => "not checked".to_string(),
            },
        }
    }

    let mut rows = vec![
        row("dataset directory", true, Some(report.main_folder_exists)),
        row("README", report.readme_exists.is_some(), report.readme_exists),
        row(
            "GS, GS/x, GS/z, Jij, MC",
            true,
            report.mandatory_subfolders_exist,
        ),
        row("structure.cif", true, report.structure_cif_exists),
        row("GS/x/out_last", true, report.out_last_x_exists),
        row("GS/z/out_last", true, report.out_last_z_exists),
        row(
            "MC/posfile | jfile | momfile",
            true,
            report
                .main_folder_exists
                .then_some(report.mc_companion_exists),
        ),
    ];

    match &report.optional_subfolders {
        Some(subs) => {
            for (name, exists) in subs {
                rows.push(row(name, false, Some(*exists)));
            }
        }
        None => rows.push(row("GS/y", false, None)),
    }

    rows
}
