//! # analyze 命令实现
//!
//! 对单个数据集运行推导流水线，输出基态能量、晶胞体积、磁化强度和 K1。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 使用 `analysis/pipeline.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::analysis::{pipeline, ValidationOptions};
use crate::cli::analyze::AnalyzeArgs;
use crate::error::{Result, UuError};
use crate::models::{AnisotropyResult, Axis, PhysicalUnit, Quantity};
use crate::utils::{output, progress};

use tabled::{Table, Tabled};

/// 基态能量表格行
#[derive(Debug, Clone, Tabled)]
struct EnergyRow {
    #[tabled(rename = "Axis")]
    axis: String,
    #[tabled(rename = "Eigenvalue sum (Ry)")]
    energy: String,
    #[tabled(rename = "K_az (MJ/m³)")]
    difference: String,
}

/// 执行 analyze 命令
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    output::print_header("Deriving Magnetic Anisotropy");

    if !args.dataset_dir.is_dir() {
        return Err(UuError::DirectoryNotFound {
            path: args.dataset_dir.display().to_string(),
        });
    }

    let options = ValidationOptions::from(args.validation);
    let spinner = progress::create_spinner(&format!("Processing '{}'", args.dataset_dir.display()));
    let report = pipeline::run(&args.dataset_dir, options);
    spinner.finish_and_clear();

    if !report.is_valid() {
        return Err(UuError::InvalidArgument(format!(
            "'{}' is not a valid dataset (run `uutility check` for details)",
            args.dataset_dir.display()
        )));
    }

    let result = &report.result;
    output::print_info(&format!("Dataset '{}': {}", result.dataset, result.stage));

    let rows = energy_rows(result);
    if !rows.is_empty() {
        println!("{}", Table::new(rows));
        println!();
    }

    output::print_quantity("Unit cell volume", result.unit_cell_volume()?);
    output::print_quantity("Magnetization Ms", result.magnetization()?);
    output::print_quantity("Anisotropy constant K1", result.k1()?);
    println!();

    match report.error {
        Some(e) => Err(e),
        None => {
            output::print_done("Anisotropy constant (max of all differences) derived");
            Ok(())
        }
    }
}

fn energy_rows(result: &AnisotropyResult) -> Vec<EnergyRow> {
    let fmt = |v: Option<f64>| v.map(|v| format!("{:.6}", v)).unwrap_or_else(|| "-".to_string());

    [
        (Axis::X, result.energy_x, result.kxz_mj_per_m3),
        (Axis::Y, result.energy_y, result.kyz_mj_per_m3),
        (Axis::Z, result.energy_z, None),
    ]
    .into_iter()
    .filter(|(_, energy, _)| energy.is_some())
    .map(|(axis, energy, difference)| EnergyRow {
        axis: axis.to_string(),
        energy: fmt(energy),
        difference: match axis {
            Axis::Z => "reference".to_string(),
            _ => difference
                .map(|d| Quantity::with_unit(d, PhysicalUnit::MegajoulePerCubicMetre).to_string())
                .unwrap_or_else(|| "-".to_string()),
        },
    })
    .collect()
}
