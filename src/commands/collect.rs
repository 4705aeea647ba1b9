//! # collect 命令实现
//!
//! 在目录树中收集数据集并批量推导 K1 和磁化强度。
//!
//! ## 功能
//! - 扫描 structure.cif / cube.dat 主文件
//! - 并行运行每个 UU 数据集的推导流水线
//! - 终端表格汇总
//! - 输出 CSV（未计算的字段留空）
//!
//! ## 依赖关系
//! - 使用 `cli/collect.rs` 定义的参数
//! - 使用 `batch/`, `analysis/pipeline.rs`, `parsers/mainfile.rs`
//! - 使用 `utils/output.rs`

use crate::analysis::{pipeline, ValidationOptions};
use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::collect::CollectArgs;
use crate::error::{Result, UuError};
use crate::models::layout::STRUCTURE_CIF;
use crate::models::{AnisotropyResult, DatasetLayout};
use crate::parsers::mainfile::{self, MainfileKind};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Dataset")]
    dataset: String,
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Ms (T)")]
    magnetization: String,
    #[tabled(rename = "K1 (J/m³)")]
    k1: String,
}

impl From<&AnisotropyResult> for SummaryRow {
    fn from(r: &AnisotropyResult) -> Self {
        SummaryRow {
            dataset: r.dataset.clone(),
            stage: r.stage.to_string(),
            magnetization: r
                .magnetization_t
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "-".to_string()),
            k1: r
                .k1_j_per_m3
                .map(|v| format!("{:.4e}", v))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// 执行 collect 命令
pub fn execute(args: CollectArgs) -> Result<()> {
    output::print_header("Collecting Anisotropy Results");

    // 验证目录
    if !args.root_dir.exists() {
        return Err(UuError::DirectoryNotFound {
            path: args.root_dir.display().to_string(),
        });
    }

    let files = FileCollector::new(args.root_dir.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No mainfiles matching '{}' found in '{}'",
            args.pattern,
            args.root_dir.display()
        ));
        return Ok(());
    }

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Found {} candidate mainfiles, using {} threads",
        files.len(),
        runner.jobs()
    ));

    let options = ValidationOptions::from(args.validation);
    let batch = runner.run(files, |path| process_mainfile(path, &options))?;

    for (path, reason) in &batch.skips {
        output::print_skip(&format!("{}: {}", path, reason));
    }
    for (dataset, err) in &batch.failures {
        output::print_warning(&format!("{}: {}", dataset, err));
    }

    if batch.results.is_empty() {
        output::print_warning("No valid datasets found to derive.");
        return Ok(());
    }

    let rows: Vec<SummaryRow> = batch.results.iter().map(SummaryRow::from).collect();
    println!("\n{}\n", Table::new(rows));

    save_results_csv(&batch.results, &args.output)?;
    output::print_success(&format!("Results saved to '{}'", args.output.display()));

    output::print_done(&format!(
        "{}/{} derived, {} failed, {} skipped",
        batch.computed,
        batch.total(),
        batch.failed,
        batch.skipped
    ));

    Ok(())
}

/// 处理单个候选主文件
fn process_mainfile(path: &Path, options: &ValidationOptions) -> ProcessResult {
    let display = path.display().to_string();

    match mainfile::recognize(path, options) {
        Some(MainfileKind::UuDataset) => {
            let layout = DatasetLayout::from_mainfile(path);
            let report = pipeline::run(layout.root(), *options);
            match report.error {
                Some(e) => ProcessResult::Failed(report.result, e.to_string()),
                None => ProcessResult::Computed(report.result),
            }
        }
        Some(kind @ MainfileKind::Cube) => {
            ProcessResult::Skipped(display, format!("{} data carries no anisotropy", kind))
        }
        None => {
            let reason = if path.file_name().and_then(|n| n.to_str()) == Some(STRUCTURE_CIF) {
                "incomplete dataset layout"
            } else {
                "not a recognized mainfile"
            };
            ProcessResult::Skipped(display, reason.to_string())
        }
    }
}

/// 保存结果到 CSV
fn save_results_csv(results: &[AnisotropyResult], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for r in results {
        wtr.serialize(r)?;
    }

    wtr.flush().map_err(|e| UuError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
