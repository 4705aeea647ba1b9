//! # 单个数据集的推导流水线
//!
//! 状态机：
//!
//! ```text
//! Unvalidated → Validated → EnergiesAggregated → AnisotropyComputed
//! ```
//!
//! 任一前置条件不满足时停留在最后到达的阶段，后续结果字段保持未设置。
//! 错误不在流水线内部恢复，而是记录在报告中交给调用方。
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs`, `commands/collect.rs` 使用
//! - 使用 `analysis/validator.rs`, `analysis/energy.rs`, `analysis/anisotropy.rs`
//! - 使用 `parsers/out_last.rs`

use super::anisotropy::{self, Derivation};
use super::energy::{self, GroundStateFiles};
use super::validator::{self, ValidationOptions};
use crate::error::{Result, UuError};
use crate::models::{AnisotropyResult, Axis, AxisEnergyMap, DatasetLayout, PipelineStage};
use crate::parsers::{self, out_last};
use std::path::Path;

/// 单个数据集的处理报告
#[derive(Debug)]
pub struct DatasetReport {
    pub result: AnisotropyResult,
    /// 推导失败的原因；校验未通过不算错误
    pub error: Option<UuError>,
}

impl DatasetReport {
    pub fn is_valid(&self) -> bool {
        self.result.stage >= PipelineStage::Validated
    }
}

/// 单个数据集的流水线，独占其所有中间结果
pub struct DatasetPipeline {
    layout: DatasetLayout,
    options: ValidationOptions,
    result: AnisotropyResult,
    axes: Vec<Axis>,
}

impl DatasetPipeline {
    pub fn new(root: &Path, options: ValidationOptions) -> Self {
        let layout = DatasetLayout::new(root);
        let result = AnisotropyResult::new(layout.name());
        DatasetPipeline {
            layout,
            options,
            result,
            axes: Vec::new(),
        }
    }

    /// 运行整个流水线
    pub fn run(mut self) -> DatasetReport {
        let error = self.advance().err();
        if let Some(ref e) = error {
            log::warn!(
                "Derivation for '{}' stopped at stage '{}': {}",
                self.result.dataset,
                self.result.stage,
                e
            );
        }
        DatasetReport {
            result: self.result,
            error,
        }
    }

    fn advance(&mut self) -> Result<()> {
        if !self.validate() {
            return Ok(());
        }
        let energies = self.aggregate()?;
        let derivation = self.compute(&energies)?;
        self.record(&derivation);
        Ok(())
    }

    /// Unvalidated → Validated
    fn validate(&mut self) -> bool {
        let report = validator::inspect(self.layout.root(), &self.options);
        if !report.is_valid() {
            log::info!(
                "'{}' is not a valid dataset: {:?}",
                self.layout.root().display(),
                report
            );
            return false;
        }

        self.axes = vec![Axis::X, Axis::Z];
        if report.y_axis_present() == Some(true) {
            self.axes.insert(1, Axis::Y);
        }

        self.result.stage = PipelineStage::Validated;
        log::info!("'{}' validated, axes {:?}", self.result.dataset, self.axes);
        true
    }

    /// Validated → EnergiesAggregated
    fn aggregate(&mut self) -> Result<AxisEnergyMap> {
        let files = GroundStateFiles::load(&self.layout, &self.axes)?;
        let energies = energy::aggregate(&files)?;

        self.result.energy_x = energies.get(Axis::X);
        self.result.energy_y = energies.get(Axis::Y);
        self.result.energy_z = energies.get(Axis::Z);
        self.result.stage = PipelineStage::EnergiesAggregated;
        Ok(energies)
    }

    /// EnergiesAggregated → AnisotropyComputed 的计算部分
    fn compute(&self, energies: &AxisEnergyMap) -> Result<Derivation> {
        if !energies.contains(Axis::Z) || !(energies.contains(Axis::X) || energies.contains(Axis::Y))
        {
            return Err(UuError::InsufficientAxes {
                found: energies.to_string(),
            });
        }

        // 各轴目录中的 out_last 等价，取第一个参与的轴
        let out_last_path = self.layout.out_last(self.axes[0]);
        let source = out_last_path.display().to_string();
        let lines = parsers::read_lines(&out_last_path)?;

        let total_moments = out_last::parse_total_moments(&lines, &source)?;
        let direction_of_j = out_last::parse_direction_of_j(&lines, &source)?;

        anisotropy::compute(&total_moments, &direction_of_j, &lines, &source, energies)
    }

    fn record(&mut self, derivation: &Derivation) {
        let differences = &derivation.anisotropy.differences;
        self.result.unit_cell_volume_a3 = Some(derivation.unit_cell_volume_a3);
        self.result.magnetization_t = Some(derivation.magnetization_t);
        self.result.kxz_mj_per_m3 = differences.get(&Axis::X).copied();
        self.result.kyz_mj_per_m3 = differences.get(&Axis::Y).copied();
        self.result.k1_j_per_m3 = Some(derivation.k1());
        self.result.stage = PipelineStage::AnisotropyComputed;
    }
}

/// 对数据集根目录运行流水线
pub fn run(root: &Path, options: ValidationOptions) -> DatasetReport {
    DatasetPipeline::new(root, options).run()
}
