//! # 各向异性推导结果数据模型
//!
//! 存储单个数据集经过推导流水线后的状态和结果。
//! 未到达的阶段对应的字段保持 `None`，不以 0 代替，
//! 以便区分“未计算”和“计算结果为零”。
//!
//! ## 依赖关系
//! - 被 `analysis/pipeline.rs` 填写
//! - 被 `commands/analyze.rs`, `commands/collect.rs` 输出

use super::quantity::Quantity;
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const K1_UNIT: &str = "J/m**3";
pub const MAGNETIZATION_UNIT: &str = "T";
pub const VOLUME_UNIT: &str = "angstrom**3";

/// 流水线阶段（按推进顺序排列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PipelineStage {
    Unvalidated,
    Validated,
    EnergiesAggregated,
    AnisotropyComputed,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStage::Unvalidated => write!(f, "unvalidated"),
            PipelineStage::Validated => write!(f, "validated"),
            PipelineStage::EnergiesAggregated => write!(f, "energies aggregated"),
            PipelineStage::AnisotropyComputed => write!(f, "anisotropy computed"),
        }
    }
}

/// 单个数据集的推导结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnisotropyResult {
    /// 数据集名称
    pub dataset: String,

    /// 已到达的阶段
    pub stage: PipelineStage,

    /// x 轴基态能量 (Ry)
    pub energy_x: Option<f64>,

    /// y 轴基态能量 (Ry)
    pub energy_y: Option<f64>,

    /// z 轴基态能量 (Ry)
    pub energy_z: Option<f64>,

    /// 晶胞体积 (Å³)
    pub unit_cell_volume_a3: Option<f64>,

    /// 饱和磁化强度 (T)
    pub magnetization_t: Option<f64>,

    /// (E_x - E_z) 差分 (MJ/m³)
    pub kxz_mj_per_m3: Option<f64>,

    /// (E_y - E_z) 差分 (MJ/m³)
    pub kyz_mj_per_m3: Option<f64>,

    /// 磁晶各向异性常数 K1 (J/m³)
    pub k1_j_per_m3: Option<f64>,
}

impl AnisotropyResult {
    pub fn new(dataset: impl Into<String>) -> Self {
        AnisotropyResult {
            dataset: dataset.into(),
            stage: PipelineStage::Unvalidated,
            energy_x: None,
            energy_y: None,
            energy_z: None,
            unit_cell_volume_a3: None,
            magnetization_t: None,
            kxz_mj_per_m3: None,
            kyz_mj_per_m3: None,
            k1_j_per_m3: None,
        }
    }

    /// K1，单位 `J/m**3`；未计算时为 `None`
    pub fn k1(&self) -> Result<Option<Quantity>> {
        self.k1_j_per_m3
            .map(|v| Quantity::new(v, K1_UNIT))
            .transpose()
    }

    /// 饱和磁化强度，单位 `T`
    pub fn magnetization(&self) -> Result<Option<Quantity>> {
        self.magnetization_t
            .map(|v| Quantity::new(v, MAGNETIZATION_UNIT))
            .transpose()
    }

    /// 晶胞体积，单位 `angstrom**3`
    pub fn unit_cell_volume(&self) -> Result<Option<Quantity>> {
        self.unit_cell_volume_a3
            .map(|v| Quantity::new(v, VOLUME_UNIT))
            .transpose()
    }
}
