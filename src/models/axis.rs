//! # 磁化轴与基态能量数据模型
//!
//! `Axis` 表示基态计算中磁矩所沿的笛卡尔轴，
//! `AxisEnergyMap` 保存每个轴的基态能量（`Eigenvalue sum:`）。
//!
//! ## 依赖关系
//! - 被 `analysis/energy.rs`, `analysis/anisotropy.rs` 使用
//! - 被 `models/layout.rs` 使用（轴对应的子目录）

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 磁化方向（笛卡尔轴）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// 所有轴，按 x, y, z 顺序
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// 轴标签（同时也是 GS 下的子目录名）
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 每个轴的基态能量
///
/// 只能通过 [`AxisEnergyMapBuilder`] 构建，构建后不可修改。
/// 某个轴不存在仅表示该轴的文件未提供。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisEnergyMap {
    energies: BTreeMap<Axis, f64>,
}

impl AxisEnergyMap {
    pub fn builder() -> AxisEnergyMapBuilder {
        AxisEnergyMapBuilder::default()
    }

    pub fn get(&self, axis: Axis) -> Option<f64> {
        self.energies.get(&axis).copied()
    }

    pub fn contains(&self, axis: Axis) -> bool {
        self.energies.contains_key(&axis)
    }

    /// 已有能量的轴，按 x, y, z 顺序
    pub fn axes(&self) -> Vec<Axis> {
        self.energies.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        self.energies.iter().map(|(a, e)| (*a, *e))
    }
}

impl std::fmt::Display for AxisEnergyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(axis, e)| format!("{}: {}", axis, e))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// `AxisEnergyMap` 构建器
#[derive(Debug, Default)]
pub struct AxisEnergyMapBuilder {
    energies: BTreeMap<Axis, f64>,
}

impl AxisEnergyMapBuilder {
    /// 设置某个轴的能量
    pub fn energy(mut self, axis: Axis, energy: f64) -> Self {
        self.energies.insert(axis, energy);
        self
    }

    pub fn build(self) -> AxisEnergyMap {
        AxisEnergyMap {
            energies: self.energies,
        }
    }
}
