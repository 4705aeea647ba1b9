//! # 基态能量汇总
//!
//! 读取至多三个轴的平均场输出 `GS/<axis>/out_MF_<axis>`，
//! 每个轴提取一个标量能量，构建 `AxisEnergyMap`。
//!
//! ## 依赖关系
//! - 被 `analysis/pipeline.rs` 使用
//! - 使用 `parsers/out_mf.rs`, `parsers/read_lines`
//! - 使用 `models/axis.rs`, `models/layout.rs`

use crate::error::Result;
use crate::models::{Axis, AxisEnergyMap, DatasetLayout};
use crate::parsers::{self, out_mf};
use std::collections::BTreeMap;

/// 已读入内存的原始文件
#[derive(Debug, Clone)]
pub struct RawFile {
    /// 文件名（用于错误信息）
    pub name: String,
    pub lines: Vec<String>,
}

impl RawFile {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        RawFile {
            name: name.into(),
            lines,
        }
    }
}

/// 每个轴的平均场输出；未提供的轴不参与汇总
#[derive(Debug, Clone, Default)]
pub struct GroundStateFiles {
    files: BTreeMap<Axis, RawFile>,
}

impl GroundStateFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// 提供某个轴的文件内容
    pub fn with_axis(mut self, axis: Axis, file: RawFile) -> Self {
        self.files.insert(axis, file);
        self
    }

    pub fn get(&self, axis: Axis) -> Option<&RawFile> {
        self.files.get(&axis)
    }

    /// 读取给定轴的 out_MF 文件，文件缺失时返回 `FileNotFound`
    pub fn load(layout: &DatasetLayout, axes: &[Axis]) -> Result<Self> {
        let mut files = GroundStateFiles::new();
        for &axis in axes {
            let path = layout.out_mf(axis);
            let lines = parsers::read_lines(&path)?;
            files = files.with_axis(axis, RawFile::new(path.display().to_string(), lines));
        }
        Ok(files)
    }
}

/// 汇总每个轴的基态能量
pub fn aggregate(files: &GroundStateFiles) -> Result<AxisEnergyMap> {
    let mut builder = AxisEnergyMap::builder();

    for axis in Axis::ALL {
        if let Some(file) = files.get(axis) {
            let energy = out_mf::parse_eigenvalue_sum(&file.lines, &file.name)?;
            builder = builder.energy(axis, energy);
        }
    }

    let energies = builder.build();
    log::info!("Ground-state energies: {}", energies);
    Ok(energies)
}
