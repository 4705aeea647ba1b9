//! # 带单位的物理量
//!
//! 结果写入时需要附带物理单位；单位字符串不可识别时返回 `UnknownUnit`。
//!
//! ## 依赖关系
//! - 被 `models/result.rs`, `commands/analyze.rs` 使用

use crate::error::{Result, UuError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 支持的物理单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicalUnit {
    /// J/m³
    JoulePerCubicMetre,
    /// MJ/m³
    MegajoulePerCubicMetre,
    /// T
    Tesla,
    /// Å³
    CubicAngstrom,
    /// nm
    Nanometre,
}

impl PhysicalUnit {
    /// 规范的单位字符串
    pub fn symbol(self) -> &'static str {
        match self {
            PhysicalUnit::JoulePerCubicMetre => "J/m**3",
            PhysicalUnit::MegajoulePerCubicMetre => "MJ/m**3",
            PhysicalUnit::Tesla => "T",
            PhysicalUnit::CubicAngstrom => "angstrom**3",
            PhysicalUnit::Nanometre => "nm",
        }
    }
}

impl FromStr for PhysicalUnit {
    type Err = UuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "J/m**3" | "J/m^3" | "J/m³" => Ok(PhysicalUnit::JoulePerCubicMetre),
            "MJ/m**3" | "MJ/m^3" | "MJ/m³" => Ok(PhysicalUnit::MegajoulePerCubicMetre),
            "T" | "tesla" => Ok(PhysicalUnit::Tesla),
            "angstrom**3" | "Å**3" | "Å³" | "A^3" => Ok(PhysicalUnit::CubicAngstrom),
            "nm" | "nanometer" => Ok(PhysicalUnit::Nanometre),
            other => Err(UuError::UnknownUnit(other.to_string())),
        }
    }
}

impl std::fmt::Display for PhysicalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 物理量：数值 + 单位
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: PhysicalUnit,
}

impl Quantity {
    /// 由单位字符串构造，单位不可识别时报错
    pub fn new(value: f64, unit: &str) -> Result<Self> {
        Ok(Quantity {
            value,
            unit: unit.parse()?,
        })
    }

    pub fn with_unit(value: f64, unit: PhysicalUnit) -> Self {
        Quantity { value, unit }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*e} {}", p, self.value, self.unit),
            None => write!(f, "{} {}", self.value, self.unit),
        }
    }
}
