//! # 最后一次迭代输出 out_last 解析器
//!
//! 提取每个原子位点的总磁矩、总角动量 J 的方向以及晶胞体积。
//!
//! ```text
//!  Fe1   Total moment [J=L+S] (mu_B):     2.2051
//!  Fe1   Direction of J (Cartesian):      0.0000   0.0000   1.0000
//!  cell  unit cell volume:              675.3912
//! ```
//!
//! ## 依赖关系
//! - 被 `analysis/magnetization.rs`, `analysis/pipeline.rs` 使用
//! - 使用 `parsers/tagged.rs`

use super::tagged::{self, TaggedValueTable};
use crate::error::Result;

pub const TOTAL_MOMENT_TAG: &str = "Total moment [J=L+S] (mu_B):";
pub const DIRECTION_OF_J_TAG: &str = "Direction of J (Cartesian):";
pub const UNIT_CELL_VOLUME_TAG: &str = "unit cell volume:";

/// 每个位点的总磁矩 (μB)
pub fn parse_total_moments<S: AsRef<str>>(lines: &[S], source: &str) -> Result<TaggedValueTable> {
    tagged::extract(lines, TOTAL_MOMENT_TAG, source)
}

/// 每个位点的 J 方向（笛卡尔分量）
pub fn parse_direction_of_j<S: AsRef<str>>(lines: &[S], source: &str) -> Result<TaggedValueTable> {
    tagged::extract(lines, DIRECTION_OF_J_TAG, source)
}

/// 晶胞体积（原始单位 bohr³），要求恰好一个标识符
pub fn parse_unit_cell_volume<S: AsRef<str>>(lines: &[S], source: &str) -> Result<f64> {
    tagged::extract(lines, UNIT_CELL_VOLUME_TAG, source)?.sole_first_value()
}
