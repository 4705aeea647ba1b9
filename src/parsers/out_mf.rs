//! # 平均场输出 out_MF_{x,y,z} 解析器
//!
//! 提取 `Eigenvalue sum:` 行的第一个数值，作为该轴的基态能量。
//!
//! ```text
//!  Eigenvalue sum:   -12345.678901
//! ```
//!
//! ## 依赖关系
//! - 被 `analysis/energy.rs` 使用
//! - 使用 `parsers/tagged.rs`

use super::tagged;
use crate::error::Result;

pub const EIGENVALUE_SUM_TAG: &str = "Eigenvalue sum:";

/// 解析 out_MF 文件内容中的本征值和
pub fn parse_eigenvalue_sum<S: AsRef<str>>(lines: &[S], source: &str) -> Result<f64> {
    let table = tagged::extract(lines, EIGENVALUE_SUM_TAG, source)?;
    let energy = table.sole_first_value()?;
    log::debug!("{}: {} {}", source, EIGENVALUE_SUM_TAG, energy);
    Ok(energy)
}
