//! # 数据模型模块
//!
//! 定义磁化轴、数据集目录布局、带单位物理量和推导结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/` 和 `commands/` 使用
//! - 子模块: axis, layout, quantity, result

pub mod axis;
pub mod layout;
pub mod quantity;
pub mod result;

pub use axis::{Axis, AxisEnergyMap};
pub use layout::DatasetLayout;
pub use quantity::{PhysicalUnit, Quantity};
pub use result::{AnisotropyResult, PipelineStage};
