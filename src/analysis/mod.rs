//! # 磁各向异性推导模块
//!
//! 从 UU 数据集的模拟输出推导磁晶各向异性常数 K1 和磁化强度。
//!
//! ## 模块结构
//! - `validator`: 数据集目录结构校验
//! - `energy`: 基态能量汇总
//! - `magnetization`: 晶胞体积与磁化强度
//! - `anisotropy`: 各向异性常数 K1
//! - `pipeline`: 单个数据集的状态机
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `parsers/mainfile.rs` 使用
//! - 使用 `parsers/`, `models/`

pub mod anisotropy;
pub mod energy;
pub mod magnetization;
pub mod pipeline;
pub mod validator;

pub use validator::ValidationOptions;
