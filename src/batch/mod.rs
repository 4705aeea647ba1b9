//! # 批量处理模块
//!
//! 在目录树中收集数据集主文件，并行运行推导流水线。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集匹配的主文件列表
//! - 并行处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, ProcessResult};
