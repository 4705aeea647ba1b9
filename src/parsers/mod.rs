//! # 解析器模块
//!
//! 提供 UU 模拟输出文件的解析器和主文件识别。
//!
//! ## 依赖关系
//! - 被 `analysis/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: tagged, out_mf, out_last, mainfile

pub mod mainfile;
pub mod out_last;
pub mod out_mf;
pub mod tagged;

use crate::error::{Result, UuError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 读取文件的所有行
///
/// 文件在返回前已关闭；文件不存在时返回 `FileNotFound`。
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => UuError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => UuError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    Ok(content.lines().map(str::to_string).collect())
}
