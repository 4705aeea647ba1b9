//! # 主文件识别
//!
//! 决定某个文件是否触发整个数据集的解析：
//! - `structure.cif`，且所在目录通过结构校验 -> UU 数据集
//! - `cube.dat` -> cube 数据（仅按文件名匹配）
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 使用
//! - 使用 `analysis/validator.rs`

use crate::analysis::validator::{self, ValidationOptions};
use crate::models::layout::STRUCTURE_CIF;
use crate::models::DatasetLayout;
use std::path::Path;

pub const CUBE_DAT: &str = "cube.dat";

/// 主文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainfileKind {
    /// 以 structure.cif 为根的 UU 数据集
    UuDataset,
    /// cube.dat
    Cube,
}

impl std::fmt::Display for MainfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainfileKind::UuDataset => write!(f, "UU dataset"),
            MainfileKind::Cube => write!(f, "cube"),
        }
    }
}

/// 识别主文件
pub fn recognize(path: &Path, options: &ValidationOptions) -> Option<MainfileKind> {
    let name = path.file_name()?.to_str()?;

    match name {
        STRUCTURE_CIF => {
            let layout = DatasetLayout::from_mainfile(path);
            validator::validate(layout.root(), options).then_some(MainfileKind::UuDataset)
        }
        CUBE_DAT => Some(MainfileKind::Cube),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_recognize_structure_cif() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for sub in ["GS/x", "GS/z", "Jij", "MC"] {
            fs::create_dir_all(root.join(sub)).unwrap();
        }
        for file in ["structure.cif", "MC/jfile", "GS/x/out_last", "GS/z/out_last"] {
            fs::write(root.join(file), "").unwrap();
        }

        let options = ValidationOptions::default();
        assert_eq!(
            recognize(&root.join("structure.cif"), &options),
            Some(MainfileKind::UuDataset)
        );

        fs::remove_dir_all(root.join("Jij")).unwrap();
        assert_eq!(recognize(&root.join("structure.cif"), &options), None);
    }

    #[test]
    fn test_recognize_by_name() {
        let options = ValidationOptions::default();
        assert_eq!(
            recognize(Path::new("/data/run1/cube.dat"), &options),
            Some(MainfileKind::Cube)
        );
        assert_eq!(recognize(Path::new("/data/run1/cube.dat.bak"), &options), None);
        assert_eq!(recognize(Path::new("/data/run1/other.cif"), &options), None);
        assert_eq!(
            recognize(Path::new("/nonexistent/structure.cif"), &options),
            None
        );
    }
}
