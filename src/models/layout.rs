//! # 数据集目录布局
//!
//! 一个 UU 数据集以包含 `structure.cif` 的目录为根：
//!
//! ```text
//! <root>/
//!   ├── structure.cif
//!   ├── README            (可选)
//!   ├── GS/
//!   │     ├── x/  out_last, out_MF_x
//!   │     ├── y/  out_last, out_MF_y   (可选)
//!   │     └── z/  out_last, out_MF_z
//!   ├── Jij/
//!   └── MC/   posfile | jfile | momfile (至少一个)
//! ```
//!
//! ## 依赖关系
//! - 被 `analysis/validator.rs`, `analysis/energy.rs`, `analysis/pipeline.rs` 使用
//! - 使用 `models/axis.rs`

use super::axis::Axis;
use std::path::{Path, PathBuf};

pub const STRUCTURE_CIF: &str = "structure.cif";
pub const README: &str = "README";
pub const GS_DIR: &str = "GS";
pub const JIJ_DIR: &str = "Jij";
pub const MC_DIR: &str = "MC";
pub const OUT_LAST: &str = "out_last";

/// 必需的子目录（相对于根目录）
pub const MANDATORY_SUBFOLDERS: [&str; 5] = [GS_DIR, "GS/x", "GS/z", JIJ_DIR, MC_DIR];

/// 可选的子目录
pub const OPTIONAL_SUBFOLDERS: [&str; 1] = ["GS/y"];

/// MC 目录下的伴随文件，至少存在一个
pub const MC_COMPANION_FILES: [&str; 3] = ["posfile", "jfile", "momfile"];

/// 数据集目录布局，所有路径由显式传入的根目录推导
#[derive(Debug, Clone)]
pub struct DatasetLayout {
    root: PathBuf,
}

impl DatasetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DatasetLayout { root: root.into() }
    }

    /// 从主文件 `structure.cif` 的路径得到布局
    pub fn from_mainfile(mainfile: &Path) -> Self {
        let root = mainfile
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        DatasetLayout::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 数据集名称（根目录名）
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    pub fn structure_cif(&self) -> PathBuf {
        self.root.join(STRUCTURE_CIF)
    }

    pub fn readme(&self) -> PathBuf {
        self.root.join(README)
    }

    pub fn subfolder(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn axis_dir(&self, axis: Axis) -> PathBuf {
        self.root.join(GS_DIR).join(axis.label())
    }

    pub fn out_last(&self, axis: Axis) -> PathBuf {
        self.axis_dir(axis).join(OUT_LAST)
    }

    /// 平均场输出 `GS/<axis>/out_MF_<axis>`
    pub fn out_mf(&self, axis: Axis) -> PathBuf {
        self.axis_dir(axis).join(format!("out_MF_{}", axis.label()))
    }

    pub fn mc_file(&self, name: &str) -> PathBuf {
        self.root.join(MC_DIR).join(name)
    }
}
