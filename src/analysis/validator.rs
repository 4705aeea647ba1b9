//! # 数据集目录结构校验
//!
//! 检查数据集的目录布局和必需的伴随文件，判断能否运行推导流水线。
//! 只做只读的文件系统探测；缺失的文件或文件夹编码为 `false`，从不报错。
//!
//! ## 依赖关系
//! - 被 `analysis/pipeline.rs`, `parsers/mainfile.rs`, `commands/check.rs` 使用
//! - 使用 `models/layout.rs`

use crate::models::layout::{MANDATORY_SUBFOLDERS, MC_COMPANION_FILES, OPTIONAL_SUBFOLDERS};
use crate::models::{Axis, DatasetLayout};
use std::path::Path;

/// 校验选项
///
/// 关闭的检查项视为通过，不会使数据集无效。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// 要求存在 README
    pub check_readme: bool,
    /// 要求存在 GS, GS/x, GS/z, Jij, MC
    pub check_subfolders: bool,
    /// 探测可选的 GS/y（仅提供信息，不影响结果）
    pub check_optional_subfolders: bool,
    /// 要求存在 structure.cif
    pub check_structure_cif: bool,
    /// 要求存在 GS/x/out_last 和 GS/z/out_last
    pub check_out_last_files: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            check_readme: false,
            check_subfolders: true,
            check_optional_subfolders: true,
            check_structure_cif: true,
            check_out_last_files: true,
        }
    }
}

/// 各项检查的结果；`None` 表示该项未检查
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub main_folder_exists: bool,
    pub readme_exists: Option<bool>,
    pub mandatory_subfolders_exist: Option<bool>,
    pub optional_subfolders: Option<Vec<(String, bool)>>,
    pub structure_cif_exists: Option<bool>,
    pub out_last_x_exists: Option<bool>,
    pub out_last_z_exists: Option<bool>,
    pub mc_companion_exists: bool,
}

impl ValidationReport {
    fn missing_root() -> Self {
        ValidationReport {
            main_folder_exists: false,
            readme_exists: None,
            mandatory_subfolders_exist: None,
            optional_subfolders: None,
            structure_cif_exists: None,
            out_last_x_exists: None,
            out_last_z_exists: None,
            mc_companion_exists: false,
        }
    }

    /// 所有检查项的逻辑与
    pub fn is_valid(&self) -> bool {
        self.main_folder_exists
            && self.readme_exists.unwrap_or(true)
            && self.mandatory_subfolders_exist.unwrap_or(true)
            && self.structure_cif_exists.unwrap_or(true)
            && self.out_last_x_exists.unwrap_or(true)
            && self.out_last_z_exists.unwrap_or(true)
            && self.mc_companion_exists
    }

    /// GS/y 是否存在（未检查时为 `None`）
    pub fn y_axis_present(&self) -> Option<bool> {
        self.optional_subfolders.as_ref().and_then(|subs| {
            subs.iter()
                .find(|(name, _)| name == "GS/y")
                .map(|(_, exists)| *exists)
        })
    }
}

/// 校验数据集目录
pub fn validate(root: &Path, options: &ValidationOptions) -> bool {
    inspect(root, options).is_valid()
}

/// 逐项检查数据集目录
pub fn inspect(root: &Path, options: &ValidationOptions) -> ValidationReport {
    if !root.is_dir() {
        log::debug!("Dataset root does not exist: {}", root.display());
        return ValidationReport::missing_root();
    }

    let layout = DatasetLayout::new(root);

    let readme_exists = options.check_readme.then(|| layout.readme().is_file());

    let mandatory_subfolders_exist = options.check_subfolders.then(|| {
        MANDATORY_SUBFOLDERS
            .iter()
            .all(|sub| layout.subfolder(sub).is_dir())
    });

    let optional_subfolders = options.check_optional_subfolders.then(|| {
        OPTIONAL_SUBFOLDERS
            .iter()
            .map(|sub| (sub.to_string(), layout.subfolder(sub).is_dir()))
            .collect()
    });

    // 必需子目录缺失时不再探测其中的文件
    let subfolders_ok = mandatory_subfolders_exist.unwrap_or(true);

    let (out_last_x_exists, out_last_z_exists) = if options.check_out_last_files {
        if subfolders_ok {
            (
                Some(layout.out_last(Axis::X).is_file()),
                Some(layout.out_last(Axis::Z).is_file()),
            )
        } else {
            (Some(false), Some(false))
        }
    } else {
        (None, None)
    };

    let mc_companion_exists = subfolders_ok
        && MC_COMPANION_FILES
            .iter()
            .any(|name| layout.mc_file(name).is_file());

    let structure_cif_exists = options
        .check_structure_cif
        .then(|| layout.structure_cif().is_file());

    let report = ValidationReport {
        main_folder_exists: true,
        readme_exists,
        mandatory_subfolders_exist,
        optional_subfolders,
        structure_cif_exists,
        out_last_x_exists,
        out_last_z_exists,
        mc_companion_exists,
    };

    log::debug!("Validation of {}: {:?}", root.display(), report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// 构建最小的合法数据集目录
    fn minimal_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for sub in ["GS/x", "GS/z", "Jij", "MC"] {
            fs::create_dir_all(root.join(sub)).unwrap();
        }
        for file in ["structure.cif", "MC/posfile", "GS/x/out_last", "GS/z/out_last"] {
            fs::write(root.join(file), "").unwrap();
        }
        dir
    }

    #[test]
    fn test_minimal_valid_tree() {
        let dir = minimal_tree();
        assert!(validate(dir.path(), &ValidationOptions::default()));

        fs::remove_file(dir.path().join("GS/z/out_last")).unwrap();
        assert!(!validate(dir.path(), &ValidationOptions::default()));
    }

    #[test]
    fn test_missing_root() {
        let options = ValidationOptions::default();
        assert!(!validate(Path::new("/nonexistent/uutility/dataset"), &options));

        let report = inspect(Path::new("/nonexistent/uutility/dataset"), &options);
        assert!(!report.main_folder_exists);
    }

    #[test]
    fn test_each_mandatory_item() {
        let options = ValidationOptions::default();
        for victim in ["structure.cif", "GS/x/out_last", "MC/posfile"] {
            let dir = minimal_tree();
            fs::remove_file(dir.path().join(victim)).unwrap();
            assert!(!validate(dir.path(), &options), "missing {}", victim);
        }
        for victim in ["Jij", "MC"] {
            let dir = minimal_tree();
            fs::remove_dir_all(dir.path().join(victim)).unwrap();
            assert!(!validate(dir.path(), &options), "missing {}", victim);
        }
    }

    #[test]
    fn test_any_mc_companion_file() {
        for name in ["jfile", "momfile"] {
            let dir = minimal_tree();
            fs::remove_file(dir.path().join("MC/posfile")).unwrap();
            fs::write(dir.path().join("MC").join(name), "").unwrap();
            assert!(validate(dir.path(), &ValidationOptions::default()));
        }
    }

    #[test]
    fn test_missing_subfolder_skips_file_probes() {
        let dir = minimal_tree();
        fs::remove_dir_all(dir.path().join("GS")).unwrap();

        let report = inspect(dir.path(), &ValidationOptions::default());
        assert_eq!(report.mandatory_subfolders_exist, Some(false));
        assert_eq!(report.out_last_x_exists, Some(false));
        assert!(!report.mc_companion_exists);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_readme_option() {
        let dir = minimal_tree();
        let options = ValidationOptions {
            check_readme: true,
            ..Default::default()
        };
        assert!(!validate(dir.path(), &options));

        fs::write(dir.path().join("README"), "Fe2P").unwrap();
        assert!(validate(dir.path(), &options));
    }

    #[test]
    fn test_optional_y_is_informational() {
        let dir = minimal_tree();
        let options = ValidationOptions::default();

        let report = inspect(dir.path(), &options);
        assert_eq!(report.y_axis_present(), Some(false));
        assert!(report.is_valid());

        fs::create_dir_all(dir.path().join("GS/y")).unwrap();
        let report = inspect(dir.path(), &options);
        assert_eq!(report.y_axis_present(), Some(true));
        assert!(report.is_valid());

        let no_optional = ValidationOptions {
            check_optional_subfolders: false,
            ..Default::default()
        };
        assert_eq!(inspect(dir.path(), &no_optional).y_axis_present(), None);
    }

    #[test]
    fn test_unchecked_items_do_not_gate() {
        let dir = minimal_tree();
        fs::remove_file(dir.path().join("structure.cif")).unwrap();
        fs::remove_file(dir.path().join("GS/z/out_last")).unwrap();

        let options = ValidationOptions {
            check_structure_cif: false,
            check_out_last_files: false,
            ..Default::default()
        };
        let report = inspect(dir.path(), &options);
        assert_eq!(report.structure_cif_exists, None);
        assert_eq!(report.out_last_z_exists, None);
        assert!(report.is_valid());
    }
}
