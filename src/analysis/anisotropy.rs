//! # 磁晶各向异性常数 K1
//!
//! 以 z 轴为参考，对每个可用的 x/y 轴计算有限差分
//!
//! ```text
//! K_az = (E_a - E_z) / V × 2179874      (MJ/m³, E 为 Ry, V 为 Å³)
//! K1   = max(K_xz, K_yz) × 1e6          (J/m³)
//! ```
//!
//! 取所有可用差分中的最大值作为 K1。
//!
//! ## 依赖关系
//! - 被 `analysis/pipeline.rs` 使用
//! - 使用 `analysis/magnetization.rs`
//! - 使用 `models/axis.rs`

use super::magnetization;
use crate::error::{Result, UuError};
use crate::models::{Axis, AxisEnergyMap};
use crate::parsers::tagged::TaggedValueTable;
use std::collections::BTreeMap;

/// Ry/Å³ -> MJ/m³
pub const RY_PER_A3_TO_MJ_PER_M3: f64 = 2179874.0;

/// MJ/m³ -> J/m³
pub const MJ_TO_J: f64 = 1e6;

/// 各向异性常数及参与计算的差分
#[derive(Debug, Clone, PartialEq)]
pub struct AnisotropyConstant {
    /// 每个参与轴相对 z 轴的差分 (MJ/m³)
    pub differences: BTreeMap<Axis, f64>,
    /// K1 (J/m³)
    pub k1_j_per_m3: f64,
}

/// 完整推导结果
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub magnetization_t: f64,
    pub unit_cell_volume_a3: f64,
    pub anisotropy: AnisotropyConstant,
}

impl Derivation {
    pub fn k1(&self) -> f64 {
        self.anisotropy.k1_j_per_m3
    }
}

/// 由基态能量和晶胞体积计算 K1
pub fn anisotropy_constant(
    energies: &AxisEnergyMap,
    unit_cell_volume_a3: f64,
) -> Result<AnisotropyConstant> {
    let insufficient = || UuError::InsufficientAxes {
        found: energies
            .axes()
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", "),
    };

    let e_z = energies.get(Axis::Z).ok_or_else(insufficient)?;

    let differences: BTreeMap<Axis, f64> = [Axis::X, Axis::Y]
        .into_iter()
        .filter_map(|axis| {
            energies
                .get(axis)
                .map(|e| (axis, (e - e_z) / unit_cell_volume_a3 * RY_PER_A3_TO_MJ_PER_M3))
        })
        .collect();

    if differences.is_empty() {
        return Err(insufficient());
    }

    // f64::max 会跳过 NaN
    if let Some((axis, k)) = differences.iter().find(|(_, k)| !k.is_finite()) {
        return Err(UuError::InvalidValue {
            quantity: format!("K{}z", axis),
            value: *k,
            constraint: "",
        });
    }

    let max_difference = differences
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    for (axis, k) in &differences {
        log::debug!("K{}z = {} MJ/m^3", axis, k);
    }

    Ok(AnisotropyConstant {
        differences,
        k1_j_per_m3: max_difference * MJ_TO_J,
    })
}

/// 由 out_last 内容和基态能量推导磁化强度、晶胞体积和 K1
pub fn compute<S: AsRef<str>>(
    total_moments: &TaggedValueTable,
    direction_of_j: &TaggedValueTable,
    lines: &[S],
    source: &str,
    energies: &AxisEnergyMap,
) -> Result<Derivation> {
    let unit_cell_volume_a3 = magnetization::unit_cell_volume(lines, source)?;
    let magnetization_t =
        magnetization::magnetization(total_moments, direction_of_j, unit_cell_volume_a3)?;
    let anisotropy = anisotropy_constant(energies, unit_cell_volume_a3)?;

    log::info!(
        "Anisotropy constant (max of all): {} J/m^3, magnetization: {} T",
        anisotropy.k1_j_per_m3,
        magnetization_t
    );

    Ok(Derivation {
        magnetization_t,
        unit_cell_volume_a3,
        anisotropy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::out_last;
    use approx::assert_relative_eq;

    fn energies(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> AxisEnergyMap {
        let mut builder = AxisEnergyMap::builder();
        for (axis, e) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            if let Some(e) = e {
                builder = builder.energy(axis, e);
            }
        }
        builder.build()
    }

    #[test]
    fn test_anisotropy_concrete() {
        let result =
            anisotropy_constant(&energies(Some(-10.0), Some(-12.0), Some(-8.0)), 100.0).unwrap();

        assert_relative_eq!(result.differences[&Axis::X], -43597.48, max_relative = 1e-12);
        assert_relative_eq!(result.differences[&Axis::Y], -87194.96, max_relative = 1e-12);
        assert_relative_eq!(result.k1_j_per_m3, -43597.48 * 1e6, max_relative = 1e-12);
    }

    #[test]
    fn test_anisotropy_only_xz() {
        let result = anisotropy_constant(&energies(Some(-10.0), None, Some(-8.0)), 100.0).unwrap();
        assert_eq!(result.differences.keys().collect::<Vec<_>>(), vec![&Axis::X]);
        assert_relative_eq!(result.k1_j_per_m3, -43597.48 * 1e6, max_relative = 1e-12);
    }

    #[test]
    fn test_anisotropy_only_yz() {
        let result = anisotropy_constant(&energies(None, Some(-7.0), Some(-8.0)), 50.0).unwrap();
        assert_relative_eq!(
            result.k1_j_per_m3,
            1.0 / 50.0 * 2179874.0 * 1e6,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_insufficient_axes() {
        let no_z = anisotropy_constant(&energies(Some(-10.0), Some(-12.0), None), 100.0);
        assert!(matches!(no_z, Err(UuError::InsufficientAxes { ref found }) if found == "x, y"));

        let only_z = anisotropy_constant(&energies(None, None, Some(-8.0)), 100.0);
        assert!(matches!(only_z, Err(UuError::InsufficientAxes { .. })));
    }

    #[test]
    fn test_compute_is_pure() {
        let volume_bohr3 = 100.0 * magnetization::BOHR_PER_ANGSTROM.powi(3);
        let lines = vec![
            " Fe1 Total moment [J=L+S] (mu_B):  2.0".to_string(),
            " Fe1 Direction of J (Cartesian):   0.0 0.0 1.0".to_string(),
            format!(" cell unit cell volume:  {}", volume_bohr3),
        ];
        let moments = out_last::parse_total_moments(&lines, "out_last").unwrap();
        let directions = out_last::parse_direction_of_j(&lines, "out_last").unwrap();
        let energies = energies(Some(-10.0), Some(-12.0), Some(-8.0));

        let first = compute(&moments, &directions, &lines, "out_last", &energies).unwrap();
        let second = compute(&moments, &directions, &lines, "out_last", &energies).unwrap();

        assert_eq!(first.k1().to_bits(), second.k1().to_bits());
        assert_eq!(
            first.magnetization_t.to_bits(),
            second.magnetization_t.to_bits()
        );
        assert_relative_eq!(first.unit_cell_volume_a3, 100.0, epsilon = 1e-9);
        assert_relative_eq!(first.magnetization_t, 2.0 / 100.0 * 11.654, max_relative = 1e-9);
        assert_relative_eq!(first.k1(), -43597.48 * 1e6, max_relative = 1e-9);
    }

    #[test]
    fn test_anisotropy_zero_volume() {
        let result = anisotropy_constant(&energies(Some(-10.0), None, Some(-8.0)), 0.0);
        assert!(matches!(
            result,
            Err(UuError::InvalidValue { ref quantity, value, .. })
                if quantity == "Kxz" && value == f64::NEG_INFINITY
        ));
    }

    #[test]
    fn test_anisotropy_nan_energy() {
        let result =
            anisotropy_constant(&energies(Some(f64::NAN), Some(-12.0), Some(-8.0)), 100.0);
        assert!(matches!(
            result,
            Err(UuError::InvalidValue { ref quantity, value, .. })
                if quantity == "Kxz" && value.is_nan()
        ));
    }

    #[test]
    fn test_compute_zero_volume() {
        let lines = [
            " Fe1 Total moment [J=L+S] (mu_B):  2.0",
            " Fe1 Direction of J (Cartesian):   0.0 0.0 1.0",
            " cell unit cell volume:  0.0",
        ];
        let moments = out_last::parse_total_moments(&lines, "out_last").unwrap();
        let directions = out_last::parse_direction_of_j(&lines, "out_last").unwrap();
        let energies = energies(Some(-10.0), Some(-12.0), Some(-8.0));

        let err = compute(&moments, &directions, &lines, "out_last", &energies).unwrap_err();
        assert!(matches!(err, UuError::InvalidValue { .. }));
    }
}

