//! # 晶胞体积与磁化强度
//!
//! - 晶胞体积：`unit cell volume:` 行（bohr³）换算为 Å³
//! - 总磁矩：每个位点的总磁矩乘以 J 方向的主分量（|c| > 0.9）后求和
//! - 磁化强度：总磁矩 / 晶胞体积 × 11.654，单位 T
//!
//! ## 依赖关系
//! - 被 `analysis/anisotropy.rs`, `analysis/pipeline.rs` 使用
//! - 使用 `parsers/out_last.rs`, `parsers/tagged.rs`

use crate::error::{Result, UuError};
use crate::parsers::out_last;
use crate::parsers::tagged::TaggedValueTable;

/// 1 Å = 1.8897259 bohr
pub const BOHR_PER_ANGSTROM: f64 = 1.8897259;

/// μB/Å³ -> T
pub const MU_B_PER_A3_TO_TESLA: f64 = 11.654;

/// J 方向主分量的判定阈值
pub const DOMINANT_COMPONENT_THRESHOLD: f64 = 0.9;

/// 从 out_last 内容中读取晶胞体积 (Å³)
pub fn unit_cell_volume<S: AsRef<str>>(lines: &[S], source: &str) -> Result<f64> {
    let volume_bohr3 = out_last::parse_unit_cell_volume(lines, source)?;
    if !(volume_bohr3.is_finite() && volume_bohr3 > 0.0) {
        return Err(UuError::InvalidValue {
            quantity: format!("unit cell volume in {}", source),
            value: volume_bohr3,
            constraint: " > 0",
        });
    }
    let volume_a3 = volume_bohr3 / BOHR_PER_ANGSTROM.powi(3);
    log::debug!(
        "Unit cell volume: {} bohr^3 = {} A^3",
        volume_bohr3,
        volume_a3
    );
    Ok(volume_a3)
}

/// J 方向中唯一满足 |c| > 0.9 的分量（保留符号）
pub fn dominant_component(identifier: &str, direction: &[f64]) -> Result<f64> {
    let dominant: Vec<f64> = direction
        .iter()
        .copied()
        .filter(|c| c.abs() > DOMINANT_COMPONENT_THRESHOLD)
        .collect();

    match dominant.as_slice() {
        [c] => Ok(*c),
        _ => Err(UuError::DegenerateDirection {
            identifier: identifier.to_string(),
            count: dominant.len(),
            threshold: DOMINANT_COMPONENT_THRESHOLD,
        }),
    }
}

/// 总磁矩在主轴上的投影之和 (μB)
pub fn total_moment_projection(
    total_moments: &TaggedValueTable,
    direction_of_j: &TaggedValueTable,
) -> Result<f64> {
    let mut total = 0.0;

    for identifier in total_moments.keys() {
        let moment = total_moments.first_value_of(identifier)?;
        let direction =
            direction_of_j
                .get(identifier)
                .ok_or_else(|| UuError::MissingIdentifier {
                    identifier: identifier.to_string(),
                    tag: direction_of_j.tag().to_string(),
                })?;

        total += moment * dominant_component(identifier, direction)?;
    }

    Ok(total)
}

/// 磁化强度 (T)
pub fn magnetization(
    total_moments: &TaggedValueTable,
    direction_of_j: &TaggedValueTable,
    unit_cell_volume_a3: f64,
) -> Result<f64> {
    let total = total_moment_projection(total_moments, direction_of_j)?;
    let magnetization_t = total / unit_cell_volume_a3 * MU_B_PER_A3_TO_TESLA;
    if !magnetization_t.is_finite() {
        return Err(UuError::InvalidValue {
            quantity: "magnetization".to_string(),
            value: magnetization_t,
            constraint: "",
        });
    }
    log::debug!(
        "Total moment {} mu_B over {} A^3 -> {} T",
        total,
        unit_cell_volume_a3,
        magnetization_t
    );
    Ok(magnetization_t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::tagged::extract;
    use approx::assert_relative_eq;

    fn tables(moments: &[&str], directions: &[&str]) -> (TaggedValueTable, TaggedValueTable) {
        (
            extract(moments, "moment:", "out_last").unwrap(),
            extract(directions, "dir:", "out_last").unwrap(),
        )
    }

    #[test]
    fn test_magnetization_concrete() {
        let (moments, directions) = tables(&["A moment: 2.0"], &["A dir: 0.95 0.1 0.1"]);

        assert_relative_eq!(
            total_moment_projection(&moments, &directions).unwrap(),
            1.9,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            magnetization(&moments, &directions, 50.0).unwrap(),
            1.9 / 50.0 * 11.654,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_projection_keeps_sign() {
        let (moments, directions) = tables(
            &["Fe1 moment: 2.0", "Nd1 moment: 1.5"],
            &["Fe1 dir: 0.0 0.0 1.0", "Nd1 dir: 0.0 0.0 -1.0"],
        );
        assert_relative_eq!(
            total_moment_projection(&moments, &directions).unwrap(),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_degenerate_direction() {
        let (moments, none) = tables(&["A moment: 2.0"], &["A dir: 0.5 0.5 0.7"]);
        match total_moment_projection(&moments, &none) {
            Err(UuError::DegenerateDirection {
                identifier, count, ..
            }) => {
                assert_eq!(identifier, "A");
                assert_eq!(count, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let (moments, two) = tables(&["A moment: 2.0"], &["A dir: 0.95 -0.95 0.0"]);
        assert!(matches!(
            total_moment_projection(&moments, &two),
            Err(UuError::DegenerateDirection { count: 2, .. })
        ));
    }

    #[test]
    fn test_missing_direction_identifier() {
        let (moments, directions) = tables(&["A moment: 2.0"], &["B dir: 1.0 0.0 0.0"]);
        assert!(matches!(
            total_moment_projection(&moments, &directions),
            Err(UuError::MissingIdentifier { ref identifier, .. }) if identifier == "A"
        ));
    }

    #[test]
    fn test_unit_cell_volume_conversion() {
        let bohr3 = BOHR_PER_ANGSTROM.powi(3) * 100.0;
        let lines = vec![format!(" cell unit cell volume: {}", bohr3)];
        assert_relative_eq!(
            unit_cell_volume(&lines, "out_last").unwrap(),
            100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_unit_cell_volume_must_be_positive() {
        for volume in ["0.0", "-12.5", "inf"] {
            let lines = vec![format!(" cell unit cell volume: {}", volume)];
            assert!(matches!(
                unit_cell_volume(&lines, "out_last"),
                Err(UuError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn test_magnetization_zero_volume() {
        let (moments, directions) = tables(&["A moment: 2.0"], &["A dir: 0.0 0.0 1.0"]);
        assert!(matches!(
            magnetization(&moments, &directions, 0.0),
            Err(UuError::InvalidValue { ref quantity, .. }) if quantity == "magnetization"
        ));
    }
}
