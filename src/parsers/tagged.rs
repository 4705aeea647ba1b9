//! # 行标签数值提取器
//!
//! 扫描文本文件的每一行，对包含标签字符串的行：
//! - 第一个空白分隔的 token 作为标识符
//! - 标签最后一次出现之后的所有 token 解析为 `f64`
//!
//! 同一标识符出现多次时，后出现的行覆盖之前的值（last-write-wins）。
//! 标签从未出现时返回空表而不是错误。
//!
//! ```text
//!  Fe1  Total moment [J=L+S] (mu_B):   2.2051
//!  ^^^                                  ^^^^^^
//!  标识符                               数值序列
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/out_mf.rs`, `parsers/out_last.rs` 使用
//! - 被 `analysis/` 使用

use crate::error::{Result, UuError};
use std::collections::BTreeMap;

/// 某个标识符对应的一行数据
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedEntry {
    /// 行号（从 1 开始）
    pub line_no: usize,
    pub values: Vec<f64>,
}

/// 标识符 -> 数值序列
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedValueTable {
    source: String,
    tag: String,
    entries: BTreeMap<String, TaggedEntry>,
}

/// 从文本行中提取带标签的数值表
pub fn extract<S: AsRef<str>>(lines: &[S], tag: &str, source: &str) -> Result<TaggedValueTable> {
    TaggedValueTable::extract(lines, tag, source)
}

impl TaggedValueTable {
    /// 从文本行中提取带标签的数值表
    ///
    /// `source` 仅用于错误信息（通常为文件路径）。
    pub fn extract<S: AsRef<str>>(lines: &[S], tag: &str, source: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (idx, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let Some(pos) = line.rfind(tag) else {
                continue;
            };

            let Some(key) = line.split_whitespace().next() else {
                continue;
            };

            let values = line[pos + tag.len()..]
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|_| UuError::MalformedData {
                        path: source.to_string(),
                        line_no: idx + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            entries.insert(
                key.to_string(),
                TaggedEntry {
                    line_no: idx + 1,
                    values,
                },
            );
        }

        Ok(TaggedValueTable {
            source: source.to_string(),
            tag: tag.to_string(),
            entries,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.entries.get(key).map(|e| e.values.as_slice())
    }

    /// 某个标识符的第一个数值
    pub fn first_value_of(&self, key: &str) -> Result<f64> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| UuError::MissingIdentifier {
                identifier: key.to_string(),
                tag: self.tag.clone(),
            })?;

        entry
            .values
            .first()
            .copied()
            .ok_or_else(|| UuError::MalformedData {
                path: self.source.clone(),
                line_no: entry.line_no,
                token: String::new(),
            })
    }

    /// 唯一的标识符；没有或多于一个时报错
    pub fn sole_key(&self) -> Result<&str> {
        match self.entries.len() {
            0 => Err(UuError::MissingTag {
                path: self.source.clone(),
                tag: self.tag.clone(),
            }),
            1 => Ok(self.keys().next().unwrap_or_default()),
            _ => Err(UuError::AmbiguousKey {
                path: self.source.clone(),
                tag: self.tag.clone(),
                keys: self.keys().map(str::to_string).collect(),
            }),
        }
    }

    /// 唯一标识符的第一个数值
    pub fn sole_first_value(&self) -> Result<f64> {
        let key = self.sole_key()?;
        self.first_value_of(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tag_scan() {
        let lines = ["A tag: 1.0 2.0", "untagged 5.0", "B tag: 3.0"];
        let table = extract(&lines, "tag:", "test").unwrap();

        assert_eq!(table.keys().count(), 2);
        assert_eq!(table.get("A"), Some(&[1.0, 2.0][..]));
        assert_eq!(table.get("B"), Some(&[3.0][..]));
        assert_eq!(table.get("untagged"), None);
    }

    #[test]
    fn test_extract_last_write_wins() {
        let lines = ["K tag: 1.0", "K tag: 2.0"];
        let table = extract(&lines, "tag:", "test").unwrap();

        assert_eq!(table.keys().count(), 1);
        assert_eq!(table.get("K"), Some(&[2.0][..]));
    }

    #[test]
    fn test_extract_tag_absent() {
        let lines = ["nothing here", "  1.0 2.0 3.0"];
        let table = extract(&lines, "tag:", "test").unwrap();
        assert_eq!(table.keys().count(), 0);
    }

    #[test]
    fn test_extract_values_after_last_occurrence() {
        let lines = ["Fe1 x: 9.0 x: -1.5 2.5e-1"];
        let table = extract(&lines, "x:", "test").unwrap();
        assert_eq!(table.get("Fe1"), Some(&[-1.5, 0.25][..]));
    }

    #[test]
    fn test_extract_multiword_tag() {
        let lines = [
            " Fe1   Direction of J (Cartesian):   0.00000  0.00000  1.00000",
            " Co2   Direction of J (Cartesian):   0.00000 -0.99990  0.01000",
        ];
        let table = extract(&lines, "Direction of J (Cartesian):", "out_last").unwrap();
        assert_eq!(table.get("Fe1"), Some(&[0.0, 0.0, 1.0][..]));
        assert_eq!(table.get("Co2"), Some(&[0.0, -0.9999, 0.01][..]));
    }

    #[test]
    fn test_extract_malformed_token() {
        let lines = ["header", "A tag: 1.0 oops"];
        let err = extract(&lines, "tag:", "GS/x/out_MF_x").unwrap_err();
        match err {
            UuError::MalformedData {
                path,
                line_no,
                token,
            } => {
                assert_eq!(path, "GS/x/out_MF_x");
                assert_eq!(line_no, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extract_rejects_trailing_word() {
        let lines = ["cell unit cell volume: 675.0 extra"];
        let err = extract(&lines, "unit cell volume:", "out_last").unwrap_err();
        assert!(matches!(err, UuError::MalformedData { ref token, .. } if token == "extra"));
    }

    #[test]
    fn test_sole_first_value() {
        let lines = ["cell unit cell volume: 675.0 1.0"];
        let table = extract(&lines, "unit cell volume:", "out_last").unwrap();
        assert_eq!(table.sole_key().unwrap(), "cell");
        assert_eq!(table.sole_first_value().unwrap(), 675.0);
    }

    #[test]
    fn test_sole_key_missing_and_ambiguous() {
        let empty = extract(&["no tag"], "tag:", "f").unwrap();
        assert!(matches!(empty.sole_key(), Err(UuError::MissingTag { .. })));

        let two = extract(&["A tag: 1", "B tag: 2"], "tag:", "f").unwrap();
        match two.sole_first_value() {
            Err(UuError::AmbiguousKey { keys, .. }) => assert_eq!(keys, vec!["A", "B"]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_first_value_of_missing_and_empty() {
        let table = extract(&["A tag:", "B tag: 4.0"], "tag:", "f").unwrap();
        assert_eq!(table.first_value_of("B").unwrap(), 4.0);
        assert!(matches!(
            table.first_value_of("A"),
            Err(UuError::MalformedData { line_no: 1, .. })
        ));
        assert!(matches!(
            table.first_value_of("C"),
            Err(UuError::MissingIdentifier { .. })
        ));
    }
}
