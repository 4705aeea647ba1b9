//! # 统一错误处理模块
//!
//! 定义 uutility 的所有错误类型，使用 `thiserror` 派生。
//!
//! 目录校验从不报错（缺失的文件/文件夹编码为 `false`），
//! 其余组件遇到缺失、歧义或格式错误的数据时一律返回错误，不做默认值替换。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// uutility 统一错误类型
#[derive(Error, Debug)]
pub enum UuError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed data in {path}, line {line_no}: cannot parse '{token}' as a number")]
    MalformedData {
        path: String,
        line_no: usize,
        token: String,
    },

    #[error("Tag '{tag}' not found in {path}")]
    MissingTag { path: String, tag: String },

    #[error("Tag '{tag}' in {path} is carried by {} identifiers ({}), expected exactly one", .keys.len(), .keys.join(", "))]
    AmbiguousKey {
        path: String,
        tag: String,
        keys: Vec<String>,
    },

    #[error("Identifier '{identifier}' has no '{tag}' entry")]
    MissingIdentifier { identifier: String, tag: String },

    // ─────────────────────────────────────────────────────────────
    // 计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Direction of J for '{identifier}' has {count} components with |c| > {threshold}, expected exactly one")]
    DegenerateDirection {
        identifier: String,
        count: usize,
        threshold: f64,
    },

    #[error("Invalid {quantity}: {value} (expected a finite value{constraint})")]
    InvalidValue {
        quantity: String,
        value: f64,
        constraint: &'static str,
    },

    #[error("Insufficient axis energies: need 'z' and at least one of 'x'/'y', found [{found}]")]
    InsufficientAxes { found: String },

    #[error("Unknown physical unit: {0}")]
    UnknownUnit(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, UuError>;
