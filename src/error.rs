//! 错误类型定义
//!
//! 每一层一个错误枚举，`AppError` 在 main 中汇总

use std::path::PathBuf;

use thiserror::Error;

use crate::playback::Year;

/// 年份状态错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("year {year} is outside the available range {first}..={last}")]
    InvalidYear { year: Year, first: Year, last: Year },

    #[error("empty year range {start}..={end}")]
    EmptyRange { start: Year, end: Year },
}

/// 数据集加载错误
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open dataset '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read dataset '{path}' at line {line}: {source}")]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("invalid {column} value '{value}' in '{path}' at line {line}")]
    Parse {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// 配置文件错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

/// 组件在处理通知时返回的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    #[error("component '{component}' has no data for year {year}")]
    MissingYear { component: String, year: Year },
}

/// 顶层错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
