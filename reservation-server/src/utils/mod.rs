//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - 业务时区的日期/时间解析
//! - [`validation`] - 请求字段校验

pub mod logger;
pub mod time;
pub mod validation;

// Re-export error types from shared
pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
