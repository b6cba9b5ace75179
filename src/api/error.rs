// ==========================================
// 灌装线质量检查点系统 - API 层错误类型
// ==========================================

use crate::config::ConfigError;
use crate::repository::SinkError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("存储错误: {0}")]
    Sink(#[from] SinkError),

    #[error("参数校验失败: {0}")]
    Validation(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
