// ==========================================
// 灌装线质量检查点系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
///
/// 追加或读回失败必须原样上报调用方;本层不重试、不降级
#[derive(Error, Debug)]
pub enum SinkError {
    // ===== 落盘错误 =====
    #[error("记录追加失败: {0}")]
    AppendFailed(String),

    #[error("历史记录读取失败: {0}")]
    ReadFailed(String),

    // ===== 数据库错误 =====
    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    #[error("数据库查询失败: {0}")]
    DatabaseQueryError(String),

    #[error("唯一约束违反: {0}")]
    UniqueConstraintViolation(String),

    // ===== 契约错误 =====
    #[error("存储 schema 版本不匹配: expected=v{expected}, actual=v{actual}")]
    SchemaMismatch { expected: i64, actual: i64 },

    #[error("CSV 表头与行记录契约不一致: {0}")]
    HeaderMismatch(String),

    // ===== 通用错误 =====
    #[error("CSV 处理失败: {0}")]
    CsvError(String),

    #[error("IO 失败: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for SinkError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    SinkError::UniqueConstraintViolation(msg)
                } else {
                    SinkError::DatabaseQueryError(msg)
                }
            }
            _ => SinkError::DatabaseQueryError(err.to_string()),
        }
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for SinkError {
    fn from(err: csv::Error) -> Self {
        SinkError::CsvError(err.to_string())
    }
}

/// Result 类型别名
pub type SinkResult<T> = Result<T, SinkError>;
