// ==========================================
// 灌装线质量检查点系统 - 仓储层
// ==========================================
// 职责: 检查点日志的追加式落盘与读回
// 红线: 仓储不做业务判定,只做数据映射;落盘失败原样上报,不吞错不重试
// ==========================================

pub mod checkpoint_sink;
pub mod csv_sink;
pub mod error;
pub mod sqlite_sink;

// 重导出核心类型
pub use checkpoint_sink::CheckpointSink;
pub use csv_sink::CsvCheckpointSink;
pub use error::{SinkError, SinkResult};
pub use sqlite_sink::{SqliteCheckpointSink, SINK_SCHEMA_VERSION};
