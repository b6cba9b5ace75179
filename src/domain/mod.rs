// ==========================================
// 灌装线质量检查点系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型与行记录契约
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod checkpoint;
pub mod product;
pub mod trend;
pub mod types;

// 重导出核心类型
pub use checkpoint::{
    BatchCodeFact, CheckpointRecord, FormSnapshot, TorqueTrials, COLUMN_NAMES,
};
pub use product::{Product, ProductCatalog};
pub use trend::{LineTrendSeries, TrendLine, TrendPoint};
pub use types::{BatchMatch, CheckKind, ProductionLine, Verdict};
